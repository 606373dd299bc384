use std::fmt;

/// One paragraph-like unit of input text.
///
/// Blocks are immutable once created; filters produce a new block via
/// [`Block::with_text`] rather than editing in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Zero-based position of this block in the document.
    index: usize,
    /// Trimmed, non-empty text.
    text: String,
}

impl Block {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if this is the first block of the document.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Same position, rewritten text.
    #[must_use]
    pub fn with_text(&self, text: String) -> Self {
        Self {
            index: self.index,
            text,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Block {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
