use std::fmt;

/// Structural categories a renderer can open and close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The whole document; brackets every parse.
    Document,
    /// The document title (first block only).
    Title,
    Heading,
    Paragraph,
    /// A run of consecutive list items.
    List,
    ListItem,
}

impl Event {
    pub const ALL: [Event; 6] = [
        Event::Document,
        Event::Title,
        Event::Heading,
        Event::Paragraph,
        Event::List,
        Event::ListItem,
    ];

    /// The canonical lowercase name of the event.
    pub fn name(self) -> &'static str {
        match self {
            Event::Document => "document",
            Event::Title => "title",
            Event::Heading => "heading",
            Event::Paragraph => "paragraph",
            Event::List => "list",
            Event::ListItem => "listitem",
        }
    }

    /// Resolves a canonical name. Returns `None` for names no renderer knows.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
