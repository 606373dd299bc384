#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("No catch-all rule registered: every block needs a fallback rule")]
    MissingCatchAll,
    #[error("Invalid filter pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),
    #[error("Renderer failed{}: {source}", block_context(.block))]
    Render {
        /// Filtered text of the block being processed, if any.
        block: Option<String>,
        source: anyhow::Error,
    },
}

impl MarkupError {
    pub(crate) fn render(block: Option<&str>, source: anyhow::Error) -> Self {
        MarkupError::Render {
            block: block.map(str::to_owned),
            source,
        }
    }
}

fn block_context(block: &Option<String>) -> String {
    match block {
        Some(text) => format!(" on block {text:?}"),
        None => String::new(),
    }
}
