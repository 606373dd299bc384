use crate::{
    blocks::Block,
    render::{Event, RenderResult, Renderer, bracket},
};

use super::{Rule, list::is_list_item};

/// Longest block, in characters, still treated as a heading.
pub const MAX_HEADING_CHARS: usize = 70;

/// Characters that end a sentence rather than a heading.
const SENTENCE_ENDINGS: [char; 6] = ['.', ':', ';', ',', '!', '?'];

/// Returns true if `text` reads like a short structural marker: one line,
/// at most [`MAX_HEADING_CHARS`] characters, no trailing sentence
/// punctuation, and not a list item.
pub fn is_heading_shaped(text: &str) -> bool {
    !text.is_empty()
        && !text.contains('\n')
        && text.chars().count() <= MAX_HEADING_CHARS
        && !text.ends_with(SENTENCE_ENDINGS)
        && !is_list_item(text)
}

/// A heading anywhere after the first block (the first belongs to the title).
pub struct HeadingRule;

impl Rule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn condition(&self, block: &Block) -> bool {
        !block.is_first() && is_heading_shaped(block.text())
    }

    fn action(&mut self, block: &Block, renderer: &mut dyn Renderer) -> RenderResult<bool> {
        bracket(renderer, Event::Heading, block.text())?;
        Ok(true)
    }
}
