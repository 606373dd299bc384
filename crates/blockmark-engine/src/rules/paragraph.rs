use crate::{
    blocks::Block,
    render::{Event, RenderResult, Renderer, bracket},
};

use super::Rule;

/// Catch-all rule: any block no earlier rule claimed becomes a paragraph.
pub struct ParagraphRule;

impl Rule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn condition(&self, _block: &Block) -> bool {
        true
    }

    fn action(&mut self, block: &Block, renderer: &mut dyn Renderer) -> RenderResult<bool> {
        bracket(renderer, Event::Paragraph, block.text())?;
        Ok(true)
    }

    fn is_catch_all(&self) -> bool {
        true
    }
}
