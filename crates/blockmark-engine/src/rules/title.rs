use crate::{
    blocks::Block,
    render::{Event, RenderResult, Renderer, bracket},
};

use super::{Rule, heading::is_heading_shaped};

/// One-shot state of [`TitleRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleState {
    #[default]
    Pending,
    Emitted,
}

/// The document title: the first block, when it is heading-shaped.
#[derive(Debug, Default)]
pub struct TitleRule {
    state: TitleState,
}

impl TitleRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TitleState {
        self.state
    }
}

impl Rule for TitleRule {
    fn name(&self) -> &'static str {
        "title"
    }

    fn condition(&self, block: &Block) -> bool {
        self.state == TitleState::Pending && block.is_first() && is_heading_shaped(block.text())
    }

    fn action(&mut self, block: &Block, renderer: &mut dyn Renderer) -> RenderResult<bool> {
        self.state = TitleState::Emitted;
        bracket(renderer, Event::Title, block.text())?;
        Ok(true)
    }

    fn reset(&mut self) {
        self.state = TitleState::Pending;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RenderEvent, TraceRenderer};

    #[test]
    fn matches_first_heading_shaped_block() {
        let rule = TitleRule::new();
        assert!(rule.condition(&Block::new(0, "My Notes")));
        assert!(!rule.condition(&Block::new(0, "Not a title.")));
        assert!(!rule.condition(&Block::new(1, "My Notes")));
    }

    #[test]
    fn fires_once() {
        let mut rule = TitleRule::new();
        let mut r = TraceRenderer::new();
        let block = Block::new(0, "My Notes");

        assert!(rule.action(&block, &mut r).unwrap());
        assert_eq!(rule.state(), TitleState::Emitted);
        assert!(!rule.condition(&block));
        assert_eq!(
            r.events(),
            &[
                RenderEvent::Start(Event::Title),
                RenderEvent::Feed("My Notes".to_string()),
                RenderEvent::End(Event::Title),
            ]
        );
    }

    #[test]
    fn reset_rearms() {
        let mut rule = TitleRule::new();
        rule.action(&Block::new(0, "T"), &mut TraceRenderer::new())
            .unwrap();
        rule.reset();
        assert_eq!(rule.state(), TitleState::Pending);
        assert!(rule.condition(&Block::new(0, "T")));
    }
}
