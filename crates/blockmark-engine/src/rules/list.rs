use crate::{
    blocks::Block,
    render::{Event, RenderResult, Renderer, bracket},
};

use super::Rule;

/// The list item marker.
pub const MARKER: char = '-';

/// Returns true if `text` starts with the list marker followed by whitespace.
pub fn is_list_item(text: &str) -> bool {
    text.strip_prefix(MARKER)
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Text of a list item without its marker, trimmed.
pub fn list_item_content(text: &str) -> &str {
    text.strip_prefix(MARKER).unwrap_or(text).trim()
}

/// Whether a list is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Closed,
    Open,
}

/// Brackets runs of consecutive list items with `start(list)`/`end(list)`.
///
/// Never stops propagation: the item itself is left to [`ListItemRule`] and a
/// block that ends the list still falls through to later rules.
#[derive(Debug, Default)]
pub struct ListRule {
    state: ListState,
}

impl ListRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ListState {
        self.state
    }
}

impl Rule for ListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn condition(&self, block: &Block) -> bool {
        self.state == ListState::Open || is_list_item(block.text())
    }

    fn action(&mut self, block: &Block, renderer: &mut dyn Renderer) -> RenderResult<bool> {
        let item = is_list_item(block.text());
        match (self.state, item) {
            (ListState::Closed, true) => {
                renderer.start(Event::List)?;
                self.state = ListState::Open;
            }
            (ListState::Open, false) => {
                renderer.end(Event::List)?;
                self.state = ListState::Closed;
            }
            _ => {}
        }
        Ok(false)
    }

    fn reset(&mut self) {
        self.state = ListState::Closed;
    }

    fn finish(&mut self, renderer: &mut dyn Renderer) -> RenderResult<()> {
        if self.state == ListState::Open {
            renderer.end(Event::List)?;
            self.state = ListState::Closed;
        }
        Ok(())
    }
}

/// A single `- item` block.
pub struct ListItemRule;

impl Rule for ListItemRule {
    fn name(&self) -> &'static str {
        "listitem"
    }

    fn condition(&self, block: &Block) -> bool {
        is_list_item(block.text())
    }

    fn action(&mut self, block: &Block, renderer: &mut dyn Renderer) -> RenderResult<bool> {
        bracket(renderer, Event::ListItem, list_item_content(block.text()))?;
        Ok(true)
    }
}
