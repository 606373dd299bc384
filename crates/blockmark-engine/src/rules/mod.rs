//! # Structural Rules
//!
//! A [`Rule`] decides whether a block belongs to its structural category and,
//! if so, emits start/content/end events for it.
//!
//! ## Evaluation
//!
//! The parser asks each rule in registration order. For the first rule whose
//! [`Rule::condition`] holds, [`Rule::action`] runs; if the action returns
//! `true` no further rule sees the block. Returning `false` lets a rule emit
//! events (such as closing a list) and still pass the block on.
//!
//! ## Built-in rules
//!
//! Standard priority order:
//!
//! 1. **`ListRule`**: opens/closes the surrounding list around runs of items
//! 2. **`ListItemRule`**: one `- item` block
//! 3. **`TitleRule`**: the first block, if it is heading-shaped (one-shot)
//! 4. **`HeadingRule`**: short single-line blocks
//! 5. **`ParagraphRule`**: everything else (catch-all)
//!
//! ## State
//!
//! Rules keep private state across blocks within one parse. The parser calls
//! [`Rule::reset`] before every parse and [`Rule::finish`] after the last block.

pub mod heading;
pub mod list;
pub mod paragraph;
pub mod title;

pub use heading::{HeadingRule, is_heading_shaped};
pub use list::{ListItemRule, ListRule, ListState, is_list_item, list_item_content};
pub use paragraph::ParagraphRule;
pub use title::{TitleRule, TitleState};

use crate::{
    blocks::Block,
    render::{RenderResult, Renderer},
};

pub trait Rule {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this rule wants `block`. Must not change state.
    fn condition(&self, block: &Block) -> bool;

    /// Emits events for `block`. Returns `true` to stop propagation.
    fn action(&mut self, block: &Block, renderer: &mut dyn Renderer) -> RenderResult<bool>;

    /// Returns private state to its initial value.
    fn reset(&mut self) {}

    /// Closes anything still open once the input is exhausted.
    fn finish(&mut self, _renderer: &mut dyn Renderer) -> RenderResult<()> {
        Ok(())
    }

    /// True for a rule whose condition always holds and whose action always
    /// stops propagation. A parser needs at least one.
    fn is_catch_all(&self) -> bool {
        false
    }
}

/// The built-in rules in standard priority order.
pub fn standard_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ListRule::new()),
        Box::new(ListItemRule),
        Box::new(TitleRule::new()),
        Box::new(HeadingRule),
        Box::new(ParagraphRule),
    ]
}
