//! # blockmark engine
//!
//! Converts plain text into structured markup by pushing blank-line-delimited
//! blocks through ordered inline filters and structural rules, which drive a
//! [`Renderer`].
//!
//! ```
//! use blockmark_engine::{HtmlRenderer, markup};
//!
//! let mut html = HtmlRenderer::new(Vec::new());
//! markup("Hello\n\nSome *bold* claim.".as_bytes(), &mut html).unwrap();
//! let out = String::from_utf8(html.into_inner()).unwrap();
//! assert!(out.contains("<em>bold</em>"));
//! ```

pub mod blocks;
pub mod error;
pub mod filter;
pub mod parser;
pub mod render;
pub mod rules;

use std::io::BufRead;

// Re-export key types for easier usage
pub use blocks::{Block, Blocks, blocks};
pub use error::MarkupError;
pub use filter::Filter;
pub use parser::{Parser, ParserBuilder, ParserState};
pub use render::{
    Event, HtmlOptions, HtmlRenderer, RenderEvent, RenderResult, Renderer, TraceRenderer,
};
pub use rules::Rule;

/// Runs the standard parser over `reader`, driving `renderer`.
pub fn markup<R: BufRead>(reader: R, renderer: &mut dyn Renderer) -> Result<(), MarkupError> {
    let mut parser = Parser::basic()?;
    parser.parse(blocks(reader), renderer)
}
