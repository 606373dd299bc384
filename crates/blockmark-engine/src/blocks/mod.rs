//! # Block Segmentation
//!
//! Turns a character stream into a lazy sequence of [`Block`]s.
//!
//! A block is a run of non-blank lines. Blank lines (whitespace only)
//! separate blocks; each block is trimmed before it is handed out, so no
//! block is ever empty.
//!
//! ## Modules
//!
//! - **`types`**: The immutable [`Block`] value with its document position
//! - **`source`**: [`Blocks`] iterator over any `BufRead`, created by [`blocks`]

pub mod source;
pub mod types;

pub use source::{Blocks, blocks};
pub use types::Block;
