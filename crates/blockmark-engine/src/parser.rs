//! # Parser
//!
//! Drives blocks through the filter/rule pipeline:
//!
//! ```text
//! blocks ─▶ Filter × N (in order) ─▶ Rule × M (first stop wins) ─▶ Renderer
//! ```
//!
//! The whole run is bracketed by `start(document)` / `end(document)`.

use std::io;

use crate::{
    blocks::Block,
    error::MarkupError,
    filter::{Filter, standard_filters},
    render::{Event, Renderer},
    rules::{Rule, standard_rules},
};

/// Lifecycle of a [`Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    NotStarted,
    Running,
    Finished,
}

/// Registers rules and filters before a [`Parser`] exists.
#[derive(Default)]
pub struct ParserBuilder {
    rules: Vec<Box<dyn Rule>>,
    filters: Vec<Filter>,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule; rules are evaluated in the order they are added.
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Box<dyn Rule>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Appends a filter; filters are applied in the order they are added.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Fails with [`MarkupError::MissingCatchAll`] if no rule would handle
    /// an arbitrary block.
    pub fn build(self) -> Result<Parser, MarkupError> {
        if !self.rules.iter().any(|r| r.is_catch_all()) {
            return Err(MarkupError::MissingCatchAll);
        }
        Ok(Parser {
            rules: self.rules,
            filters: self.filters,
            state: ParserState::NotStarted,
        })
    }
}

pub struct Parser {
    rules: Vec<Box<dyn Rule>>,
    filters: Vec<Filter>,
    state: ParserState,
}

impl Parser {
    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    /// The standard plain-text parser: list, list item, title, heading and
    /// paragraph rules with the emphasis, url and mail filters.
    pub fn basic() -> Result<Self, MarkupError> {
        Self::builder()
            .rules(standard_rules())
            .filters(standard_filters()?)
            .build()
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Returns every rule to its initial state.
    pub fn reset(&mut self) {
        for rule in &mut self.rules {
            rule.reset();
        }
        self.state = ParserState::NotStarted;
    }

    /// Runs one full parse over `blocks`, driving `renderer`.
    ///
    /// Rule state is reset first, so a parser can be run again. Read and
    /// renderer errors abort the parse; renderer errors raised while a block
    /// is being processed carry that block's text.
    pub fn parse<I>(&mut self, blocks: I, renderer: &mut dyn Renderer) -> Result<(), MarkupError>
    where
        I: IntoIterator<Item = io::Result<Block>>,
    {
        self.reset();
        self.state = ParserState::Running;
        log::debug!(
            "parse started with {} rules and {} filters",
            self.rules.len(),
            self.filters.len()
        );

        renderer
            .start(Event::Document)
            .map_err(|e| MarkupError::render(None, e))?;

        let mut count = 0usize;
        for block in blocks {
            let block = block?;
            self.process(&block, renderer)?;
            count += 1;
        }

        for rule in &mut self.rules {
            rule.finish(renderer)
                .map_err(|e| MarkupError::render(None, e))?;
        }
        renderer
            .end(Event::Document)
            .map_err(|e| MarkupError::render(None, e))?;

        self.state = ParserState::Finished;
        log::debug!("parse finished after {count} blocks");
        Ok(())
    }

    /// Convenience for already-segmented blocks.
    pub fn parse_blocks<I>(&mut self, blocks: I, renderer: &mut dyn Renderer) -> Result<(), MarkupError>
    where
        I: IntoIterator<Item = Block>,
    {
        self.parse(blocks.into_iter().map(Ok), renderer)
    }

    fn process(&mut self, block: &Block, renderer: &mut dyn Renderer) -> Result<(), MarkupError> {
        let mut text = block.text().to_string();
        for filter in &self.filters {
            text = filter
                .apply(&text, renderer)
                .map_err(|e| MarkupError::render(Some(&text), e))?;
        }
        let block = block.with_text(text);

        for rule in &mut self.rules {
            if !rule.condition(&block) {
                continue;
            }
            let stop = rule
                .action(&block, renderer)
                .map_err(|e| MarkupError::render(Some(block.text()), e))?;
            log::debug!(
                "rule {} handled block {} ({:?}), stop: {stop}",
                rule.name(),
                block.index(),
                block.text()
            );
            if stop {
                break;
            }
        }
        Ok(())
    }
}
