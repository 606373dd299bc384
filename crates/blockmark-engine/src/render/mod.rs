//! # Rendering
//!
//! The engine never formats output itself. Rules and filters talk to a
//! [`Renderer`], a set of capabilities that a concrete output format
//! implements.
//!
//! Every capability has a no-op default, so a renderer only implements what
//! it cares about and silently ignores the rest.
//!
//! ## Modules
//!
//! - **`event`**: The closed [`Event`] enumeration of structural categories
//! - **`html`**: [`HtmlRenderer`] writing an HTML document to any `Write`
//! - **`trace`**: [`TraceRenderer`] recording every call, for tests and debugging

pub mod event;
pub mod html;
pub mod trace;

pub use event::Event;
pub use html::{HtmlOptions, HtmlRenderer};
pub use trace::{RenderEvent, TraceRenderer};

use regex::Captures;

/// Result type of renderer capabilities.
///
/// Renderers may fail for any reason (I/O, a broken substitution), so the
/// error is type-erased and carried to the caller of `parse`.
pub type RenderResult<T> = anyhow::Result<T>;

/// Capability sink driven by the parser.
pub trait Renderer {
    /// Opens a structural category.
    fn start(&mut self, _event: Event) -> RenderResult<()> {
        Ok(())
    }

    /// Closes a structural category.
    fn end(&mut self, _event: Event) -> RenderResult<()> {
        Ok(())
    }

    /// Computes replacement text for one match of the filter called `name`.
    ///
    /// `Ok(None)` means "no change": the matched text is kept as-is.
    /// `Ok(Some(String::new()))` deletes the match.
    fn sub(&mut self, _name: &str, _caps: &Captures<'_>) -> RenderResult<Option<String>> {
        Ok(None)
    }

    /// Writes raw block content.
    fn feed(&mut self, _data: &str) -> RenderResult<()> {
        Ok(())
    }

    /// Opens a category given by name. Unknown names are ignored.
    fn start_named(&mut self, name: &str) -> RenderResult<()> {
        match Event::from_name(name) {
            Some(event) => self.start(event),
            None => {
                log::trace!("ignoring start of unrecognized event {name:?}");
                Ok(())
            }
        }
    }

    /// Closes a category given by name. Unknown names are ignored.
    fn end_named(&mut self, name: &str) -> RenderResult<()> {
        match Event::from_name(name) {
            Some(event) => self.end(event),
            None => {
                log::trace!("ignoring end of unrecognized event {name:?}");
                Ok(())
            }
        }
    }
}

/// Emits `start(event)`, the content, then `end(event)`.
pub fn bracket<R: Renderer + ?Sized>(
    renderer: &mut R,
    event: Event,
    content: &str,
) -> RenderResult<()> {
    renderer.start(event)?;
    renderer.feed(content)?;
    renderer.end(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A renderer that implements nothing.
    struct Silent;
    impl Renderer for Silent {}

    #[test]
    fn missing_capabilities_are_no_ops() {
        let mut r = Silent;
        r.start(Event::Document).unwrap();
        r.feed("text").unwrap();
        r.end(Event::Document).unwrap();

        let re = regex::Regex::new("x").unwrap();
        let caps = re.captures("x").unwrap();
        assert_eq!(r.sub("emphasis", &caps).unwrap(), None);
    }

    #[test]
    fn named_dispatch_resolves_known_events() {
        let mut r = TraceRenderer::new();
        r.start_named("listitem").unwrap();
        r.end_named("listitem").unwrap();
        assert_eq!(
            r.events(),
            &[
                RenderEvent::Start(Event::ListItem),
                RenderEvent::End(Event::ListItem)
            ]
        );
    }

    #[test]
    fn named_dispatch_ignores_unknown_events() {
        let mut r = TraceRenderer::new();
        r.start_named("table").unwrap();
        r.end_named("table").unwrap();
        assert!(r.events().is_empty());
    }

    #[test]
    fn bracket_wraps_content() {
        let mut r = TraceRenderer::new();
        bracket(&mut r, Event::Heading, "Intro").unwrap();
        assert_eq!(
            r.events(),
            &[
                RenderEvent::Start(Event::Heading),
                RenderEvent::Feed("Intro".to_string()),
                RenderEvent::End(Event::Heading),
            ]
        );
    }
}
