use std::collections::HashMap;

use regex::Captures;

use super::{Event, RenderResult, Renderer};

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Start(Event),
    End(Event),
    Feed(String),
}

/// A renderer that records what it is asked to do instead of producing output.
///
/// Substitutions are answered from a table of `regex` replacement templates
/// (`$1`, `${name}`); filters without a template are left unchanged.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    events: Vec<RenderEvent>,
    templates: HashMap<String, String>,
    substitutions: Vec<(String, String)>,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers substitutions for filter `name` by expanding `template`.
    pub fn with_template(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(name.into(), template.into());
        self
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// `(filter name, matched text)` for every substitution requested.
    pub fn substitutions(&self) -> &[(String, String)] {
        &self.substitutions
    }

    /// Number of `start` calls for `event`.
    pub fn count_starts(&self, event: Event) -> usize {
        self.events
            .iter()
            .filter(|e| **e == RenderEvent::Start(event))
            .count()
    }

    /// Number of `end` calls for `event`.
    pub fn count_ends(&self, event: Event) -> usize {
        self.events
            .iter()
            .filter(|e| **e == RenderEvent::End(event))
            .count()
    }

    pub fn into_events(self) -> Vec<RenderEvent> {
        self.events
    }
}

impl Renderer for TraceRenderer {
    fn start(&mut self, event: Event) -> RenderResult<()> {
        self.events.push(RenderEvent::Start(event));
        Ok(())
    }

    fn end(&mut self, event: Event) -> RenderResult<()> {
        self.events.push(RenderEvent::End(event));
        Ok(())
    }

    fn sub(&mut self, name: &str, caps: &Captures<'_>) -> RenderResult<Option<String>> {
        self.substitutions
            .push((name.to_string(), caps[0].to_string()));

        Ok(self.templates.get(name).map(|template| {
            let mut out = String::new();
            caps.expand(template, &mut out);
            out
        }))
    }

    fn feed(&mut self, data: &str) -> RenderResult<()> {
        self.events.push(RenderEvent::Feed(data.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn template_expands_groups() {
        let mut r = TraceRenderer::new().with_template("emphasis", "<em>$1</em>");
        let re = Regex::new(r"\*(.+?)\*").unwrap();
        let caps = re.captures("*hi*").unwrap();

        assert_eq!(
            r.sub("emphasis", &caps).unwrap(),
            Some("<em>hi</em>".to_string())
        );
        assert_eq!(
            r.substitutions(),
            &[("emphasis".to_string(), "*hi*".to_string())]
        );
    }

    #[test]
    fn no_template_means_no_change() {
        let mut r = TraceRenderer::new();
        let re = Regex::new("a").unwrap();
        let caps = re.captures("a").unwrap();
        assert_eq!(r.sub("url", &caps).unwrap(), None);
    }

    #[test]
    fn counts_starts_and_ends() {
        let mut r = TraceRenderer::new();
        r.start(Event::List).unwrap();
        r.start(Event::ListItem).unwrap();
        r.end(Event::ListItem).unwrap();
        r.end(Event::List).unwrap();

        assert_eq!(r.count_starts(Event::List), 1);
        assert_eq!(r.count_ends(Event::ListItem), 1);
        assert_eq!(r.count_starts(Event::Paragraph), 0);
    }
}
