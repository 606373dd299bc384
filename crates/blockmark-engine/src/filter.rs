//! Inline substitution filters.
//!
//! A [`Filter`] pairs a regex with the name of a renderer substitution
//! capability. Filters rewrite text within a block; they never split, merge
//! or drop blocks.

use regex::Regex;

use crate::{
    error::MarkupError,
    render::{RenderResult, Renderer},
};

/// Paired `*` around inline text.
pub const EMPHASIS_PATTERN: &str = r"\*(.+?)\*";
/// Bare `http://` or `https://` address.
pub const URL_PATTERN: &str = r"(https?://[\.a-zA-Z0-9/_\-~%?=&#]+)";
/// Bare email address.
pub const MAIL_PATTERN: &str = r"([\.a-zA-Z0-9_\-]+@[\.a-zA-Z0-9\-]+[a-zA-Z]+)";

#[derive(Debug, Clone)]
pub struct Filter {
    pattern: Regex,
    name: String,
}

impl Filter {
    /// Compiles `pattern` into a filter bound to the substitution `name`.
    pub fn new(pattern: &str, name: impl Into<String>) -> Result<Self, MarkupError> {
        let regex = Regex::new(pattern).map_err(|source| MarkupError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::from_regex(regex, name))
    }

    pub fn from_regex(pattern: Regex, name: impl Into<String>) -> Self {
        Self {
            pattern,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Rewrites every non-overlapping match of the pattern in `text`.
    ///
    /// The renderer decides the replacement; `None` keeps the matched text
    /// byte-for-byte. The first renderer error aborts the rewrite.
    pub fn apply<R: Renderer + ?Sized>(&self, text: &str, renderer: &mut R) -> RenderResult<String> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in self.pattern.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            out.push_str(&text[last..m.start()]);
            match renderer.sub(&self.name, &caps)? {
                Some(replacement) => out.push_str(&replacement),
                None => out.push_str(m.as_str()),
            }
            last = m.end();
        }

        out.push_str(&text[last..]);
        Ok(out)
    }
}

/// The built-in filters, in application order: emphasis, url, mail.
pub fn standard_filters() -> Result<Vec<Filter>, MarkupError> {
    [
        (EMPHASIS_PATTERN, "emphasis"),
        (URL_PATTERN, "url"),
        (MAIL_PATTERN, "mail"),
    ]
    .into_iter()
    .map(|(pattern, name)| Filter::new(pattern, name))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TraceRenderer;
    use rstest::rstest;

    fn emphasis() -> Filter {
        Filter::new(EMPHASIS_PATTERN, "emphasis").unwrap()
    }

    #[test]
    fn replaces_every_match() {
        let mut r = TraceRenderer::new().with_template("emphasis", "<em>$1</em>");
        let out = emphasis().apply("*a* and *b*", &mut r).unwrap();
        assert_eq!(out, "<em>a</em> and <em>b</em>");
    }

    #[test]
    fn no_change_keeps_matched_span() {
        let mut r = TraceRenderer::new();
        let input = "keep *this* exactly, *even* ünïcödé *spans*";
        let out = emphasis().apply(input, &mut r).unwrap();
        assert_eq!(out, input);
        assert_eq!(r.substitutions().len(), 3);
    }

    #[test]
    fn empty_replacement_deletes_match() {
        let mut r = TraceRenderer::new().with_template("emphasis", "");
        let out = emphasis().apply("a *b* c", &mut r).unwrap();
        assert_eq!(out, "a  c");
    }

    #[test]
    fn no_match_is_identity() {
        let mut r = TraceRenderer::new().with_template("emphasis", "X");
        assert_eq!(emphasis().apply("plain", &mut r).unwrap(), "plain");
        assert!(r.substitutions().is_empty());
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Filter::new("(unclosed", "broken").unwrap_err();
        assert!(matches!(err, MarkupError::InvalidPattern { .. }));
    }

    #[test]
    fn renderer_error_propagates() {
        struct Failing;
        impl Renderer for Failing {
            fn sub(
                &mut self,
                _name: &str,
                _caps: &regex::Captures<'_>,
            ) -> RenderResult<Option<String>> {
                anyhow::bail!("substitution exploded")
            }
        }

        let err = emphasis().apply("*x*", &mut Failing).unwrap_err();
        assert_eq!(err.to_string(), "substitution exploded");
    }

    #[rstest]
    #[case("*stressed*", Some("stressed"))]
    #[case("a *b* c *d*", Some("b"))]
    #[case("**", None)]
    #[case("no stars", None)]
    fn emphasis_pattern(#[case] input: &str, #[case] first: Option<&str>) {
        let re = Regex::new(EMPHASIS_PATTERN).unwrap();
        assert_eq!(re.captures(input).map(|c| c[1].to_string()).as_deref(), first);
    }

    #[rstest]
    #[case("see http://example.com/page now", Some("http://example.com/page"))]
    #[case("https://rust-lang.org", Some("https://rust-lang.org"))]
    #[case("ftp://nope", None)]
    fn url_pattern(#[case] input: &str, #[case] expected: Option<&str>) {
        let re = Regex::new(URL_PATTERN).unwrap();
        assert_eq!(re.find(input).map(|m| m.as_str()), expected);
    }

    #[rstest]
    #[case("mail me@example.com today", Some("me@example.com"))]
    #[case("first.last@sub.example.org", Some("first.last@sub.example.org"))]
    #[case("no at sign", None)]
    fn mail_pattern(#[case] input: &str, #[case] expected: Option<&str>) {
        let re = Regex::new(MAIL_PATTERN).unwrap();
        assert_eq!(re.find(input).map(|m| m.as_str()), expected);
    }

    #[test]
    fn standard_filter_order() {
        let names: Vec<String> = standard_filters()
            .unwrap()
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        assert_eq!(names, vec!["emphasis", "url", "mail"]);
    }
}
