use std::io::Write;

use regex::Captures;

use super::{Event, RenderResult, Renderer};

const LINK_STYLE: &str = "text-decoration: none;color: #BC1A4B;";

/// Presentation options for [`HtmlRenderer`].
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Content of the `<title>` element.
    pub title: String,
    /// Optional stylesheet linked from `<head>`.
    pub stylesheet: Option<String>,
    /// Emit inline colour styles on block tags and links.
    pub styled: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "blockmark".to_string(),
            stylesheet: None,
            styled: false,
        }
    }
}

/// Writes an HTML document, one line per renderer call.
///
/// Block text is written as-is: filters have already inserted markup into
/// it, so it is not escaped. Titles and attribute values are escaped.
pub struct HtmlRenderer<W> {
    out: W,
    options: HtmlOptions,
}

impl<W: Write> HtmlRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_options(out, HtmlOptions::default())
    }

    pub fn with_options(out: W, options: HtmlOptions) -> Self {
        Self { out, options }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn tag(event: Event) -> Option<&'static str> {
        match event {
            Event::Document => None,
            Event::Title => Some("h1"),
            Event::Heading => Some("h2"),
            Event::Paragraph => Some("p"),
            Event::List => Some("ul"),
            Event::ListItem => Some("li"),
        }
    }

    fn style(event: Event) -> Option<&'static str> {
        match event {
            Event::Title => Some("color: #1ABC9C;"),
            Event::Heading => Some("color: #68BE5D;"),
            Event::Paragraph => Some("color: #444;"),
            Event::List => Some("color: #363736;"),
            Event::Document | Event::ListItem => None,
        }
    }

    fn style_attr(&self, style: Option<&str>) -> String {
        match style {
            Some(style) if self.options.styled => format!(r#" style="{style}""#),
            _ => String::new(),
        }
    }

    fn start_document(&mut self) -> RenderResult<()> {
        let title = html_escape::encode_text(&self.options.title);
        let link = match &self.options.stylesheet {
            Some(href) => format!(
                r#"<link rel="stylesheet" href="{}">"#,
                html_escape::encode_double_quoted_attribute(href)
            ),
            None => String::new(),
        };
        writeln!(
            self.out,
            "<html><head><title>{title}</title>{link}</head><body>"
        )?;
        Ok(())
    }

    fn link(&self, href: &str, text: &str, extra: &str) -> String {
        format!(
            r#"<a{extra}{style} href="{href}">{text}</a>"#,
            style = self.style_attr(Some(LINK_STYLE)),
            href = html_escape::encode_double_quoted_attribute(href),
        )
    }
}

impl<W: Write> Renderer for HtmlRenderer<W> {
    fn start(&mut self, event: Event) -> RenderResult<()> {
        match Self::tag(event) {
            Some(tag) => {
                let style = self.style_attr(Self::style(event));
                writeln!(self.out, "<{tag}{style}>")?;
                Ok(())
            }
            None => self.start_document(),
        }
    }

    fn end(&mut self, event: Event) -> RenderResult<()> {
        match Self::tag(event) {
            Some(tag) => writeln!(self.out, "</{tag}>")?,
            None => {
                writeln!(self.out, "</body></html>")?;
                self.out.flush()?;
            }
        }
        Ok(())
    }

    fn sub(&mut self, name: &str, caps: &Captures<'_>) -> RenderResult<Option<String>> {
        let Some(text) = caps.get(1).map(|m| m.as_str()) else {
            return Ok(None);
        };
        let replacement = match name {
            "emphasis" => format!("<em>{text}</em>"),
            "url" => self.link(text, text, r#" target="_blank""#),
            "mail" => self.link(&format!("mailto:{text}"), text, ""),
            _ => return Ok(None),
        };
        Ok(Some(replacement))
    }

    fn feed(&mut self, data: &str) -> RenderResult<()> {
        writeln!(self.out, "{data}")?;
        Ok(())
    }
}
