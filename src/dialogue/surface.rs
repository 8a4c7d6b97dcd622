//! Where revealed text goes

/// A text area the typewriter writes into.
///
/// Text always lands at the end: either as plain text or inside the span
/// most recently opened with [`DisplaySurface::open_span`].
pub trait DisplaySurface {
    /// Remove all content
    fn clear(&mut self);

    /// Append plain text
    fn append_text(&mut self, text: &str);

    /// Start a styled inline span named after the markup tag
    fn open_span(&mut self, style: &str);

    /// Append text to the open span
    fn append_span_text(&mut self, text: &str);

    /// The open span is complete
    fn close_span(&mut self) {}

    /// Show or hide the typing cursor after the content
    fn set_cursor_visible(&mut self, _visible: bool) {}
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn append_text(&mut self, text: &str) {
        (**self).append_text(text)
    }

    fn open_span(&mut self, style: &str) {
        (**self).open_span(style)
    }

    fn append_span_text(&mut self, text: &str) {
        (**self).append_span_text(text)
    }

    fn close_span(&mut self) {
        (**self).close_span()
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        (**self).set_cursor_visible(visible)
    }
}

/// One node of rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Span { style: String, text: String },
}

/// In-memory surface keeping the rendered node list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    nodes: Vec<Node>,
    cursor_visible: bool,
    /// Text appends since the last clear
    appends: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn appends(&self) -> usize {
        self.appends
    }

    /// Visible text without styling
    pub fn plain_text(&self) -> String {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Text(text) => text.as_str(),
                Node::Span { text, .. } => text.as_str(),
            })
            .collect()
    }

    /// Content written back as `<tag>..</tag>` markup
    pub fn markup(&self) -> String {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Text(text) => text.clone(),
                Node::Span { style, text } => format!("<{style}>{text}</{style}>"),
            })
            .collect()
    }
}

impl DisplaySurface for Transcript {
    fn clear(&mut self) {
        self.nodes.clear();
        self.appends = 0;
    }

    fn append_text(&mut self, text: &str) {
        self.appends += 1;
        match self.nodes.last_mut() {
            Some(Node::Text(last)) => last.push_str(text),
            _ => self.nodes.push(Node::Text(text.to_string())),
        }
    }

    fn open_span(&mut self, style: &str) {
        self.nodes.push(Node::Span {
            style: style.to_string(),
            text: String::new(),
        });
    }

    fn append_span_text(&mut self, text: &str) {
        self.appends += 1;
        match self.nodes.last_mut() {
            Some(Node::Span { text: span, .. }) => span.push_str(text),
            _ => self.nodes.push(Node::Text(text.to_string())),
        }
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_builds_nodes() {
        let mut out = Transcript::new();
        out.append_text("Hi ");
        out.open_span("b");
        out.append_span_text("th");
        out.append_span_text("ere");
        out.close_span();
        out.append_text("!");

        assert_eq!(out.plain_text(), "Hi there!");
        assert_eq!(out.markup(), "Hi <b>there</b>!");
        assert_eq!(out.nodes().len(), 3);
        assert_eq!(out.appends(), 4);

        out.clear();
        assert!(out.nodes().is_empty());
    }
}
