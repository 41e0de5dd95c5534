/// Credit for the data a layer displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    text: String,
    url: Option<String>,
}

impl Attribution {
    /// Creates a new attribution with the given text and optional link.
    pub fn new(text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            text: text.into(),
            url,
        }
    }

    /// Text of the attribution.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Link to the source, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
