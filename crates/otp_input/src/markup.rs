//! Element tree for the component's markup.
//!
//! [`Otp::markup`](crate::Otp::markup) describes the component as elements
//! carrying the `data-qds-otp-*` marker attributes that styling and test
//! tooling key on. The tree prints as HTML and serializes to JSON.

use std::fmt;

use serde::Serialize;

/// An attribute; `None` values are boolean attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Content {
    /// A nested element.
    Element(Element),
    /// Text.
    Text(String),
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Attributes in output order.
    pub attributes: Vec<Attribute>,
    /// Children in output order.
    pub children: Vec<Content>,
}

const VOID_TAGS: &[&str] = &["input"];

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds a valued attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: Some(value.into()),
        });
        self
    }

    /// Adds a boolean attribute when `present`.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>, present: bool) -> Self {
        if present {
            self.attributes.push(Attribute {
                name: name.into(),
                value: None,
            });
        }
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Content::Element(child));
        self
    }

    /// Appends text; empty text is skipped.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Content::Text(text));
        }
        self
    }

    /// Appends any content.
    #[must_use]
    pub fn content(mut self, content: Content) -> Self {
        self.children.push(content);
        self
    }

    /// Whether the element carries attribute `name`.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Value of attribute `name`, if present and valued.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }

    /// All descendants (and self) carrying attribute `name`, in document
    /// order.
    #[must_use]
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(name, &mut found);
        found
    }

    fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        if self.has_attribute(name) {
            found.push(self);
        }
        for child in &self.children {
            if let Content::Element(el) = child {
                el.collect(name, found);
            }
        }
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Content::Text(t) => out.push_str(t),
                Content::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }

    /// Serializes the tree as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which cannot occur for this type in
    /// practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for attr in &self.attributes {
            match &attr.value {
                Some(value) => write!(f, " {}=\"{}\"", attr.name, escape(value))?,
                None => write!(f, " {}", attr.name)?,
            }
        }
        write!(f, ">")?;

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return Ok(());
        }

        for child in &self.children {
            match child {
                Content::Element(el) => write!(f, "{el}")?,
                Content::Text(t) => write!(f, "{}", escape(t))?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}
