//! Platform-neutral structured chat message.
//!
//! A [`Notice`] is a title, a color and an ordered list of fields. Field
//! values are built from [`Span`]s so each renderer (webhook embed, Telegram,
//! terminal) can escape text and format links in its own syntax.

use chrono::{DateTime, Utc};

/// Embed accent colors.
pub mod color {
    pub const GREEN: u32 = 0x00FF00;
    pub const BLUE: u32 = 0x3498DB;
    pub const PURPLE: u32 = 0x9B59B6;
}

/// Structured message with a fixed schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub color: u32,
    pub fields: Vec<Field>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Notice {
    #[must_use]
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            fields: Vec::new(),
            timestamp: None,
        }
    }

    /// Append a field, keeping insertion order.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// One name/value/inline triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: Vec<Span>,
    pub inline: bool,
}

impl Field {
    /// A non-inline field with no value yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Vec::new(),
            inline: false,
        }
    }

    /// A non-inline field holding plain text.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name).push_text(value)
    }

    #[must_use]
    pub fn push_text(mut self, text: impl Into<String>) -> Self {
        self.value.push(Span::Text(text.into()));
        self
    }

    #[must_use]
    pub fn push_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.value.push(Span::Link {
            label: label.into(),
            url: url.into(),
        });
        self
    }

    #[must_use]
    pub fn push_line_break(mut self) -> Self {
        self.value.push(Span::LineBreak);
        self
    }

    /// Value with links reduced to their labels.
    #[must_use]
    pub fn plain_value(&self) -> String {
        self.value
            .iter()
            .map(|span| match span {
                Span::Text(text) => text.as_str(),
                Span::Link { label, .. } => label.as_str(),
                Span::LineBreak => "\n",
            })
            .collect()
    }
}

/// Piece of a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Link { label: String, url: String },
    LineBreak,
}
