//! Reply rendering for Telegram `MarkdownV2`.

use crate::application::Reply;
use crate::domain::{Field, Notice, Span};

/// Render a command reply as a `MarkdownV2` message.
#[must_use]
pub fn render_reply(reply: &Reply) -> String {
    match reply {
        Reply::Notice(notice) => render_notice(notice),
        Reply::Warning(text) => escape_markdown(text),
    }
}

/// Render a notice: bold title, then one bold name and value per field.
#[must_use]
pub fn render_notice(notice: &Notice) -> String {
    let mut msg = format!("*{}*\n", escape_markdown(&notice.title));
    for field in &notice.fields {
        msg.push_str(&format!(
            "\n*{}*\n{}\n",
            escape_markdown(&field.name),
            render_value(field)
        ));
    }
    msg
}

fn render_value(field: &Field) -> String {
    field
        .value
        .iter()
        .map(|span| match span {
            Span::Text(text) => escape_markdown(text),
            Span::Link { label, url } => {
                format!("[{}]({})", escape_markdown(label), escape_link_url(url))
            }
            Span::LineBreak => "\n".to_string(),
        })
        .collect()
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.',
        '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Escape a link target; inside `(...)` only `)` and `\` are special.
fn escape_link_url(url: &str) -> String {
    let mut result = String::with_capacity(url.len());
    for c in url.chars() {
        if c == ')' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
