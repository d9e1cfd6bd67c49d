//! Markdown-lite formatting for bot replies.
//!
//! Exactly two rewrites, in order: `**X**` becomes `<strong>X</strong>`
//! (non-greedy, paired delimiters only, never across a newline), then every
//! `\n` becomes `<br>`. Everything else passes through untouched and is
//! injected as markup; the backend is trusted not to send unsafe content.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*"));

/// Render bot text to markup.
pub fn format_bot_markup(text: &str) -> String {
    let bolded = match &*BOLD {
        Ok(bold) => bold.replace_all(text, "<strong>$1</strong>"),
        Err(e) => {
            log::error!("bold pattern rejected: {e}");
            Cow::Borrowed(text)
        }
    };
    bolded.replace('\n', "<br>")
}
