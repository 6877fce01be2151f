//! Pipeline application: substitution stages plus final line assembly.
//!
//! Rendering is a total function from string to string. It never fails and
//! never rejects input; whatever the rules do not recognize passes through
//! verbatim.

use serde::{Deserialize, Serialize};

use crate::rules;

/// Options controlling how a reply is rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Escape `&`, `<`, `>` and `"` in the reply before the substitution
    /// stages run. Off by default: the fragment is built from the reply
    /// exactly as received, so HTML-significant characters in an untrusted
    /// reply become live markup. Turn this on when the producer of the
    /// reply is not trusted.
    pub escape_input: bool,
}

/// Render a chat reply to an HTML fragment with default options.
pub fn render(text: &str) -> String {
    render_with(text, RenderOptions::default())
}

/// Render a chat reply to an HTML fragment.
///
/// The substitution stages run in the fixed order given by
/// [`rules::pipeline`], each rewriting the full output of the previous one.
/// A final assembly stage terminates every line of a multi-line result with
/// exactly one `<br>` and drops the newline separators; single-line results
/// are returned as the stages left them.
pub fn render_with(text: &str, options: RenderOptions) -> String {
    let mut html = if options.escape_input {
        escape_text(text)
    } else {
        text.to_string()
    };

    for rule in rules::pipeline() {
        html = rule.apply(&html);
    }

    assemble_lines(&html)
}

/// Escape HTML-significant characters in the reply text.
///
/// `&` goes first so the ampersands introduced by the other replacements
/// are not escaped again.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Join the lines of a multi-line result into a single fragment.
///
/// Lines the heading and list rules already terminated keep their `<br>`;
/// every other line, including an empty line left by a trailing newline,
/// gains one. Text without newlines is returned unchanged, so plain
/// single-line replies render to themselves.
fn assemble_lines(text: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }

    let mut fragment = String::with_capacity(text.len() + 8);
    for line in text.split('\n') {
        fragment.push_str(line);
        if !line.ends_with("<br>") {
            fragment.push_str("<br>");
        }
    }
    fragment
}
