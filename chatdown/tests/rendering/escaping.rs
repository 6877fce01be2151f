//! Escaping-mode tests.
//!
//! By default the renderer reproduces the reply verbatim, markup included.
//! `escape_input` is the opt-in hardened mode for untrusted producers.

use chatdown::{render, render_with, RenderOptions};

fn escaped() -> RenderOptions {
    RenderOptions { escape_input: true }
}

#[test]
fn raw_markup_passes_through_by_default() {
    assert_eq!(
        render("<script>alert(1)</script>"),
        "<script>alert(1)</script>"
    );
}

#[test]
fn escape_mode_neutralizes_markup() {
    assert_eq!(
        render_with("<script>alert(1)</script>", escaped()),
        "&lt;script&gt;alert(1)&lt;/script&gt;"
    );
}

#[test]
fn escape_mode_still_recognizes_markdown() {
    assert_eq!(
        render_with("**bold** <i>", escaped()),
        "<b>bold</b> &lt;i&gt;"
    );
}

#[test]
fn escape_mode_escapes_quotes() {
    assert_eq!(
        render_with("a \"quoted\" word", escaped()),
        "a &quot;quoted&quot; word"
    );
}

#[test]
fn ampersands_are_escaped_exactly_once() {
    assert_eq!(render_with("a & b < c", escaped()), "a &amp; b &lt; c");
    assert_eq!(render_with("&lt;", escaped()), "&amp;lt;");
}

#[test]
fn escape_runs_before_the_rules_not_after() {
    // Markup injected by the rules themselves stays live.
    assert_eq!(
        render_with("# <Title>", escaped()),
        "<b style=\"font-size:1.3em\">&lt;Title&gt;</b><br>"
    );
}

#[test]
fn escape_mode_keeps_line_assembly_intact() {
    assert_eq!(
        render_with("- a < b\nplain", escaped()),
        "• a &lt; b<br>plain<br>"
    );
}
