//! Per-construct contract tests.
//!
//! The expected strings here are the renderer's observable contract: exact
//! markup, exact attribute order, exact break placement. Treat a change in
//! any of them as a breaking change.

use chatdown::render;

#[test]
fn empty_input_renders_to_an_empty_fragment() {
    assert_eq!(render(""), "");
}

#[test]
fn plain_text_renders_to_itself() {
    assert_eq!(render("plain text"), "plain text");
}

#[test]
fn newlines_become_line_breaks() {
    assert_eq!(render("line1\nline2"), "line1<br>line2<br>");
}

#[test]
fn double_asterisks_become_bold() {
    assert_eq!(render("**bold**"), "<b>bold</b>");
}

#[test]
fn single_asterisks_become_italic() {
    assert_eq!(render("*italic*"), "<i>italic</i>");
}

#[test]
fn a_single_hash_becomes_the_largest_heading() {
    assert_eq!(render("# Title"), "<b style=\"font-size:1.3em\">Title</b><br>");
}

#[test]
fn every_heading_level_gets_its_own_size() {
    assert_eq!(render("## Title"), "<b style=\"font-size:1.2em\">Title</b><br>");
    assert_eq!(render("### Title"), "<b style=\"font-size:1.1em\">Title</b><br>");
    assert_eq!(render("#### Title"), "<b style=\"font-size:1.05em\">Title</b><br>");
    assert_eq!(render("##### Title"), "<b style=\"font-size:1em\">Title</b><br>");
    assert_eq!(render("###### Title"), "<b style=\"font-size:0.9em\">Title</b><br>");
}

#[test]
fn dash_items_become_bullets() {
    assert_eq!(render("- one\n- two"), "• one<br>• two<br>");
}

#[test]
fn indented_dash_items_are_still_bullets() {
    assert_eq!(render("  - indented"), "• indented<br>");
}

#[test]
fn numbered_items_drop_their_ordinal() {
    assert_eq!(render("1. first\n2. second"), "first<br>second<br>");
}

#[test]
fn multi_digit_ordinals_are_dropped_too() {
    assert_eq!(render("12. twelfth"), "twelfth<br>");
}

#[test]
fn backticks_become_code() {
    assert_eq!(render("`code`"), "<code>code</code>");
}

#[test]
fn bracket_paren_pairs_become_links() {
    assert_eq!(
        render("[link](http://x)"),
        "<a href=\"http://x\" target=\"_blank\">link</a>"
    );
}

#[test]
fn a_trailing_newline_contributes_a_break_of_its_own() {
    assert_eq!(render("- a\n"), "• a<br><br>");
}

#[test]
fn unmatched_markers_are_left_verbatim() {
    assert_eq!(render("*lonely"), "*lonely");
    assert_eq!(render("a ` b"), "a ` b");
    assert_eq!(render("[label](no-close"), "[label](no-close");
}

#[test]
fn an_unclosed_double_asterisk_becomes_an_empty_italic() {
    // Not an unmatched marker: the italic pattern pairs the two adjacent
    // asterisks with an empty capture.
    assert_eq!(render("**unclosed"), "<i></i>unclosed");
}

#[test]
fn seven_hashes_match_no_heading_rule() {
    assert_eq!(render("####### too deep"), "####### too deep");
}

#[test]
fn a_heading_marker_requires_a_following_space() {
    assert_eq!(render("#Title"), "#Title");
}

#[test]
fn a_heading_marker_must_start_its_line() {
    assert_eq!(render("see # note"), "see # note");
}

#[test]
fn a_dash_without_item_text_is_not_a_bullet() {
    assert_eq!(render("-"), "-");
    assert_eq!(render("dash-in-word"), "dash-in-word");
}

#[test]
fn an_ordinal_without_a_dot_is_not_a_numbered_item() {
    assert_eq!(render("1 first"), "1 first");
}

#[test]
fn rendering_markup_free_output_again_is_stable() {
    let once = render("first reply line\nsecond reply line");
    assert_eq!(once, "first reply line<br>second reply line<br>");
    assert_eq!(render(&once), once);
}

#[test]
fn rendering_is_not_idempotent_on_markdown_like_output() {
    // An ordinal surviving the first pass is consumed by the second.
    // Re-rendering produced fragments is not a supported operation.
    let once = render("1. 2. x");
    assert_eq!(once, "2. x<br>");
    let twice = render(&once);
    assert_eq!(twice, "x<br><br>");
}
