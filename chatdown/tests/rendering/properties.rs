//! Property tests for the rendering pipeline.

use chatdown::render;
use proptest::prelude::*;

/// Lines drawn from this alphabet contain no recognized construct and no
/// HTML-significant characters, so every rule must leave them alone.
const MARKUP_FREE_LINE: &str = "[a-zA-Z ,;:!?']{0,40}";

proptest! {
    #[test]
    fn rendering_never_panics(input in any::<String>()) {
        let _ = render(&input);
    }

    #[test]
    fn markup_free_single_lines_render_to_themselves(line in MARKUP_FREE_LINE) {
        prop_assert_eq!(render(&line), line);
    }

    #[test]
    fn markup_free_lines_each_gain_exactly_one_break(
        lines in prop::collection::vec(MARKUP_FREE_LINE, 2..6)
    ) {
        let input = lines.join("\n");
        let expected: String = lines.iter().map(|line| format!("{line}<br>")).collect();
        prop_assert_eq!(render(&input), expected);
    }

    #[test]
    fn markup_free_output_renders_stably(
        lines in prop::collection::vec(MARKUP_FREE_LINE, 1..6)
    ) {
        let first = render(&lines.join("\n"));
        prop_assert_eq!(render(&first), first.clone());
    }
}
