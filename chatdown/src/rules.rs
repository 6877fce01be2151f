//! The ordered substitution table.
//!
//! Every recognized construct is one [`FormatRule`]: a compiled pattern plus
//! a replacement template, tagged with the scope it rewrites at. The table
//! order is part of the rendering contract (see [`pipeline`]), so rules are
//! data here and the application loop lives in [`crate::renderer`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Where a rule's pattern applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Anchored pattern matched against each line of the text independently.
    /// Line boundaries are preserved so later stages see the same lines.
    Line,
    /// Pattern matched anywhere in the whole text. These patterns are
    /// non-greedy and never cross a line boundary (`.` excludes `\n`), so
    /// repeated constructs on one line produce separate spans.
    Text,
}

/// A single substitution stage.
#[derive(Debug)]
pub struct FormatRule {
    name: &'static str,
    scope: RuleScope,
    pattern: Regex,
    replacement: &'static str,
}

impl FormatRule {
    fn line(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self::with_scope(name, RuleScope::Line, pattern, replacement)
    }

    fn text(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self::with_scope(name, RuleScope::Text, pattern, replacement)
    }

    fn with_scope(
        name: &'static str,
        scope: RuleScope,
        pattern: &str,
        replacement: &'static str,
    ) -> Self {
        let pattern = Regex::new(pattern).expect("valid rule pattern");
        Self {
            name,
            scope,
            pattern,
            replacement,
        }
    }

    /// Stage name, e.g. `"heading-1"` or `"bold"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the rule rewrites single lines or the whole text.
    pub fn scope(&self) -> RuleScope {
        self.scope
    }

    /// Source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Replacement template the pattern expands into.
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Apply the rule to `text`, returning the rewritten text.
    pub fn apply(&self, text: &str) -> String {
        match self.scope {
            RuleScope::Line => text
                .split('\n')
                .map(|line| self.pattern.replace(line, self.replacement))
                .collect::<Vec<_>>()
                .join("\n"),
            RuleScope::Text => self.pattern.replace_all(text, self.replacement).into_owned(),
        }
    }
}

static PIPELINE: Lazy<Vec<FormatRule>> = Lazy::new(|| {
    vec![
        // Headings run from the longest marker down so each level consumes
        // exactly its own hash count.
        FormatRule::line(
            "heading-6",
            r"^###### (.*)$",
            r#"<b style="font-size:0.9em">$1</b><br>"#,
        ),
        FormatRule::line(
            "heading-5",
            r"^##### (.*)$",
            r#"<b style="font-size:1em">$1</b><br>"#,
        ),
        FormatRule::line(
            "heading-4",
            r"^#### (.*)$",
            r#"<b style="font-size:1.05em">$1</b><br>"#,
        ),
        FormatRule::line(
            "heading-3",
            r"^### (.*)$",
            r#"<b style="font-size:1.1em">$1</b><br>"#,
        ),
        FormatRule::line(
            "heading-2",
            r"^## (.*)$",
            r#"<b style="font-size:1.2em">$1</b><br>"#,
        ),
        FormatRule::line(
            "heading-1",
            r"^# (.*)$",
            r#"<b style="font-size:1.3em">$1</b><br>"#,
        ),
        // Bold before italic: double markers must be consumed before the
        // single-marker pattern can see them.
        FormatRule::text("bold", r"\*\*(.*?)\*\*", "<b>$1</b>"),
        FormatRule::text("italic", r"\*(.*?)\*", "<i>$1</i>"),
        FormatRule::line("bullet", r"^\s*-\s+(.*)$", "• $1<br>"),
        // Numbered items drop their ordinal; the renderer produces flat
        // chat fragments, not <ol> structure.
        FormatRule::line("numbered", r"^\s*\d+\.\s+(.*)$", "$1<br>"),
        FormatRule::text("code", r"`(.*?)`", "<code>$1</code>"),
        FormatRule::text(
            "link",
            r"\[(.*?)\]\((.*?)\)",
            r#"<a href="$2" target="_blank">$1</a>"#,
        ),
    ]
});

/// The substitution stages in application order.
///
/// Order is a contract, not an implementation detail: each stage rewrites
/// the full output of the previous one, so reordering changes results.
/// Bold runs before italic, bullets before numbered items, and code and
/// links run last over whatever markup the earlier stages produced.
pub fn pipeline() -> &'static [FormatRule] {
    &PIPELINE
}
