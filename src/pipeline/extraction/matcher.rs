use regex::{Regex, RegexBuilder};

/// How far a pattern's `.` may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// `.` stops at line breaks.
    #[default]
    Line,
    /// `.` crosses line breaks, for multi-line sections.
    Span,
}

/// Ordered list of pattern alternatives for one field.
///
/// Every pattern is case-insensitive and must define capture group 1.
/// The first pattern that matches wins; later alternatives are never
/// consulted once one has matched.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    patterns: Vec<Regex>,
}

impl FieldMatcher {
    /// Compile `patterns` in priority order.
    ///
    /// Patterns are static tables, so a pattern that fails to compile is a
    /// programming error and panics.
    pub fn new(patterns: &[&str], mode: MatchMode) -> Self {
        Self {
            patterns: patterns.iter().map(|p| compile(p, mode)).collect(),
        }
    }

    /// Trimmed capture group 1 of the first matching alternative, or `None`
    /// when nothing applies. `None` means "field absent", not failure.
    pub fn first_match(&self, text: &str) -> Option<String> {
        self.patterns.iter().find_map(|re| {
            re.captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
    }
}

/// Compile one case-insensitive pattern.
pub(crate) fn compile(pattern: &str, mode: MatchMode) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(mode == MatchMode::Span)
        .build()
        .expect("Invalid extraction regex pattern")
}
