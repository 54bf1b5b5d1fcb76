/// Normalize report text before extraction.
///
/// Line endings become `\n` and control characters other than newline and
/// tab are dropped. Blank lines are kept because they end sections.
pub fn sanitize_report_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect()
}
