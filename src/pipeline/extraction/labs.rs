use std::sync::LazyLock;

use regex::Regex;

use super::matcher::{compile, MatchMode};
use super::vocabulary::{LabAnalyte, LAB_CATALOG};

/// Compiled scanner for one cataloged analyte.
struct LabScanner {
    analyte: &'static LabAnalyte,
    regex: Regex,
}

impl LabScanner {
    fn new(analyte: &'static LabAnalyte) -> Self {
        let aliases = analyte
            .aliases
            .iter()
            .map(|a| regex::escape(a).replace(' ', r"\s+"))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"\b({aliases})[:\s]+({})", analyte.value.pattern());
        Self {
            analyte,
            regex: compile(&pattern, MatchMode::Line),
        }
    }

    /// Catalog spelling of the alias that produced `matched`.
    fn canonical_alias(&self, matched: &str) -> &'static str {
        let normalized = matched.split_whitespace().collect::<Vec<_>>().join(" ");
        self.analyte
            .aliases
            .iter()
            .find(|a| a.eq_ignore_ascii_case(&normalized))
            .copied()
            .unwrap_or(self.analyte.aliases[0])
    }
}

static LAB_SCANNERS: LazyLock<Vec<LabScanner>> =
    LazyLock::new(|| LAB_CATALOG.iter().map(LabScanner::new).collect());

/// Every occurrence of every cataloged analyte as `"<Alias>: <value>"`.
///
/// Results are grouped by catalog order, then document order. Repeated
/// analytes are kept.
pub fn extract_lab_results(text: &str) -> Vec<String> {
    LAB_SCANNERS
        .iter()
        .flat_map(|scanner| {
            scanner.regex.captures_iter(text).filter_map(move |caps| {
                let name = caps.get(1)?;
                let value = caps.get(2)?;
                Some(format!(
                    "{}: {}",
                    scanner.canonical_alias(name.as_str()),
                    value.as_str()
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_lab_block() {
        let text = "Laboratory Results:\n    Hemoglobin: 12.5\n    WBC: 8.2\n    Glucose: 145\n    Creatinine: 1.2\n";
        assert_eq!(
            extract_lab_results(text),
            vec!["Hemoglobin: 12.5", "WBC: 8.2", "Glucose: 145", "Creatinine: 1.2"]
        );
    }

    #[test]
    fn alias_that_matched_is_reported() {
        assert_eq!(extract_lab_results("Hgb: 9.1"), vec!["Hgb: 9.1"]);
        assert_eq!(extract_lab_results("HEMOGLOBIN 13"), vec!["Hemoglobin: 13"]);
        assert_eq!(
            extract_lab_results("White  Blood Cell: 11.4"),
            vec!["White Blood Cell: 11.4"]
        );
    }

    #[test]
    fn repeated_analytes_are_all_kept() {
        let text = "Glucose: 145 on admission\nGlucose: 110 at discharge\nBUN: 18";
        assert_eq!(
            extract_lab_results(text),
            vec!["Glucose: 145", "Glucose: 110", "BUN: 18"]
        );
    }

    #[test]
    fn grouped_by_catalog_order() {
        let text = "Creatinine: 0.9\nHgb: 14.0";
        assert_eq!(extract_lab_results(text), vec!["Hgb: 14.0", "Creatinine: 0.9"]);
    }

    #[test]
    fn integer_analytes_capture_leading_digits() {
        assert_eq!(extract_lab_results("Cholesterol: 212"), vec!["Cholesterol: 212"]);
    }

    #[test]
    fn no_labs_is_empty() {
        assert!(extract_lab_results("Chief Complaint: rash").is_empty());
    }
}
