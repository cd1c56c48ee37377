//! Translation acceptance checks.
//!
//! A candidate translation is acceptable when it exists, differs from the
//! source text, and carries exactly the same `{$name}` placeholders in the
//! same order. Providers occasionally drop, rename or reorder placeholders,
//! and a label with a broken placeholder fails at render time.

use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the candidate unacceptable
    pub errors: Vec<String>,

    /// Suspicious but acceptable properties of the candidate
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// A candidate is acceptable when the report has no errors.
    pub fn is_acceptable(&self) -> bool {
        !self.has_errors()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translated labels.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Whether `candidate` may replace the stored translation of `source`.
    ///
    /// # Arguments
    /// * `source` - The source-locale text of the label
    /// * `candidate` - The provider's answer, `None` when it produced nothing
    ///
    /// # Returns
    /// `true` if validation finds no errors; warnings do not block acceptance.
    pub fn is_acceptable(source: &str, candidate: Option<&str>) -> bool {
        Self::validate(source, candidate).is_acceptable()
    }

    /// Validate a candidate translation against its source text.
    ///
    /// Errors (reject):
    /// - the candidate is missing
    /// - the candidate is identical to the source (untranslated passthrough)
    /// - the ordered placeholder sequences differ
    ///
    /// Warnings (accept):
    /// - the candidate is blank while the source is not
    /// - the candidate has surrounding whitespace the source does not
    pub fn validate(source: &str, candidate: Option<&str>) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(candidate) = candidate else {
            report.errors.push("Translation is missing".to_string());
            return report;
        };

        if candidate == source {
            report
                .errors
                .push("Translation is identical to the source text".to_string());
        }

        let source_placeholders = Self::placeholders(source);
        let candidate_placeholders = Self::placeholders(candidate);
        if source_placeholders != candidate_placeholders {
            report.errors.push(format!(
                "Placeholder mismatch: source has {:?}, translation has {:?}",
                source_placeholders, candidate_placeholders
            ));
        }

        if candidate.trim().is_empty() && !source.trim().is_empty() {
            report.warnings.push("Translation is blank".to_string());
        } else if candidate.trim() != candidate && source.trim() == source {
            report
                .warnings
                .push("Translation has surrounding whitespace".to_string());
        }

        report
    }

    /// Extract all `{$name}` placeholders from text, in order of appearance.
    pub fn placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{\$[^}]+\}").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_placeholders_single() {
        assert_eq!(
            TranslationValidator::placeholders("Hello {$name}"),
            vec!["{$name}"]
        );
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(
            TranslationValidator::placeholders("{$count} messages from {$sender}"),
            vec!["{$count}", "{$sender}"]
        );
    }

    #[test]
    fn test_placeholders_ignores_plain_braces() {
        assert!(TranslationValidator::placeholders("Use {name} or $name").is_empty());
        assert!(TranslationValidator::placeholders("Empty {$}").is_empty());
    }

    #[test]
    fn test_placeholders_keeps_duplicates() {
        assert_eq!(
            TranslationValidator::placeholders("{$a} and {$a}"),
            vec!["{$a}", "{$a}"]
        );
    }

    // ==================== Acceptance Tests ====================

    #[test]
    fn test_accepts_translation_with_same_placeholders() {
        assert!(TranslationValidator::is_acceptable(
            "Hello {$name}",
            Some("Bonjour {$name}")
        ));
    }

    #[test]
    fn test_accepts_translation_without_placeholders() {
        assert!(TranslationValidator::is_acceptable("Save", Some("Enregistrer")));
    }

    #[test]
    fn test_rejects_missing_candidate() {
        let report = TranslationValidator::validate("Hello", None);
        assert!(!report.is_acceptable());
        assert!(report.errors[0].contains("missing"));
    }

    #[test]
    fn test_rejects_identical_candidate() {
        let report = TranslationValidator::validate("Hello {$name}", Some("Hello {$name}"));
        assert!(!report.is_acceptable());
        assert!(report.errors[0].contains("identical"));
    }

    #[test]
    fn test_rejects_dropped_placeholder() {
        let report = TranslationValidator::validate("Hello {$name}", Some("Bonjour"));
        assert!(!report.is_acceptable());
        assert!(report.errors[0].contains("Placeholder mismatch"));
    }

    #[test]
    fn test_rejects_reordered_placeholders() {
        assert!(!TranslationValidator::is_acceptable(
            "{$a} sent {$b}",
            Some("{$b} envoyé par {$a}")
        ));
    }

    #[test]
    fn test_rejects_renamed_placeholder() {
        assert!(!TranslationValidator::is_acceptable(
            "Hello {$name}",
            Some("Bonjour {$nom}")
        ));
    }

    #[test]
    fn test_rejects_added_placeholder() {
        assert!(!TranslationValidator::is_acceptable(
            "Hello",
            Some("Bonjour {$name}")
        ));
    }

    #[test]
    fn test_blank_candidate_is_a_warning() {
        let report = TranslationValidator::validate("Hello", Some("  "));
        assert!(report.is_acceptable());
        assert!(report.warnings[0].contains("blank"));
    }

    #[test]
    fn test_surrounding_whitespace_is_a_warning() {
        let report = TranslationValidator::validate("Hello", Some("Bonjour\n"));
        assert!(report.is_acceptable());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_clean_report() {
        let report = TranslationValidator::validate("Hello {$name}", Some("Hola {$name}"));
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_default() {
        let report = ValidationReport::default();
        assert!(!report.has_warnings());
        assert!(report.is_acceptable());
    }

    // ==================== Properties ====================

    fn placeholder_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z][a-z0-9_]{0,7}", 1..5)
    }

    fn render(names: &[String], words: &str) -> String {
        names
            .iter()
            .map(|n| format!("{} {{${}}}", words, n))
            .collect::<Vec<_>>()
            .join(" ")
    }

    proptest! {
        #[test]
        fn prop_identical_candidate_always_rejected(text in ".*") {
            prop_assert!(!TranslationValidator::is_acceptable(&text, Some(&text)));
        }

        #[test]
        fn prop_missing_candidate_always_rejected(text in ".*") {
            prop_assert!(!TranslationValidator::is_acceptable(&text, None));
        }

        #[test]
        fn prop_dropped_placeholder_rejected(names in placeholder_names(), removed in any::<prop::sample::Index>()) {
            let source = render(&names, "src");
            let mut kept = names.clone();
            kept.remove(removed.index(names.len()));
            let candidate = render(&kept, "dst");
            prop_assert!(!TranslationValidator::is_acceptable(&source, Some(&candidate)));
        }

        #[test]
        fn prop_duplicated_placeholder_rejected(names in placeholder_names(), dup in any::<prop::sample::Index>()) {
            let source = render(&names, "src");
            let mut doubled = names.clone();
            let i = dup.index(names.len());
            doubled.insert(i, names[i].clone());
            let candidate = render(&doubled, "dst");
            prop_assert!(!TranslationValidator::is_acceptable(&source, Some(&candidate)));
        }

        #[test]
        fn prop_reordered_placeholders_rejected(names in placeholder_names()) {
            let mut reversed = names.clone();
            reversed.reverse();
            prop_assume!(reversed != names);
            let source = render(&names, "src");
            let candidate = render(&reversed, "dst");
            prop_assert!(!TranslationValidator::is_acceptable(&source, Some(&candidate)));
        }

        #[test]
        fn prop_same_placeholders_accepted(names in placeholder_names()) {
            let source = render(&names, "src");
            let candidate = render(&names, "dst");
            prop_assert!(TranslationValidator::is_acceptable(&source, Some(&candidate)));
        }
    }
}
