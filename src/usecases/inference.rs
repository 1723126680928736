//! Subject inference for titles that name no known concept.
//!
//! Looks for "Name on Topic" and "Name's Work" after dropping episode numbering
//! and a leading label, e.g. "Ep. 212: Jane Doe on Virtue" -> "Jane Doe".

use regex::Regex;
use std::sync::LazyLock;

/// Longest subject (in words) accepted as a name. Longer captures are phrases, not people.
pub const MAX_SUBJECT_WORDS: usize = 3;

static EPISODE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Ep\.?\s*\d+[:.]?\s*").expect("episode prefix pattern"));

static POSSESSIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)['\u{2019}]s ").expect("possessive pattern"));

/// Strip "Ep. 12:" style numbering and one configured leading label ("Closereads").
/// Other `Word:` prefixes are kept and become part of the subject.
pub fn strip_title_prefixes<'t>(title: &'t str, labels: &[String]) -> &'t str {
    let rest = match EPISODE_PREFIX.find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    };
    for label in labels.iter().filter(|l| !l.is_empty()) {
        if let Some(after) = rest.strip_prefix(label.as_str()) {
            let after = after.strip_prefix(':').unwrap_or(after);
            return after.trim_start();
        }
    }
    rest
}

/// Extract a probable subject name from `title`, or `None` when no pattern yields an acceptable one.
pub fn infer_subject(title: &str, labels: &[String]) -> Option<String> {
    let clean = strip_title_prefixes(title, labels);

    if let Some(pos) = clean.find(" on ") {
        if let Some(subject) = accept(&clean[..pos]) {
            return Some(subject);
        }
    }

    POSSESSIVE
        .captures(clean)
        .and_then(|caps| caps.get(1))
        .and_then(|m| accept(m.as_str()))
}

/// Stable node id for an inferred subject.
pub fn subject_slug(subject: &str) -> String {
    subject.to_lowercase().replace(' ', "_")
}

fn accept(candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    let words = candidate.split_whitespace().count();
    (words > 0 && words <= MAX_SUBJECT_WORDS).then(|| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["Closereads".to_string()]
    }

    #[test]
    fn test_strip_episode_prefix_variants() {
        assert_eq!(strip_title_prefixes("Ep. 1: Plato on Justice", &labels()), "Plato on Justice");
        assert_eq!(strip_title_prefixes("Ep 42 Hume", &labels()), "Hume");
        assert_eq!(strip_title_prefixes("Ep.300. Zizek", &labels()), "Zizek");
        assert_eq!(strip_title_prefixes("No prefix here", &labels()), "No prefix here");
    }

    #[test]
    fn test_strip_labels() {
        assert_eq!(
            strip_title_prefixes("Closereads: Jane Doe on Time", &labels()),
            "Jane Doe on Time"
        );
        assert_eq!(
            strip_title_prefixes("Ep. 7: Closereads Jane Doe on Time", &labels()),
            "Jane Doe on Time"
        );
        assert_eq!(
            strip_title_prefixes("Ep. 7: Bonus: Jane Doe on Time", &labels()),
            "Bonus: Jane Doe on Time"
        );
    }

    #[test]
    fn test_unconfigured_label_stays_in_subject() {
        assert_eq!(
            infer_subject("Precognition: Jane Doe on X", &labels()),
            Some("Precognition: Jane Doe".to_string())
        );
        assert_eq!(
            subject_slug("Interview: Bob Smith"),
            "interview:_bob_smith"
        );
        // Four words once the label is counted.
        assert_eq!(
            infer_subject("Interview: Bob Smith Jones on Life", &labels()),
            None
        );
    }

    #[test]
    fn test_infer_on_pattern() {
        assert_eq!(
            infer_subject("Ep. 101: Jane Doe on Virtue", &labels()),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_infer_possessive_pattern() {
        assert_eq!(
            infer_subject("Zizek's Parallax View", &labels()),
            Some("Zizek".to_string())
        );
        assert_eq!(
            infer_subject("Zizek\u{2019}s Parallax View", &labels()),
            Some("Zizek".to_string())
        );
    }

    #[test]
    fn test_infer_rejects_long_subjects() {
        assert_eq!(
            infer_subject("A Long Talk About Things on Tuesday", &labels()),
            None
        );
        assert_eq!(
            infer_subject("The very long winded author's Book", &labels()),
            None
        );
    }

    #[test]
    fn test_long_on_subject_falls_back_to_possessive() {
        assert_eq!(
            infer_subject("Mary Smith's Reading of Many Things on Ethics", &labels()),
            Some("Mary Smith".to_string())
        );
    }

    #[test]
    fn test_on_is_case_sensitive() {
        assert_eq!(infer_subject("Jane Doe On Virtue", &labels()), None);
    }

    #[test]
    fn test_empty_subject_rejected() {
        assert_eq!(infer_subject(" on nothing", &labels()), None);
    }

    #[test]
    fn test_subject_slug() {
        assert_eq!(subject_slug("Jane Doe"), "jane_doe");
        assert_eq!(subject_slug("Zizek"), "zizek");
    }
}
