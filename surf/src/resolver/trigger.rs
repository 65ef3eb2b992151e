//! Trigger detection.

use crate::config::TriggerSet;

/// Decides whether a query should be handled at all.
///
/// The first term matches when its first character is a trigger or the whole
/// term is a trigger. A lone single-character term never matches: the user
/// has to type something after the trigger first.
///
/// Lengths are counted in Unicode scalar values, so a lone trigger outside
/// the Basic Multilingual Plane (say `😀`) is still a single character and
/// waits for more input.
#[must_use]
pub fn accepts<S: AsRef<str>>(terms: &[S], triggers: &TriggerSet) -> bool {
    let Some(first) = terms.first().map(AsRef::as_ref) else {
        return false;
    };
    let Some(first_char) = first.chars().next() else {
        return false;
    };

    let matched = triggers.contains_char(first_char) || triggers.contains(first);
    let has_payload = terms.len() >= 2 || first.chars().count() > 1;

    matched && has_payload
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triggers(source: &str) -> TriggerSet {
        TriggerSet::parse(source)
    }

    #[test]
    fn test_leading_char_trigger() {
        assert!(accepts(&["?example.com"], &triggers("?")));
    }

    #[test]
    fn test_whole_term_trigger() {
        assert!(accepts(&["surf", "rust"], &triggers("surf")));
    }

    #[test]
    fn test_lone_single_char_trigger_waits() {
        assert!(!accepts(&["?"], &triggers("?")));
    }

    #[test]
    fn test_single_char_trigger_with_following_term() {
        assert!(accepts(&["?", "hello"], &triggers("?")));
    }

    #[test]
    fn test_lone_multi_char_trigger() {
        assert!(accepts(&["surf"], &triggers("surf")));
    }

    #[test]
    fn test_no_match() {
        assert!(!accepts(&["hello", "world"], &triggers("?,surf")));
        assert!(!accepts(&["surfing"], &triggers("surf")));
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(!accepts(&empty, &triggers("?")));
        assert!(!accepts(&["", "x"], &triggers("?")));
        assert!(!accepts(&["?abc"], &triggers("")));
    }

    #[test]
    fn test_multibyte_first_char() {
        assert!(accepts(&["→rust"], &triggers("→")));
        assert!(!accepts(&["→"], &triggers("→")));
    }

    #[test]
    fn test_astral_trigger_counts_as_one_char() {
        assert!(!accepts(&["😀"], &triggers("😀")));
        assert!(accepts(&["😀rust"], &triggers("😀")));
        assert!(accepts(&["😀", "rust"], &triggers("😀")));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!accepts(&["Surf", "x"], &triggers("surf")));
    }
}
