//! Lexical features computed directly from strings.

use std::collections::BTreeMap;

use regex::Regex;

/// Counts of the characters tallied over the raw URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharTally {
    /// ASCII `0`-`9`
    pub digits: i64,
    /// `-`
    pub hyphens: i64,
    /// `@`
    pub at_signs: i64,
    /// `?`
    pub question_marks: i64,
    /// `=`
    pub equals_signs: i64,
    /// `/`
    pub slashes: i64,
}

/// Tallies digits, `-`, `@`, `?`, `=` and `/` in a single pass.
///
/// Only ASCII `0`-`9` count as digits.
pub fn tally_chars(s: &str) -> CharTally {
    let mut tally = CharTally::default();
    for c in s.chars() {
        match c {
            c if c.is_ascii_digit() => tally.digits += 1,
            '-' => tally.hyphens += 1,
            '@' => tally.at_signs += 1,
            '?' => tally.question_marks += 1,
            '=' => tally.equals_signs += 1,
            '/' => tally.slashes += 1,
            _ => {}
        }
    }
    tally
}

/// Shannon entropy (base 2) of the character distribution of `s`.
///
/// Zero for the empty string and for strings of one repeated character.
pub fn domain_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    // Ordered map: the float sum must not depend on hash iteration order.
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut total = 0usize;
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let total = total as f64;
    let entropy: f64 = counts
        .values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)]
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();
    // A single distinct character sums to -0.0
    entropy.max(0.0)
}

/// Whether `hostname` is entirely a dotted quad.
pub fn is_ip_host(pattern: &Regex, hostname: &str) -> bool {
    pattern.is_match(hostname)
}

/// Whether any keyword occurs in `url_lower`; stops at the first hit.
pub fn contains_keyword(keywords: &[String], url_lower: &str) -> bool {
    keywords.iter().any(|kw| url_lower.contains(kw.as_str()))
}

/// Number of characters (not bytes) in `s`.
pub fn char_len(s: &str) -> i64 {
    #[allow(clippy::cast_possible_wrap)]
    let len = s.chars().count() as i64;
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ip_pattern() -> Regex {
        Regex::new(r"^\d+\.\d+\.\d+\.\d+$").unwrap()
    }

    #[test]
    fn test_tally_mixed() {
        let tally = tally_chars("a1-2?3");
        assert_eq!(tally.digits, 3);
        assert_eq!(tally.hyphens, 1);
        assert_eq!(tally.question_marks, 1);
        assert_eq!(tally.at_signs, 0);
    }

    #[test]
    fn test_tally_url() {
        let tally = tally_chars("http://user@a-b.com/x?y=1&z=22");
        assert_eq!(tally.slashes, 3);
        assert_eq!(tally.at_signs, 1);
        assert_eq!(tally.hyphens, 1);
        assert_eq!(tally.equals_signs, 2);
        assert_eq!(tally.question_marks, 1);
        assert_eq!(tally.digits, 3);
    }

    #[test]
    fn test_entropy_known_values() {
        assert_eq!(domain_entropy(""), 0.0);
        assert_eq!(domain_entropy("aaaa"), 0.0);
        assert!((domain_entropy("ab") - 1.0).abs() < 1e-12);
        assert!((domain_entropy("abcd") - 2.0).abs() < 1e-12);
        // "google.com": o x3, g x2, l, e, ., c, m
        let expected = -(3.0_f64 / 10.0 * (0.3_f64).log2()
            + 2.0 / 10.0 * (0.2_f64).log2()
            + 5.0 * (0.1 * (0.1_f64).log2()));
        assert!((domain_entropy("google.com") - expected).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_counts_characters_not_bytes() {
        // Two distinct characters, each multi-byte
        assert!((domain_entropy("éü") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_ip_host() {
        let re = ip_pattern();
        assert!(is_ip_host(&re, "192.168.1.1"));
        assert!(!is_ip_host(&re, "example.com"));
        assert!(!is_ip_host(&re, "192.168.1.1extra"));
        assert!(!is_ip_host(&re, "x192.168.1.1"));
        assert!(!is_ip_host(&re, "::1"));
        assert!(!is_ip_host(&re, ""));
    }

    #[test]
    fn test_contains_keyword() {
        let keywords = vec!["login".to_string(), "secure".to_string()];
        assert!(contains_keyword(&keywords, "http://secure-login.example.com"));
        assert!(!contains_keyword(&keywords, "http://example.com/page"));
        assert!(!contains_keyword(&[], "http://login.example.com"));
    }

    #[test]
    fn test_char_len_counts_code_points() {
        assert_eq!(char_len("http://bücher.de"), 16);
        assert_eq!(char_len(""), 0);
    }

    proptest! {
        #[test]
        fn test_entropy_non_negative(s in ".{1,64}") {
            prop_assert!(domain_entropy(&s) >= 0.0);
        }

        #[test]
        fn test_entropy_zero_iff_single_distinct_char(s in "[a-c]{1,32}") {
            let distinct = s.chars().collect::<std::collections::HashSet<_>>().len();
            let entropy = domain_entropy(&s);
            prop_assert_eq!(entropy == 0.0, distinct == 1);
        }

        #[test]
        fn test_tally_is_order_independent(s in "[a1\\-@?=/]{0,40}") {
            let reversed: String = s.chars().rev().collect();
            prop_assert_eq!(tally_chars(&s), tally_chars(&reversed));
        }
    }
}
