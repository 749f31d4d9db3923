//! Public Suffix List lookups.
//!
//! `SuffixList` is the seam between URL decomposition and the suffix data. The
//! production implementation wraps the compiled-in list from the `psl` crate;
//! `RuleSuffixList` wraps a `publicsuffix::List` parsed once at startup from a
//! PSL-format file (or from a handful of rules in tests).

use std::fmt;
use std::str::FromStr;

/// Source of public suffix rules.
///
/// Implementations are built once at process start and shared read-only
/// across extraction calls.
pub trait SuffixList: Send + Sync {
    /// Returns the public suffix of `host`, or `None` if no known rule matches.
    ///
    /// `host` is lowercase without a trailing dot. The returned slice is always
    /// a dot-aligned suffix of `host` (possibly all of it).
    fn public_suffix<'h>(&self, host: &'h str) -> Option<&'h str>;
}

/// Walks past private-section rules to the ICANN suffix.
///
/// `lookup` returns the byte length of the matched suffix and whether its rule
/// is private, or `None` when no known rule matches.
fn icann_suffix<'h>(
    host: &'h str,
    lookup: impl Fn(&str) -> Option<(usize, bool)>,
) -> Option<&'h str> {
    let mut name = host;
    loop {
        let (len, private) = lookup(name)?;
        let suffix = &host[host.len() - len..];
        if !private {
            return Some(suffix);
        }
        // Private rule: retry on the rule minus its leftmost label.
        name = suffix.split_once('.').map(|(_, rest)| rest)?;
    }
}

/// The Public Suffix List compiled into the `psl` crate (ICANN section only).
///
/// Private registrations such as `blogspot.com` are treated as ordinary
/// domains under their ICANN suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixList;

impl SuffixList for PublicSuffixList {
    fn public_suffix<'h>(&self, host: &'h str) -> Option<&'h str> {
        use psl::Psl;

        icann_suffix(host, |name| {
            let suffix = psl::List.suffix(name.as_bytes())?;
            suffix.is_known().then(|| {
                (
                    suffix.as_bytes().len(),
                    matches!(suffix.typ(), Some(psl::Type::Private)),
                )
            })
        })
    }
}

/// Section marker `publicsuffix` needs before it accepts any rule.
const ICANN_SECTION: &str = "// ===BEGIN ICANN DOMAINS===";

/// A suffix list parsed from PSL-format text by the `publicsuffix` crate.
///
/// Supports plain rules (`co.uk`), wildcards (`*.ck`) and exceptions
/// (`!www.ck`). Rules in the private section are skipped the same way as for
/// `PublicSuffixList`.
pub struct RuleSuffixList {
    list: publicsuffix::List,
    rules: usize,
}

impl RuleSuffixList {
    /// Parses the text of a `public_suffix_list.dat` file.
    ///
    /// Rules before any section marker are read as ICANN rules.
    ///
    /// # Errors
    ///
    /// Returns the `publicsuffix` parse error for malformed input.
    pub fn from_psl_text(text: &str) -> Result<Self, publicsuffix::Error> {
        let rules = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .count();
        let list = if text.contains("BEGIN ICANN DOMAINS") {
            publicsuffix::List::from_str(text)?
        } else {
            publicsuffix::List::from_str(&format!("{ICANN_SECTION}\n{text}"))?
        };
        Ok(Self { list, rules })
    }

    /// Builds a list from individual rules.
    ///
    /// # Errors
    ///
    /// Returns the `publicsuffix` parse error for a malformed rule.
    pub fn from_rules<I, S>(rules: I) -> Result<Self, publicsuffix::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = rules
            .into_iter()
            .map(|rule| rule.as_ref().trim().to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_psl_text(&text)
    }

    /// Number of rule lines the list was built from.
    pub fn len(&self) -> usize {
        self.rules
    }

    /// Whether the list was built without any rules.
    pub fn is_empty(&self) -> bool {
        self.rules == 0
    }
}

impl fmt::Debug for RuleSuffixList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSuffixList")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl SuffixList for RuleSuffixList {
    fn public_suffix<'h>(&self, host: &'h str) -> Option<&'h str> {
        use publicsuffix::Psl;

        icann_suffix(host, |name| {
            let suffix = self.list.suffix(name.as_bytes())?;
            suffix.is_known().then(|| {
                (
                    suffix.as_bytes().len(),
                    matches!(suffix.typ(), Some(publicsuffix::Type::Private)),
                )
            })
        })
    }
}
