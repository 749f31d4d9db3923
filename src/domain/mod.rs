//! URL decomposition.
//!
//! Splits a raw URL string into its structural parts (scheme, hostname, path,
//! query) and a public-suffix-aware domain breakdown (subdomain, registrable
//! domain, public suffix).
//!
//! Decomposition never fails: unparseable input yields empty structural fields.
//! Structural parts are substrings of the input, not a normalized
//! re-serialization, so `/a b` stays `/a b` and an absent path stays empty.
//!
//! Key functions:
//! - `decompose()` - Full decomposition of one URL
//! - `split_host()` - Public-suffix split of a bare hostname

mod suffix;

use std::net::{Ipv4Addr, Ipv6Addr};

pub use suffix::{PublicSuffixList, RuleSuffixList, SuffixList};

/// Characters allowed in a URL scheme after the leading letter.
fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Structural and domain parts of one URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecomposedUrl {
    /// Scheme, lowercased (`""` if none)
    pub scheme: String,
    /// Host without userinfo, port or IPv6 brackets, lowercased (`""` if none)
    pub hostname: String,
    /// Path as written in the input
    pub path: String,
    /// Query string without the leading `?`
    pub query: String,
    /// Labels left of the registrable domain, dot-joined
    pub subdomain: String,
    /// Registrable label, e.g. `example` for `www.example.co.uk`
    pub registrable_domain: String,
    /// Public suffix, e.g. `co.uk`
    pub public_suffix: String,
}

impl DecomposedUrl {
    /// Domain used for registration lookups: `"{registrable_domain}.{public_suffix}"`.
    ///
    /// The dot is always present, so a missing side produces a degenerate
    /// string such as `"localhost."` or `".com"`.
    pub fn lookup_domain(&self) -> String {
        format!("{}.{}", self.registrable_domain, self.public_suffix)
    }
}

/// Result of a public-suffix split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    /// Labels left of the registrable domain, e.g. `www`
    pub subdomain: String,
    /// The registrable label, e.g. `example`
    pub domain: String,
    /// The public suffix, e.g. `co.uk`
    pub suffix: String,
}

/// Schemes whose last path segment may carry `;params`.
const SCHEMES_WITH_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Raw `scheme://netloc/path?query#fragment` split of a URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct UrlSplit<'a> {
    scheme: &'a str,
    netloc: &'a str,
    path: &'a str,
    query: &'a str,
}

/// Splits a URL into its raw components.
///
/// Returns `None` when the network location has unbalanced IPv6 brackets.
fn split_url(url: &str) -> Option<UrlSplit<'_>> {
    let mut split = UrlSplit::default();
    let mut rest = url;

    if let Some((scheme, after)) = rest.split_once(':') {
        let mut chars = scheme.chars();
        let valid =
            chars.next().is_some_and(|c| c.is_ascii_alphabetic()) && chars.all(is_scheme_char);
        if valid {
            split.scheme = scheme;
            rest = after;
        }
    }

    if let Some(after_slashes) = rest.strip_prefix("//") {
        let end = after_slashes
            .find(['/', '?', '#'])
            .unwrap_or(after_slashes.len());
        split.netloc = &after_slashes[..end];
        rest = &after_slashes[end..];
        if split.netloc.contains('[') != split.netloc.contains(']') {
            return None;
        }
    }

    if let Some((before, _fragment)) = rest.split_once('#') {
        rest = before;
    }
    if let Some((path, query)) = rest.split_once('?') {
        split.path = path;
        split.query = query;
    } else {
        split.path = rest;
    }

    if SCHEMES_WITH_PARAMS
        .iter()
        .any(|scheme| split.scheme.eq_ignore_ascii_case(scheme))
    {
        split.path = strip_params(split.path);
    }

    Some(split)
}

/// Drops `;params` from the last path segment (`/a;x/b;y` becomes `/a;x/b`).
fn strip_params(path: &str) -> &str {
    let last_segment = path.rfind('/').unwrap_or(0);
    match path[last_segment..].find(';') {
        Some(i) => &path[..last_segment + i],
        None => path,
    }
}

/// Extracts the hostname from a network location.
///
/// Drops userinfo and port, strips IPv6 brackets and lowercases. Returns `None`
/// for a bracketed host that is not a valid IPv6 literal.
fn hostname_from_netloc(netloc: &str) -> Option<String> {
    let host_port = netloc.rsplit_once('@').map_or(netloc, |(_, hp)| hp);

    if let Some(bracketed) = host_port.strip_prefix('[') {
        let inner = bracketed.split(']').next().unwrap_or_default();
        return match url::Host::parse(&format!("[{inner}]")) {
            Ok(url::Host::Ipv6(_)) => Some(inner.to_lowercase()),
            _ => None,
        };
    }

    let host = host_port.split(':').next().unwrap_or_default();
    Some(host.to_lowercase())
}

/// Finds the host-like part of a raw string for suffix splitting.
///
/// Unlike the structural hostname this also works for scheme-less input such
/// as `example.com/path`: an optional `scheme://` prefix is skipped and the
/// leading segment up to `/`, `?` or `#` is taken.
fn lenient_host(url: &str) -> String {
    let trimmed = url.trim();
    let without_scheme = strip_scheme_prefix(trimmed);

    let netloc = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host_port = netloc.rsplit_once('@').map_or(netloc, |(_, hp)| hp);

    let host = if let Some(bracketed) = host_port.strip_prefix('[') {
        bracketed.split(']').next().unwrap_or_default()
    } else {
        host_port.split(':').next().unwrap_or_default()
    };

    host.trim_end_matches('.').to_string()
}

/// Strips a leading `//` or `scheme://` prefix.
fn strip_scheme_prefix(s: &str) -> &str {
    if let Some(rest) = s.strip_prefix("//") {
        return rest;
    }
    if let Some((scheme, rest)) = s.split_once("://") {
        if !scheme.is_empty() && scheme.chars().all(is_scheme_char) {
            return rest;
        }
    }
    s
}

fn is_ip_literal(host: &str) -> bool {
    host.parse::<Ipv4Addr>().is_ok() || host.parse::<Ipv6Addr>().is_ok()
}

/// Splits a hostname into subdomain, registrable domain and public suffix.
///
/// Suffix rules match case-insensitively, but the parts keep the case of
/// `host` as written. IP literals become the domain with an empty suffix.
/// Hosts without a known suffix use their last label as the domain. A host
/// that is itself a public suffix has an empty domain.
///
/// # Examples
///
/// ```
/// use phish_features::domain::{split_host, RuleSuffixList};
///
/// let list = RuleSuffixList::from_rules(["uk", "co.uk"]).unwrap();
/// let parts = split_host(&list, "www.example.co.uk");
/// assert_eq!(parts.subdomain, "www");
/// assert_eq!(parts.domain, "example");
/// assert_eq!(parts.suffix, "co.uk");
/// ```
pub fn split_host(suffixes: &dyn SuffixList, host: &str) -> DomainParts {
    if host.is_empty() {
        return DomainParts::default();
    }
    if is_ip_literal(host) {
        return DomainParts {
            domain: host.to_string(),
            ..Default::default()
        };
    }

    // ASCII lowercasing keeps byte offsets valid for slicing `host`
    let lower = host.to_ascii_lowercase();
    let suffix_len = suffixes.public_suffix(&lower).map_or(0, str::len);
    let suffix = &host[host.len() - suffix_len..];
    let rest = if suffix.is_empty() {
        host
    } else if suffix.len() == host.len() {
        ""
    } else {
        &host[..host.len() - suffix.len() - 1]
    };

    let (subdomain, domain) = match rest.rsplit_once('.') {
        Some((sub, dom)) => (sub, dom),
        None => ("", rest),
    };

    DomainParts {
        subdomain: subdomain.to_string(),
        domain: domain.to_string(),
        suffix: suffix.to_string(),
    }
}

/// Decomposes a URL into structural and domain parts.
///
/// Never fails. When the URL cannot be split (unbalanced or invalid IPv6
/// brackets) the structural fields are empty; the domain split still runs on
/// the host-like part of the raw string.
///
/// # Arguments
///
/// * `suffixes` - Suffix rules loaded once at startup
/// * `url` - The raw URL string
pub fn decompose(suffixes: &dyn SuffixList, url: &str) -> DecomposedUrl {
    let structural = split_url(url).and_then(|split| {
        let hostname = hostname_from_netloc(split.netloc)?;
        Some((split, hostname))
    });

    let (scheme, hostname, path, query) = match structural {
        Some((split, hostname)) => (
            split.scheme.to_lowercase(),
            hostname,
            split.path.to_string(),
            split.query.to_string(),
        ),
        None => {
            log::debug!("Could not split URL, using empty structural fields: {url}");
            Default::default()
        }
    };

    let parts = split_host(suffixes, &lenient_host(url));

    DecomposedUrl {
        scheme,
        hostname,
        path,
        query,
        subdomain: parts.subdomain,
        registrable_domain: parts.domain,
        public_suffix: parts.suffix,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
