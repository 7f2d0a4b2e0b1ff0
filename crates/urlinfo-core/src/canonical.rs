//! URL canonicalization.
//!
//! Request paths reach the service without a scheme and in whatever spelling
//! the link carried: mixed case hosts, dot-segments, doubled slashes, shuffled
//! query parameters. [`canonicalize`] folds all of these into a single string
//! so that membership tests against the database are exact-match only.
//!
//! The canonical form keeps the `http://` scheme. Stored lists must use the
//! same form.

use crate::error::CanonicalizeError;
use percent_encoding::{percent_decode, percent_encode, AsciiSet, CONTROLS};
use tracing::trace;
use url::{Host, Position, Url};

type Result<T> = std::result::Result<T, CanonicalizeError>;

/// Scheme prepended to every request path before normalization.
pub const DEFAULT_SCHEME: &str = "http://";

/// Characters escaped when re-serializing query keys and values.
///
/// `/`, `:`, `@`, `?` and `,` stay literal so that `?q=x/y` survives unchanged.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Canonicalizes the URL fragment of a request path.
///
/// `request_path` is what remains of the request target once the routing
/// prefix has been stripped, e.g. `evilfoo.com/path?b=2&a=1`.
///
/// # Errors
///
/// * [`CanonicalizeError::InvalidUrl`] if the input is empty or starts with a
///   path separator (`/` or `\`).
/// * [`CanonicalizeError::NormalizationFailure`] if the input does not form a
///   well-formed URL once the default scheme is prepended.
///
/// # Examples
///
/// ```
/// use urlinfo_core::canonicalize;
///
/// assert_eq!(canonicalize("EvilFoo.com:80").unwrap(), "http://evilfoo.com");
/// assert_eq!(
///     canonicalize("host/path?b=2&a=1#top").unwrap(),
///     "http://host/path?a=1&b=2"
/// );
/// assert!(canonicalize("/index.html").is_err());
/// ```
pub fn canonicalize(request_path: &str) -> Result<String> {
    if request_path.is_empty() || request_path.starts_with(['/', '\\']) {
        return Err(CanonicalizeError::InvalidUrl);
    }

    let has_path = supplies_path(request_path);
    let mut url = Url::parse(&format!("{DEFAULT_SCHEME}{request_path}"))
        .map_err(|e| CanonicalizeError::NormalizationFailure(e.to_string()))?;

    url.set_fragment(None);
    trim_host_dots(&mut url)?;

    let path = collapse_slashes(&normalize_escapes(url.path())?);
    url.set_path(&path);

    let query = match url.query() {
        Some(query) => sort_query(query)?,
        None => None,
    };
    url.set_query(query.as_deref());

    let canonical = if !has_path && url.path() == "/" {
        format!("{}{}", &url[..Position::BeforePath], &url[Position::AfterPath..])
    } else {
        url.to_string()
    };

    trace!(input = request_path, canonical = %canonical, "canonicalized url");
    Ok(canonical)
}

/// Strips the default scheme from a canonical URL.
///
/// The result can be passed back through [`canonicalize`], which yields the
/// original canonical string again.
pub fn strip_default_scheme(canonical: &str) -> &str {
    canonical
        .strip_prefix(DEFAULT_SCHEME)
        .unwrap_or(canonical)
}

/// Whether the raw input carries a path after its authority.
fn supplies_path(request_path: &str) -> bool {
    request_path
        .find(['/', '\\', '?', '#'])
        .is_some_and(|idx| matches!(request_path.as_bytes()[idx], b'/' | b'\\'))
}

fn trim_host_dots(url: &mut Url) -> Result<()> {
    let trimmed = match url.host() {
        Some(Host::Domain(domain)) => {
            let trimmed = domain.trim_matches('.');
            if trimmed.len() == domain.len() {
                return Ok(());
            }
            trimmed.to_owned()
        }
        Some(_) => return Ok(()),
        None => {
            return Err(CanonicalizeError::NormalizationFailure(
                "url has no host".to_string(),
            ))
        }
    };

    if trimmed.is_empty() {
        return Err(CanonicalizeError::NormalizationFailure(
            "host is empty once dots are removed".to_string(),
        ));
    }

    url.set_host(Some(&trimmed))
        .map_err(|e| CanonicalizeError::NormalizationFailure(e.to_string()))
}

/// Rejects any `%` that is not followed by two hex digits.
fn check_escapes(component: &str) -> Result<()> {
    let bytes = component.as_bytes();
    for (idx, _) in component.match_indices('%') {
        let valid = bytes
            .get(idx + 1..idx + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(CanonicalizeError::NormalizationFailure(format!(
                "invalid percent-escape at byte {idx} in '{component}'"
            )));
        }
    }
    Ok(())
}

/// Uppercases escapes and decodes those standing for unreserved characters.
fn normalize_escapes(path: &str) -> Result<String> {
    check_escapes(path)?;

    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(idx) = rest.find('%') {
        out.push_str(&rest[..idx]);
        let hex = &rest[idx + 1..idx + 3];
        // two ASCII hex digits, checked above
        let byte = u8::from_str_radix(hex, 16)
            .map_err(|e| CanonicalizeError::NormalizationFailure(e.to_string()))?;
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push_str(&hex.to_ascii_uppercase());
        }
        rest = &rest[idx + 3..];
    }
    out.push_str(rest);

    Ok(out)
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_slash = false;
    for c in path.chars() {
        if c == '/' && previous_slash {
            continue;
        }
        previous_slash = c == '/';
        out.push(c);
    }
    out
}

/// Sorts query parameters by key, then value.
///
/// Returns `None` when nothing but separators remain.
fn sort_query(query: &str) -> Result<Option<String>> {
    check_escapes(query)?;

    let mut pairs: Vec<(Vec<u8>, Vec<u8>)> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect();

    if pairs.is_empty() {
        return Ok(None);
    }
    pairs.sort();

    let sorted = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");

    Ok(Some(sorted))
}

fn decode_component(component: &str) -> Vec<u8> {
    let spaced = component.replace('+', " ");
    percent_decode(spaced.as_bytes()).collect()
}

fn encode_component(component: &[u8]) -> String {
    percent_encode(component, QUERY_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_canonical(input: &str, expected: &str) {
        assert_eq!(
            canonicalize(input).as_deref(),
            Ok(expected),
            "input: {input:?}"
        );
    }

    #[test]
    fn bare_hosts() {
        assert_canonical("foo", "http://foo");
        assert_canonical("domain.com", "http://domain.com");
        assert_canonical("evilfoo.com", "http://evilfoo.com");
    }

    #[test]
    fn ports() {
        assert_canonical("host:80", "http://host");
        assert_canonical("host:/file", "http://host/file");
        assert_canonical("host:123/file", "http://host:123/file");
        assert_canonical("host:80/#asd/", "http://host/");
    }

    #[test]
    fn paths() {
        assert_canonical("domain.com/path/", "http://domain.com/path/");
        assert_canonical(
            "domain.com/path/file.html",
            "http://domain.com/path/file.html",
        );
        assert_canonical("domain.com/a/./b/../c", "http://domain.com/a/c");
        assert_canonical("domain.com//a///b", "http://domain.com/a/b");
    }

    #[test]
    fn queries() {
        assert_canonical(
            "domain.com/path/file?query",
            "http://domain.com/path/file?query=",
        );
        assert_canonical("domain.com/path?query", "http://domain.com/path?query=");
        assert_canonical(
            "domain.com/path/file?query=x/y",
            "http://domain.com/path/file?query=x/y",
        );
        assert_canonical("domain.com/path?", "http://domain.com/path");
        assert_canonical("domain.com/path?a=1&&b=2", "http://domain.com/path?a=1&b=2");
        assert_canonical("domain.com/path?q=a+b", "http://domain.com/path?q=a+b");
        assert_canonical("domain.com/path?q=a%2bb", "http://domain.com/path?q=a%2Bb");
    }

    #[test]
    fn fragments_are_stripped() {
        assert_canonical(
            "domain.com/path/file?query=x/y#x",
            "http://domain.com/path/file?query=x/y",
        );
        assert_canonical("domain.com/page#section", "http://domain.com/page");
    }

    #[test]
    fn query_order_is_irrelevant() {
        assert_eq!(
            canonicalize("host/path?b=2&a=1"),
            canonicalize("host/path?a=1&b=2")
        );
        assert_canonical("host/path?b=2&a=1", "http://host/path?a=1&b=2");
        assert_canonical("host/path?a=2&a=1", "http://host/path?a=1&a=2");
    }

    #[test]
    fn hosts_are_lowercased_and_trimmed() {
        assert_canonical("EvilFoo.COM/Path", "http://evilfoo.com/Path");
        assert_canonical("evilfoo.com./x", "http://evilfoo.com/x");
    }

    #[test]
    fn numeric_hosts_are_decoded() {
        assert_canonical("0x7f.0.0.1/evil", "http://127.0.0.1/evil");
        assert_canonical("0177.0.0.1/evil", "http://127.0.0.1/evil");
    }

    #[test]
    fn escapes_are_normalized() {
        assert_canonical("domain.com/%7euser", "http://domain.com/~user");
        assert_canonical("domain.com/a%2fb", "http://domain.com/a%2Fb");
    }

    #[test]
    fn missing_url_is_invalid() {
        for input in ["", "/", "/index.html", "\\", "\\evil.com"] {
            assert_eq!(
                canonicalize(input),
                Err(CanonicalizeError::InvalidUrl),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn malformed_url_fails_normalization() {
        for input in [
            "host:99999/file",
            "bad host/file",
            "domain.com/%zz",
            "domain.com/path?q=%4",
            "...",
        ] {
            assert!(
                matches!(
                    canonicalize(input),
                    Err(CanonicalizeError::NormalizationFailure(_))
                ),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn canonical_form_is_idempotent() {
        for input in [
            "foo",
            "host:80/#asd/",
            "domain.com/path/file?query",
            "domain.com/path/file?query=x/y#x",
            "host/path?b=2&a=1",
            "domain.com/a%2fb?q=a+b&p=%C3%A9",
        ] {
            let once = canonicalize(input).unwrap();
            let twice = canonicalize(strip_default_scheme(&once)).unwrap();
            assert_eq!(once, twice, "input: {input:?}");
        }
    }

    #[test]
    fn strip_default_scheme_leaves_other_strings() {
        assert_eq!(strip_default_scheme("http://foo"), "foo");
        assert_eq!(strip_default_scheme("https://foo"), "https://foo");
    }
}
