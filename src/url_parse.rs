use url::Url;

use crate::error::AppError;

/// An absolute URL reduced to the fields the featurizer reads. Built once
/// per evaluation and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub host: String,
    pub host_no_www: String,
    pub port: Option<u16>,
    pub path: String,
    pub full_href: String,
    pub query: String,
    pub fragment: String,
}

impl ParsedUrl {
    /// Trims the input and parses it as an absolute URL with a non-empty
    /// hostname. Anything else is `AppError::InvalidUrl`.
    pub fn parse(raw: &str) -> Result<ParsedUrl, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidUrl);
        }

        let url = Url::parse(trimmed).map_err(|_| AppError::InvalidUrl)?;

        let host = match url.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => return Err(AppError::InvalidUrl),
        };

        // Delimiters stay attached so character counts include them; an
        // empty-but-present query ("...?") collapses to the empty string.
        let query = match url.query() {
            Some(q) if !q.is_empty() => format!("?{}", q),
            _ => String::new(),
        };
        let fragment = match url.fragment() {
            Some(f) if !f.is_empty() => format!("#{}", f),
            _ => String::new(),
        };

        let scheme = url.scheme().to_string();
        let host_no_www = strip_www(&host).to_string();
        let path = format!("{}{}", url.path(), query);
        let full_href = url.as_str().to_string();

        Ok(ParsedUrl {
            scheme,
            host,
            host_no_www,
            port: url.port(),
            path,
            full_href,
            query,
            fragment,
        })
    }

    /// Final dot-separated label of the host, lower-cased; empty when the
    /// host has no dot at all.
    pub fn tld(&self) -> String {
        if !self.host.contains('.') {
            return String::new();
        }
        self.host
            .rsplit('.')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase()
    }
}

/// Removes a single leading `www.` label, case-insensitively. Only the
/// first label is considered.
pub fn strip_www(host: &str) -> &str {
    match host.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &host[4..],
        _ => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let parsed = ParsedUrl::parse("  https://example.com/  ").unwrap();
        assert_eq!(parsed.full_href, "https://example.com/");
    }

    #[test]
    fn rejects_empty_and_unparsable_input() {
        for raw in ["", "   ", "not a url", "ftp://"] {
            assert!(
                matches!(ParsedUrl::parse(raw), Err(AppError::InvalidUrl)),
                "expected rejection for {raw:?}"
            );
        }
    }

    #[test]
    fn rejects_urls_without_a_hostname() {
        assert!(ParsedUrl::parse("mailto:someone@example.com").is_err());
        assert!(ParsedUrl::parse("file:///etc/hosts").is_err());
    }

    #[test]
    fn canonicalizes_scheme_and_host_case() {
        let parsed = ParsedUrl::parse("HTTPS://EXAMPLE.com/Path").unwrap();
        assert_eq!(parsed.scheme, "https");
        assert_eq!(parsed.host, "example.com");
        assert_eq!(parsed.path, "/Path");
    }

    #[test]
    fn strips_a_single_www_label() {
        assert_eq!(strip_www("www.example.com"), "example.com");
        assert_eq!(strip_www("www.www.example.com"), "www.example.com");
        assert_eq!(strip_www("WWW.Example.com"), "Example.com");
        assert_eq!(strip_www("wwwx.com"), "wwwx.com");
    }

    #[test]
    fn default_ports_drop_and_explicit_ports_stay() {
        assert_eq!(ParsedUrl::parse("http://example.com:80/").unwrap().port, None);
        assert_eq!(ParsedUrl::parse("https://example.com:443/").unwrap().port, None);
        assert_eq!(
            ParsedUrl::parse("http://example.com:8080/").unwrap().port,
            Some(8080)
        );
    }

    #[test]
    fn query_and_fragment_keep_their_delimiters() {
        let parsed = ParsedUrl::parse("https://example.com/a?b=1#frag").unwrap();
        assert_eq!(parsed.query, "?b=1");
        assert_eq!(parsed.fragment, "#frag");
        assert_eq!(parsed.path, "/a?b=1");

        let bare = ParsedUrl::parse("https://example.com/a").unwrap();
        assert_eq!(bare.query, "");
        assert_eq!(bare.fragment, "");
    }

    #[test]
    fn bare_query_and_fragment_delimiters_collapse() {
        let parsed = ParsedUrl::parse("https://example.com/a?").unwrap();
        assert_eq!(parsed.query, "");
        assert_eq!(parsed.path, "/a");
        assert_eq!(parsed.full_href, "https://example.com/a?");

        let parsed = ParsedUrl::parse("https://example.com/a#").unwrap();
        assert_eq!(parsed.fragment, "");
        assert_eq!(parsed.full_href, "https://example.com/a#");
    }

    #[test]
    fn tld_is_last_label_or_empty() {
        assert_eq!(ParsedUrl::parse("https://example.com/").unwrap().tld(), "com");
        assert_eq!(ParsedUrl::parse("http://localhost:9000/").unwrap().tld(), "");
    }

    #[test]
    fn bare_host_gains_canonical_trailing_slash() {
        let parsed = ParsedUrl::parse("https://example.com").unwrap();
        assert_eq!(parsed.full_href, "https://example.com/");
        assert_eq!(parsed.path, "/");
    }
}
