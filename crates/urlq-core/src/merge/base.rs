//! Base URL classification, parsing, and reassembly.

use url::{Position, Url};

use super::MergeError;

/// Authority used only to resolve relative input. Never appears in output.
const RELATIVE_BASE: &str = "http://localhost/";

/// The URL whose query gets merged into.
#[derive(Debug, Clone, Copy)]
pub enum BaseUrl<'a> {
    /// Absolute (`http://`, `https://`) or relative text.
    Text(&'a str),
    /// Already parsed; always absolute.
    Parsed(&'a Url),
}

impl<'a> From<&'a str> for BaseUrl<'a> {
    fn from(s: &'a str) -> Self {
        BaseUrl::Text(s)
    }
}

impl<'a> From<&'a String> for BaseUrl<'a> {
    fn from(s: &'a String) -> Self {
        BaseUrl::Text(s.as_str())
    }
}

impl<'a> From<&'a Url> for BaseUrl<'a> {
    fn from(u: &'a Url) -> Self {
        BaseUrl::Parsed(u)
    }
}

/// True when `input` starts with `http://` or `https://`.
pub fn is_absolute(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Parsed base plus whether its output keeps the authority.
#[derive(Debug)]
pub(super) struct WorkingUrl {
    url: Url,
    absolute: bool,
}

impl WorkingUrl {
    pub(super) fn parse(base: BaseUrl<'_>) -> Result<Self, MergeError> {
        match base {
            BaseUrl::Parsed(url) => Ok(Self {
                url: url.clone(),
                absolute: true,
            }),
            BaseUrl::Text(text) if is_absolute(text) => {
                let url = Url::parse(text).map_err(|source| MergeError::InvalidAbsoluteUrl {
                    input: text.to_string(),
                    source,
                })?;
                Ok(Self {
                    url,
                    absolute: true,
                })
            }
            BaseUrl::Text(text) => {
                let url = relative_base()
                    .and_then(|base| base.join(text))
                    .map_err(|source| MergeError::InvalidRelativeUrl {
                        input: text.to_string(),
                        source,
                    })?;
                if leaves_relative_base(&url) {
                    tracing::debug!(
                        "base {:?} resolved to {}; its scheme and host are dropped from the output",
                        text,
                        &url[..Position::BeforePath]
                    );
                }
                Ok(Self {
                    url,
                    absolute: false,
                })
            }
        }
    }

    pub(super) fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// Replaces the query (dropping `?` when empty) and serializes.
    /// Relative bases come back as path + query + fragment only.
    pub(super) fn finish(mut self, query: &str) -> String {
        if query.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(query));
        }
        if self.absolute {
            self.url.into()
        } else {
            self.url[Position::BeforePath..].to_string()
        }
    }
}

fn relative_base() -> Result<Url, url::ParseError> {
    Url::parse(RELATIVE_BASE)
}

/// True when relative text carried its own scheme or authority
/// (`HTTPS://host/x`, `//host/x`, `ftp://host/x`).
fn leaves_relative_base(url: &Url) -> bool {
    url.scheme() != "http" || url.host_str() != Some("localhost") || url.port().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_prefix_is_literal() {
        assert!(is_absolute("http://a.example"));
        assert!(is_absolute("https://a.example/x"));
        assert!(!is_absolute("/path"));
        assert!(!is_absolute("HTTPS://a.example"));
        assert!(!is_absolute("ftp://a.example"));
        assert!(!is_absolute("//a.example/x"));
    }

    #[test]
    fn relative_never_leaks_synthetic_authority() {
        let w = WorkingUrl::parse(BaseUrl::Text("/a/b?x=1#frag")).unwrap();
        assert_eq!(w.query(), Some("x=1"));
        assert_eq!(w.finish("y=2"), "/a/b?y=2#frag");
    }

    #[test]
    fn empty_query_drops_question_mark() {
        let w = WorkingUrl::parse(BaseUrl::Text("https://example.com/p?x=1#f")).unwrap();
        assert_eq!(w.finish(""), "https://example.com/p#f");
    }

    #[test]
    fn malformed_absolute_is_an_error() {
        let err = WorkingUrl::parse(BaseUrl::Text("http://[::1/x")).unwrap_err();
        assert!(matches!(err, MergeError::InvalidAbsoluteUrl { .. }));
    }

    #[test]
    fn relative_path_resolves_against_root() {
        let w = WorkingUrl::parse(BaseUrl::Text("docs/../page")).unwrap();
        assert_eq!(w.finish(""), "/page");
    }

    #[test]
    fn scheme_relative_with_bad_host_is_an_error() {
        let err = WorkingUrl::parse(BaseUrl::Text("//[::1/x")).unwrap_err();
        assert!(matches!(err, MergeError::InvalidRelativeUrl { .. }));
    }

    #[test]
    fn foreign_authority_in_relative_text_is_detected() {
        let upper = WorkingUrl::parse(BaseUrl::Text("HTTPS://Host.example/x?a=1")).unwrap();
        assert!(leaves_relative_base(&upper.url));
        assert_eq!(upper.finish("a=1&k=v+w"), "/x?a=1&k=v+w");

        let scheme_relative = WorkingUrl::parse(BaseUrl::Text("//cdn.example/x")).unwrap();
        assert!(leaves_relative_base(&scheme_relative.url));

        let plain = WorkingUrl::parse(BaseUrl::Text("/x?a=1")).unwrap();
        assert!(!leaves_relative_base(&plain.url));
    }

    #[test]
    fn parsed_handle_is_absolute() {
        let url = Url::parse("https://example.com/p").unwrap();
        let w = WorkingUrl::parse(BaseUrl::from(&url)).unwrap();
        assert_eq!(w.finish("a=1"), "https://example.com/p?a=1");
    }
}
