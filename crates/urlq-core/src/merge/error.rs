//! Error type for URL merging.

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The base starts with `http://` or `https://` but does not parse.
    #[error("invalid absolute URL {input:?}: {source}")]
    InvalidAbsoluteUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    /// Relative text that cannot be resolved even against the synthetic
    /// base (only a scheme-relative `//host` with a malformed host).
    #[error("invalid relative URL {input:?}: {source}")]
    InvalidRelativeUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
