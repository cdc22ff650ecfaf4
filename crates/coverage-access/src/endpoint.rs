//! Endpoint scheme classification.
//!
//! Dataset references arrive as opaque strings with a recognizable scheme
//! prefix. Classification happens once, into a closed set of schemes, so
//! resolution can match exhaustively; adding a scheme is a change here,
//! not in an open-ended prefix chain.

/// Scheme prefix of the remote feature-dataset protocol.
pub const REMOTE_SCHEME: &str = "cdmrFeature:";

/// The scheme an endpoint string resolves under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointScheme {
    /// Remote feature-dataset protocol; prefix stripped before delegation.
    Remote,
    /// Plain HTTP; the full endpoint is passed through unchanged.
    Http,
    /// Explicit local file; prefix stripped, remainder is a path.
    File,
    /// No recognized prefix; treated directly as a local path.
    Local,
}

impl EndpointScheme {
    /// Classify an endpoint and return the string to hand to the matching
    /// opener (prefix stripped for [`Remote`](Self::Remote) and
    /// [`File`](Self::File), untouched otherwise).
    ///
    /// Prefixes are checked in fixed order; the remote scheme wins over
    /// the bare `http:` check even though both can front a URL.
    pub fn classify(endpoint: &str) -> (EndpointScheme, &str) {
        if let Some(rest) = endpoint.strip_prefix(REMOTE_SCHEME) {
            (EndpointScheme::Remote, rest)
        } else if endpoint.starts_with("http:") {
            (EndpointScheme::Http, endpoint)
        } else if let Some(rest) = endpoint.strip_prefix("file:") {
            (EndpointScheme::File, rest)
        } else {
            (EndpointScheme::Local, endpoint)
        }
    }
}
