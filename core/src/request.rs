use crate::{Error, Result};
use http::Uri;
use std::str::FromStr;

/// Signing context for a url to presign.
///
/// Only the parts of the url that take part in signing are kept: the host
/// (without port), the raw path and the raw query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    /// Host of the url, without port.
    pub host: String,
    /// Raw path of the url, `/` if the url has none.
    pub path: String,
    /// Raw query string of the url, without the leading `?`.
    pub query: Option<String>,
}

impl SigningRequest {
    /// Build a signing context from a url string.
    pub fn build(url: &str) -> Result<Self> {
        let uri = Uri::from_str(url)?;
        Self::from_uri(&uri)
    }

    /// Build a signing context from a parsed uri.
    pub fn from_uri(uri: &Uri) -> Result<Self> {
        let host = match uri.host() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(Error::bad_url("a url with a host is required")),
        };

        let path = match uri.path() {
            "" => "/".to_string(),
            v => v.to_string(),
        };

        Ok(SigningRequest {
            host,
            path,
            query: uri.query().map(|v| v.to_string()),
        })
    }

    /// Get the canonical uri, which is the path or `/` if it's empty.
    #[inline]
    pub fn canonical_uri(&self) -> &str {
        &self.path
    }

    /// Get the raw query string, empty if the url has no query.
    #[inline]
    pub fn query_str(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }

    /// Consume the signing context and build the presigned url.
    ///
    /// ```shell
    /// (wss, host, /, a=b) => "wss://host/?a=b"
    /// (wss, host, /path, a=b) => "wss://host/path/?a=b"
    /// ```
    pub fn into_url(self, scheme: &str, query: &str) -> String {
        let path = self.path.trim_end_matches('/');

        let mut s = String::with_capacity(
            scheme.len() + self.host.len() + path.len() + query.len() + 5,
        );
        s.push_str(scheme);
        s.push_str("://");
        s.push_str(&self.host);
        s.push_str(path);
        s.push_str("/?");
        s.push_str(query);
        s
    }
}
