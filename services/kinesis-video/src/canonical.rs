use crate::constants::{METHOD, SIGNED_HEADERS};
use kvsign_core::hash::EMPTY_STRING_SHA256;
use kvsign_core::SigningRequest;
use std::fmt::Write;

/// Sort query parameters by name.
///
/// The sort is stable: parameters sharing the same name keep their relative
/// order, values are never compared.
pub(crate) fn sort_query_params(params: &[(String, String)]) -> Vec<(String, String)> {
    let mut sorted = params.to_vec();
    sorted.sort_by(|(l, _), (r, _)| l.cmp(r));
    sorted
}

/// Build the canonical query string.
///
/// ```shell
/// [(b, 2), (a, 1)] => "a=1&b=2"
/// ```
pub(crate) fn canonicalize_query_string(params: &[(String, String)]) -> String {
    sort_query_params(params)
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the canonical request.
///
/// ```text
/// GET
/// /
/// X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-ChannelARN=...&X-Amz-SignedHeaders=host
/// host:v-a1b2c3d4.kinesisvideo.us-west-2.amazonaws.com
///
/// host
/// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// ```
///
/// `host` is the only signed header, and the payload of a presigned `GET` is
/// always empty.
pub(crate) fn build_canonical_request(
    req: &SigningRequest,
    canonical_query_string: &str,
) -> kvsign_core::Result<String> {
    // Fits requests that carry a session token.
    let mut f = String::with_capacity(512);

    writeln!(f, "{METHOD}")?;
    writeln!(f, "{}", req.canonical_uri())?;
    writeln!(f, "{canonical_query_string}")?;
    // Canonical headers, each of them ends with a new line.
    writeln!(f, "host:{}", req.host)?;
    writeln!(f)?;
    writeln!(f, "{SIGNED_HEADERS}")?;
    write!(f, "{EMPTY_STRING_SHA256}")?;

    Ok(f)
}
