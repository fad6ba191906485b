use crate::constants::{
    ALGORITHM_AWS4_HMAC_SHA_256, AWS4_REQUEST_TYPE, AWS_QUERY_ENCODE_SET, EXPIRES_IN,
    SIGNED_HEADERS, X_AMZ_ALGORITHM, X_AMZ_CREDENTIAL, X_AMZ_DATE, X_AMZ_EXPIRES,
    X_AMZ_SECURITY_TOKEN, X_AMZ_SIGNED_HEADERS,
};
use kvsign_core::{Error, Result};
use percent_encoding::{percent_decode_str, percent_encode, utf8_percent_encode};

/// Percent encode input the way AWS expects query values to be encoded.
///
/// Everything except `A-Za-z0-9-._~` is encoded as uppercase `%XX`.
pub fn uri_encode(s: &str) -> String {
    utf8_percent_encode(s, &AWS_QUERY_ENCODE_SET).to_string()
}

/// Decode percent encoded input.
///
/// `+` is kept as is instead of being turned into a space. Invalid UTF-8 is
/// replaced with `U+FFFD`.
pub fn uri_decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Decode then encode a raw query value.
///
/// Works on bytes so that escapes of non UTF-8 bytes survive untouched.
fn reencode(raw: &str) -> String {
    let bytes: Vec<u8> = percent_decode_str(raw).collect();
    percent_encode(&bytes, &AWS_QUERY_ENCODE_SET).to_string()
}

/// Build the credential scope: `20230724/us-west-2/kinesisvideo/aws4_request`
pub(crate) fn credential_scope(date_stamp: &str, region: &str, service: &str) -> String {
    format!("{date_stamp}/{region}/{service}/{AWS4_REQUEST_TYPE}")
}

/// Build all query parameters that take part in signing.
///
/// The mandatory parameters come first, then the security token if present,
/// then the parameters already carried by `query` in their original order.
/// All values are percent encoded, names are kept as is.
///
/// The returned list is not sorted.
pub(crate) fn build_query_params(
    query: &str,
    access_key: &str,
    session_token: Option<&str>,
    scope: &str,
    amz_date: &str,
) -> Result<Vec<(String, String)>> {
    let mut params = vec![
        (
            X_AMZ_ALGORITHM.to_string(),
            ALGORITHM_AWS4_HMAC_SHA_256.to_string(),
        ),
        (
            X_AMZ_CREDENTIAL.to_string(),
            uri_encode(&format!("{access_key}/{scope}")),
        ),
        // amz date only contains url safe characters.
        (X_AMZ_DATE.to_string(), amz_date.to_string()),
        (X_AMZ_EXPIRES.to_string(), EXPIRES_IN.to_string()),
        (X_AMZ_SIGNED_HEADERS.to_string(), SIGNED_HEADERS.to_string()),
    ];

    if let Some(token) = session_token.filter(|v| !v.is_empty()) {
        params.push((X_AMZ_SECURITY_TOKEN.to_string(), uri_encode(token)));
    }

    params.extend(parse_query(query)?);
    Ok(params)
}

/// Parse a raw query string like `key1=val1&key2=val2`.
///
/// Every parameter must contain exactly one `=`. Empty parameters caused by
/// stray `&` are rejected.
fn parse_query(query: &str) -> Result<Vec<(String, String)>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let params: Vec<&str> = query.split('&').collect();
    if params.iter().any(|v| v.is_empty()) {
        return Err(Error::malformed_query(
            "malformed query string: empty parameter caused by stray `&`",
        ));
    }

    params
        .into_iter()
        .map(|param| {
            let mut pair = param.split('=');
            match (pair.next(), pair.next(), pair.next()) {
                (Some(k), Some(v), None) => Ok((k.to_string(), reencode(v))),
                _ => Err(Error::malformed_query(format!(
                    "malformed query parameter: {param}"
                ))),
            }
        })
        .collect()
}
