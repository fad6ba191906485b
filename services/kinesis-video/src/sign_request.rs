use crate::canonical::{build_canonical_request, canonicalize_query_string};
use crate::constants::{
    ALGORITHM_AWS4_HMAC_SHA_256, AWS4_REQUEST_TYPE, SCHEME, SERVICE, X_AMZ_SIGNATURE,
};
use crate::query::{build_query_params, credential_scope};
use crate::Credential;
use kvsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use kvsign_core::time::{format_date, format_iso8601, DateTime};
use kvsign_core::{SignUrl, SigningCredential, SigningRequest};
use log::{debug, warn};
use std::fmt::Write;

/// RequestSigner that presigns Kinesis Video Streams signaling connect urls.
///
/// The signer implements the query string variant of AWS SigV4 used to
/// authenticate `ConnectAsMaster` and `ConnectAsViewer` WebSocket requests.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
/// - [Signaling WebSocket APIs](https://docs.aws.amazon.com/kinesisvideostreams-webrtc-dg/latest/devguide/kvswebrtc-websocket-apis.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,
}

impl RequestSigner {
    /// Create a new signer for the given region.
    pub fn new(region: &str) -> Self {
        Self {
            service: SERVICE.to_string(),
            region: region.to_string(),
        }
    }

    /// Presign the url with given credential at `now`.
    ///
    /// The returned url is valid for 299 seconds from `now`.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::BadUrl`](kvsign_core::ErrorKind::BadUrl) if the url has no host.
    /// - [`ErrorKind::MalformedQuery`](kvsign_core::ErrorKind::MalformedQuery) if a
    ///   query parameter doesn't contain exactly one `=`, or the query has stray `&`.
    pub fn sign(
        &self,
        url: &str,
        cred: &Credential,
        now: DateTime,
    ) -> kvsign_core::Result<String> {
        let req = SigningRequest::build(url)?;

        if !cred.is_valid() {
            warn!("signing url with an invalid credential, the signature will be rejected");
        }

        let amz_date = format_iso8601(now);
        let date_stamp = format_date(now);

        // Scope: "20230724/<region>/kinesisvideo/aws4_request"
        let scope = credential_scope(&date_stamp, &self.region, &self.service);
        debug!("calculated scope: {scope}");

        let params = build_query_params(
            req.query_str(),
            &cred.access_key_id,
            cred.session_token(),
            &scope,
            &amz_date,
        )?;

        // build canonical request and string to sign.
        let canonical_query = canonicalize_query_string(&params);
        let creq = build_canonical_request(&req, &canonical_query)?;
        let string_to_sign = string_to_sign(&creq, &amz_date, &scope)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = derive_signing_key(
            &cred.secret_access_key,
            &date_stamp,
            &self.region,
            &self.service,
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        // The signature is appended only after it's calculated over everything else.
        let signed_query = format!("{canonical_query}&{X_AMZ_SIGNATURE}={signature}");
        Ok(req.into_url(SCHEME, &signed_query))
    }
}

impl SignUrl for RequestSigner {
    type Credential = Credential;

    fn sign_url(
        &self,
        url: &str,
        credential: &Self::Credential,
        now: DateTime,
    ) -> kvsign_core::Result<String> {
        self.sign(url, credential, now)
    }
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20230724T080702Z
/// 20230724/<region>/kinesisvideo/aws4_request
/// <hashed_canonical_request>
/// ```
fn string_to_sign(
    canonical_request: &str,
    amz_date: &str,
    scope: &str,
) -> kvsign_core::Result<String> {
    let mut f = String::new();
    writeln!(f, "{ALGORITHM_AWS4_HMAC_SHA_256}")?;
    writeln!(f, "{amz_date}")?;
    writeln!(f, "{scope}")?;
    write!(f, "{}", hex_sha256(canonical_request.as_bytes()))?;
    Ok(f)
}

/// Derive the signing key scoped to date, region and service.
///
/// Each step uses the output of the previous one as the hmac key.
fn derive_signing_key(secret: &str, date_stamp: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date_stamp.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST_TYPE.as_bytes())
}
