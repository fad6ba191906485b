use crate::constants::{SCHEME, X_AMZ_CHANNEL_ARN, X_AMZ_CLIENT_ID};
use crate::query::uri_encode;
use kvsign_core::{Error, Result, SigningRequest};
use std::fmt::{Display, Formatter};

/// Role of a client connecting to a signaling channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalingRole {
    /// `ConnectAsMaster`, the channel owner. One per channel.
    Master,
    /// `ConnectAsViewer`, identified by a client id.
    Viewer,
}

impl Display for SignalingRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalingRole::Master => write!(f, "MASTER"),
            SignalingRole::Viewer => write!(f, "VIEWER"),
        }
    }
}

/// Builder for the unsigned connect url of a signaling channel.
///
/// ```
/// use kvsign_kinesis_video::{ConnectUrl, SignalingRole};
///
/// # fn main() -> kvsign_core::Result<()> {
/// let url = ConnectUrl::new(
///     "wss://v-a1b2c3d4.kinesisvideo.us-west-2.amazonaws.com",
///     "arn:aws:kinesisvideo:us-west-2:123456789012:channel/demo-channel/1234567890123",
/// )
/// .with_client_id("viewer-1")
/// .build(SignalingRole::Viewer)?;
///
/// assert!(url.ends_with("&X-Amz-ClientId=viewer-1"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConnectUrl {
    endpoint: String,
    channel_arn: String,
    client_id: Option<String>,
}

impl ConnectUrl {
    /// Create a builder for the given signaling endpoint and channel arn.
    ///
    /// The endpoint is the `WSS` endpoint returned by `GetSignalingChannelEndpoint`.
    pub fn new(endpoint: &str, channel_arn: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            channel_arn: channel_arn.to_string(),
            client_id: None,
        }
    }

    /// Set the client id, required by viewers and ignored for masters.
    pub fn with_client_id(mut self, client_id: &str) -> Self {
        self.client_id = Some(client_id.to_string());
        self
    }

    /// Build the connect url for the given role.
    pub fn build(&self, role: SignalingRole) -> Result<String> {
        if self.channel_arn.is_empty() {
            return Err(Error::request_invalid("channel arn is required"));
        }

        let endpoint = if self.endpoint.contains("://") {
            self.endpoint.clone()
        } else {
            format!("{SCHEME}://{}", self.endpoint)
        };

        let req = SigningRequest::build(&endpoint)?;
        if req.query.is_some() {
            return Err(Error::request_invalid(
                "signaling endpoint must not carry a query",
            ));
        }

        let mut url = format!(
            "{endpoint}?{X_AMZ_CHANNEL_ARN}={}",
            uri_encode(&self.channel_arn)
        );

        if role == SignalingRole::Viewer {
            let client_id = match self.client_id.as_deref() {
                Some(v) if !v.is_empty() => v,
                _ => {
                    return Err(Error::request_invalid(format!(
                        "client id is required for role {role}"
                    )))
                }
            };
            url.push('&');
            url.push_str(X_AMZ_CLIENT_ID);
            url.push('=');
            url.push_str(&uri_encode(client_id));
        }

        Ok(url)
    }
}
