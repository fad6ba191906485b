use crate::time::DateTime;
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the signing credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(ctx) = self else {
            return false;
        };

        ctx.is_valid()
    }
}

/// SignUrl is the trait used by services to presign a url.
///
/// Presigning is a pure computation: implementations must not perform any
/// I/O, read the clock or keep state between calls. The caller passes in the
/// signing time, which makes the output fully determined by the input.
pub trait SignUrl: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Presign the url.
    ///
    /// ## Credential
    ///
    /// The `credential` parameter is only borrowed for the duration of the
    /// call and must never be logged or retained.
    ///
    /// ## Now
    ///
    /// The `now` parameter is the signing time. Services that embed an expiry
    /// into the url count it from this instant.
    fn sign_url(
        &self,
        url: &str,
        credential: &Self::Credential,
        now: DateTime,
    ) -> crate::Result<String>;
}
