//! Authentication failure taxonomy.

use derive_more::{Display, Error};

/// Why a request failed an authentication check.
///
/// Every variant folds into the same [`Rejected`] outcome carrying the same
/// challenge, so the response shape never reveals which of these occurred.
/// The distinction exists for trace logging only.
///
/// [`Rejected`]: crate::http::auth::AuthResult::Rejected
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum AuthFailure {
    /// No credentials were present on the request.
    #[display("credentials missing")]
    MissingCredential,

    /// Credential data was present but unparsable (bad base64, missing
    /// colon, wrong token count).
    #[display("credentials malformed")]
    MalformedCredential,

    /// No identity record matches the supplied username.
    #[display("unknown identity")]
    UnknownIdentity,

    /// The identity exists but the supplied secret does not match.
    #[display("verification failed")]
    VerificationFailure,
}
