//! Core authentication contract shared by every scheme.

use actix_web::dev::ServiceRequest;
use actix_web::http::header;

use crate::http::auth::challenge::Challenge;

/// Placeholder used in client identifiers when the peer address is unknown.
pub const NO_ADDR: &str = "noaddr";
/// Placeholder used in client identifiers when the `Host` header is absent.
pub const NO_HOST: &str = "nohost";

/// Outcome of an authentication check.
///
/// A request either passes or is rejected with the [`Challenge`] to advertise
/// in the `401` response. Every failure cause maps to the same rejected shape
/// so callers cannot distinguish an unknown username from a wrong secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthResult {
    /// The request may proceed to the protected resource.
    Authenticated,
    /// The request must be answered with `401 Unauthorized` carrying the
    /// challenge in a `WWW-Authenticate` header.
    Rejected(Challenge),
}

impl AuthResult {
    /// Returns true if the request passed authentication.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthResult::Authenticated)
    }

    /// Returns true if the request was rejected.
    pub fn is_rejected(&self) -> bool {
        !self.is_authenticated()
    }

    /// Returns the challenge to send back, if the request was rejected.
    pub fn challenge(&self) -> Option<&Challenge> {
        match self {
            AuthResult::Authenticated => None,
            AuthResult::Rejected(challenge) => Some(challenge),
        }
    }
}

/// An authentication scheme.
///
/// Implementations inspect the incoming request (headers, query string, peer
/// address) and decide whether it carries acceptable credentials. Checks are
/// stateless with respect to the request: calling [`is_authenticated`] twice
/// on the same request yields the same result.
///
/// [`is_authenticated`]: Authentication::is_authenticated
pub trait Authentication {
    /// Checks the request's credentials.
    fn is_authenticated(&self, req: &ServiceRequest) -> AuthResult;

    /// Derives a stable identifier for the requesting client, suitable for
    /// logging and throttling keys.
    ///
    /// The identifier joins the peer IP address and the `Host` header with an
    /// underscore, substituting `noaddr` and `nohost` for missing parts. A
    /// request with no connection metadata at all therefore yields
    /// `noaddr_nohost`.
    fn get_identifier(&self, req: &ServiceRequest) -> String {
        let addr = req
            .peer_addr()
            .map(|peer| peer.ip().to_string())
            .unwrap_or_else(|| NO_ADDR.to_string());
        let host = req
            .headers()
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(NO_HOST);
        format!("{}_{}", addr, host)
    }
}

/// Authentication scheme that lets every request through.
///
/// This is the default when a resource requires no credentials. It never
/// rejects, regardless of what the request carries.
///
/// # Example
/// ```
/// use actix_apiauth_core::http::auth::{Authentication, NoOpAuthentication};
/// use actix_web::test::TestRequest;
///
/// let auth = NoOpAuthentication;
/// let req = TestRequest::default().to_srv_request();
/// assert!(auth.is_authenticated(&req).is_authenticated());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpAuthentication;

impl Authentication for NoOpAuthentication {
    fn is_authenticated(&self, _req: &ServiceRequest) -> AuthResult {
        AuthResult::Authenticated
    }
}
