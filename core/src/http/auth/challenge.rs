//! Challenge data attached to rejected authentication outcomes.

use actix_web::http::header;
use actix_web::HttpResponse;

/// Realm advertised by the built-in authenticators unless overridden.
pub const DEFAULT_REALM: &str = "actix-apiauth";

/// Tells a caller how to ask the client to re-authenticate.
///
/// A challenge names the credential scheme and the protected realm. Callers
/// inspect it to build a `WWW-Authenticate` header on a `401` response, or use
/// [`unauthorized_response`](Challenge::unauthorized_response) to get that
/// response pre-built.
///
/// # Example
/// ```
/// use actix_apiauth_core::http::auth::Challenge;
///
/// let challenge = Challenge::basic("my-api");
/// assert_eq!(challenge.www_authenticate_header(), "Basic Realm=\"my-api\"");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    scheme: String,
    realm: String,
}

impl Challenge {
    /// Creates a challenge for an arbitrary scheme.
    pub fn new(scheme: impl Into<String>, realm: impl Into<String>) -> Self {
        Challenge {
            scheme: scheme.into(),
            realm: realm.into(),
        }
    }

    /// Creates an HTTP Basic challenge.
    pub fn basic(realm: impl Into<String>) -> Self {
        Self::new("Basic", realm)
    }

    /// Creates an API-key challenge.
    ///
    /// The scheme has no interactive password-prompt semantics; it exists so
    /// the `401` still names the credential scheme the endpoint expects.
    pub fn api_key(realm: impl Into<String>) -> Self {
        Self::new("ApiKey", realm)
    }

    /// Returns the credential scheme name.
    pub fn get_scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the realm label.
    pub fn get_realm(&self) -> &str {
        &self.realm
    }

    /// Creates the `WWW-Authenticate` header value, e.g. `Basic Realm="my-api"`.
    pub fn www_authenticate_header(&self) -> String {
        format!("{} Realm=\"{}\"", self.scheme, self.realm)
    }

    /// Builds the minimal `401 Unauthorized` response carrying this challenge.
    pub fn unauthorized_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized()
            .append_header((header::WWW_AUTHENTICATE, self.www_authenticate_header()))
            .finish()
    }
}
