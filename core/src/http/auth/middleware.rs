//! Authentication middleware for Actix Web.

use std::rc::Rc;

use actix_service::{Service, Transform};
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::Error;
use futures_util::future::{ok, LocalBoxFuture, Ready};
use tracing::debug;

use crate::http::auth::authentication::{AuthResult, Authentication};

/// Middleware factory guarding a scope with an [`Authentication`] scheme.
///
/// Requests that pass the check reach the wrapped service untouched.
/// Rejected requests are answered with `401 Unauthorized` and the scheme's
/// `WWW-Authenticate` challenge; the wrapped service never sees them.
///
/// # Example
/// ```ignore
/// App::new().service(
///     web::scope("/api")
///         .wrap(AuthTransform::new(ApiKeyAuthentication::with_shared_store(store)))
///         .service(list_notes),
/// )
/// ```
pub struct AuthTransform<A> {
    authentication: A,
}

impl<A> AuthTransform<A> {
    /// Wraps the given authentication scheme as middleware.
    pub fn new(authentication: A) -> Self {
        AuthTransform { authentication }
    }
}

impl<S, B, A> Transform<S, ServiceRequest> for AuthTransform<A>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    A: Authentication + Clone + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthService<A, S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthService {
            authentication: self.authentication.clone(),
            service: Rc::new(service),
        })
    }
}

/// Middleware service running the authentication check on every request.
pub struct AuthService<A, S> {
    authentication: A,
    service: Rc<S>,
}

impl<A, S, B> Service<ServiceRequest> for AuthService<A, S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    A: Authentication,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.authentication.is_authenticated(&req) {
            AuthResult::Authenticated => {
                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res.map_into_left_body())
                })
            }
            AuthResult::Rejected(challenge) => {
                debug!(
                    identifier = %self.authentication.get_identifier(&req),
                    "request rejected, sending challenge"
                );
                Box::pin(async move {
                    let response = challenge.unauthorized_response().map_into_right_body();
                    Ok(req.into_response(response))
                })
            }
        }
    }
}
