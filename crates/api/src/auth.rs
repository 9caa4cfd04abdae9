//! Bearer credential extraction.
//!
//! The application never parses or validates the credential -- it is an
//! opaque session token forwarded verbatim to the store, which owns
//! authentication. This extractor only lifts the raw `Authorization`
//! header value out of the request.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// The raw `Authorization` header value, if any.
///
/// Use this as an extractor parameter in any handler that talks to the
/// store on the caller's behalf:
///
/// ```ignore
/// async fn my_handler(bearer: Bearer, State(state): State<AppState>) -> AppResult<Json<()>> {
///     state.store.current_user(bearer.token()).await?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Bearer(pub Option<String>);

impl Bearer {
    /// The header value as a borrowed credential for store calls.
    pub fn token(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Bearer(
            parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string()),
        ))
    }
}
