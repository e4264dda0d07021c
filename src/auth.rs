//! Access token issuance and verification
//!
//! Tokens are HS256-signed claims carrying only the barber identifier,
//! with no expiry claim; the only expiry is the client-side max-age of
//! the `access_token` cookie, which the server does not enforce.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

const COOKIE_MAX_AGE_MINUTES: i64 = 15;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Barber identifier (hex ObjectId)
    pub sub: String,
}

/// Authenticated barber, extracted from the access token
#[derive(Debug, Clone)]
pub struct BarberIdentity {
    pub barber_id: String,
}

pub fn create_token(barber_id: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: barber_id.to_string(),
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token and return the barber identifier it is bound to
pub fn verify_token(token: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Tokens are issued without an exp claim
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims.sub)
}

/// Build the `access_token` cookie: HTTP-only, 15-minute client-side
/// expiry, Secure unless disabled for local development
pub fn access_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .max_age(time::Duration::minutes(COOKIE_MAX_AGE_MINUTES))
        .build()
}

/// Extractor for handlers that require a logged-in barber.
///
/// Accepts the token from the `access_token` cookie or from an
/// `Authorization: Bearer` header.
impl FromRequestParts<AppState> for BarberIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthorized)?;

        let bearer = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_string);

        let token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .or(bearer)
            .ok_or(ApiError::Unauthorized)?;

        let barber_id = verify_token(&token, &state.jwt_secret).map_err(|e| {
            tracing::debug!(error = %e, "access token rejected");
            ApiError::Unauthorized
        })?;

        Ok(BarberIdentity { barber_id })
    }
}
