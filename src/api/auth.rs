//! Login endpoint

use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::auth::{access_cookie, create_token};
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::Barber;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body returned by login and registration: the barber's public fields
/// plus the freshly issued token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub role: String,
    pub access_token: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_weekends: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hour: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_hour: Option<i32>,
}

impl AuthResponse {
    pub fn new(message: &str, barber: &Barber, token: String) -> Self {
        Self {
            message: message.to_string(),
            role: barber.role.clone(),
            access_token: token,
            id: barber.id.to_hex(),
            f_name: barber.f_name.clone(),
            l_name: barber.l_name.clone(),
            email: barber.email.clone(),
            work_weekends: barber.work_weekends,
            opening_hour: barber.opening_hour,
            closing_hour: barber.closing_hour,
        }
    }
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, ApiError>,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    let email = req.email.trim().to_lowercase();

    let barber = db::barbers::find_by_email(&state.db, &email)
        .await
        .map_err(|e| ApiError::internal("Error logging in.", e))?
        .ok_or(ApiError::NotFound("User"))?;

    if !crate::util::verify_password(&req.password, &barber.password) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(&barber.id.to_hex(), &state.jwt_secret)
        .map_err(|e| ApiError::internal("Error logging in.", e))?;

    let jar = jar.add(access_cookie(token.clone(), state.cookie_secure));
    Ok((
        jar,
        Json(AuthResponse::new("Login successful", &barber, token)),
    ))
}
