//! Barber account endpoints: listing, multipart registration, deletion

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;
use axum_extra::extract::cookie::CookieJar;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::auth::{BarberIdentity, access_cookie, create_token};
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::{Barber, BarberView, ROLE_BARBER};
use crate::state::AppState;
use crate::storage;
use crate::util::{hash_password, to_title_case};

use super::auth::AuthResponse;

/// GET /barbers
pub async fn list_barbers(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<BarberView>>> {
    let barbers = db::barbers::list(&state.db)
        .await
        .map_err(|e| ApiError::internal("Could not get barbers.", e))?;
    Ok(Json(barbers.iter().map(BarberView::from).collect()))
}

/// Registration form, accumulated from the multipart fields
#[derive(Default)]
struct RegisterForm {
    f_name: Option<String>,
    l_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    work_weekends: Option<bool>,
    opening_hour: Option<i32>,
    closing_hour: Option<i32>,
    image: Option<(Vec<u8>, String)>,
}

impl RegisterForm {
    fn require(field: Option<String>, name: &str) -> Result<String, ApiError> {
        field
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ApiError::InvalidRequest(format!("Missing required field: {name}.")))
    }
}

async fn read_form(mut multipart: Multipart) -> Result<RegisterForm, ApiError> {
    let mut form = RegisterForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("Multipart error: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" {
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::InvalidRequest(format!("Read error: {e}")))?;
            form.image = Some((bytes.to_vec(), content_type));
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("Read error: {e}")))?;

        match name.as_str() {
            "fName" => form.f_name = Some(value),
            "lName" => form.l_name = Some(value),
            "email" => form.email = Some(value),
            "password" => form.password = Some(value),
            "workWeekends" => {
                form.work_weekends = Some(matches!(value.as_str(), "true" | "1" | "on"));
            }
            "openingHour" => form.opening_hour = value.parse().ok(),
            "closingHour" => form.closing_hour = value.parse().ok(),
            _ => {}
        }
    }

    Ok(form)
}

/// POST /barbers — multipart registration with a mandatory profile image.
///
/// Upload-then-insert, with no rollback of the uploaded image if the
/// insert fails.
pub async fn register_barber(
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Multipart,
) -> ApiResult<(StatusCode, CookieJar, Json<AuthResponse>)> {
    let form = read_form(multipart).await?;

    let f_name = to_title_case(&RegisterForm::require(form.f_name, "fName")?);
    let l_name = to_title_case(&RegisterForm::require(form.l_name, "lName")?);
    let email = RegisterForm::require(form.email, "email")?
        .trim()
        .to_lowercase();
    let password = RegisterForm::require(form.password, "password")?;
    let (image_bytes, image_mime) = form
        .image
        .ok_or_else(|| ApiError::InvalidRequest("No image provided.".into()))?;

    if image_bytes.is_empty() {
        return Err(ApiError::InvalidRequest("Empty image.".into()));
    }

    let duplicate = db::barbers::find_by_name(&state.db, &f_name, &l_name)
        .await
        .map_err(|e| ApiError::internal("Unable to add barber.", e))?;
    if duplicate.is_some() {
        return Err(ApiError::Conflict(
            "A barber with the same name already exists.".into(),
        ));
    }

    let hash = hash_password(&password)
        .map_err(|e| ApiError::internal("Unable to add barber.", e))?;

    let key = storage::random_key();
    let image_url = state
        .images
        .put(&key, image_bytes, &image_mime)
        .await
        .map_err(|e| ApiError::internal("Unable to add barber.", e))?;

    let barber = Barber {
        id: ObjectId::new(),
        f_name,
        l_name,
        email,
        password: hash,
        image_url,
        role: ROLE_BARBER.into(),
        work_weekends: form.work_weekends,
        opening_hour: form.opening_hour,
        closing_hour: form.closing_hour,
    };

    if let Err(e) = db::barbers::insert(&state.db, &barber).await {
        // A concurrent registration can slip past the pre-check; the
        // unique index is the authoritative guard.
        if db::is_duplicate_key(&e) {
            return Err(ApiError::Conflict(
                "A barber with the same name already exists.".into(),
            ));
        }
        return Err(ApiError::internal("Unable to add barber.", e));
    }

    let token = create_token(&barber.id.to_hex(), &state.jwt_secret)
        .map_err(|e| ApiError::internal("Unable to add barber.", e))?;

    tracing::info!(barber = %barber.id, "barber registered");

    let jar = jar.add(access_cookie(token.clone(), state.cookie_secure));
    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse::new("Barber added successfully", &barber, token)),
    ))
}

#[derive(Deserialize)]
pub struct DeleteBarberRequest {
    #[serde(rename = "barberId")]
    pub barber_id: String,
}

/// DELETE /barbers
pub async fn delete_barber(
    State(state): State<AppState>,
    _identity: BarberIdentity,
    WithRejection(Json(req), _): WithRejection<Json<DeleteBarberRequest>, ApiError>,
) -> ApiResult<Json<Value>> {
    let id = ObjectId::parse_str(&req.barber_id)
        .map_err(|_| ApiError::InvalidRequest("Invalid identifier.".into()))?;

    let barber = db::barbers::find_by_id(&state.db, id)
        .await
        .map_err(|e| ApiError::internal("Could not delete barber.", e))?
        .ok_or(ApiError::NotFound("Barber"))?;

    let deleted = db::barbers::delete(&state.db, id)
        .await
        .map_err(|e| ApiError::internal("Could not delete barber.", e))?;
    if !deleted {
        return Err(ApiError::NotFound("Barber"));
    }

    // Best-effort cleanup of the profile image; the barber is gone
    // either way. Services and appointments are not cascaded.
    if let Some(key) = state.images.key_from_url(&barber.image_url) {
        if let Err(e) = state.images.delete(key).await {
            tracing::warn!(error = %e, key, "failed to delete profile image");
        }
    }

    Ok(Json(json!({ "message": "Barber deleted successfully." })))
}
