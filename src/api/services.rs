//! Service catalog endpoints

use axum::Json;
use axum::extract::{Query, State};
use axum_extra::extract::WithRejection;
use axum::http::StatusCode;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::auth::BarberIdentity;
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::{Service, ServiceView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListServicesQuery {
    /// Owning barber identifier
    #[serde(rename = "_id")]
    pub barber_id: String,
}

/// GET /service — responds 201 on success, a quirk preserved for wire
/// compatibility with the original frontend
pub async fn list_services(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ListServicesQuery>, ApiError>,
) -> ApiResult<(StatusCode, Json<Vec<ServiceView>>)> {
    let services = db::services::list_by_barber(&state.db, &query.barber_id)
        .await
        .map_err(|e| ApiError::internal("Error getting services.", e))?;
    Ok((
        StatusCode::CREATED,
        Json(services.iter().map(ServiceView::from).collect()),
    ))
}

#[derive(Deserialize)]
pub struct CreateServiceRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub length: Option<String>,
    #[serde(rename = "barberID")]
    pub barber_id: String,
}

/// POST /service
pub async fn create_service(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateServiceRequest>, ApiError>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let duplicate = db::services::find_by_title(&state.db, &req.barber_id, &req.title)
        .await
        .map_err(|e| ApiError::internal("Could not create service.", e))?;
    if duplicate.is_some() {
        return Err(ApiError::Conflict(
            "A service with the same title already exists.".into(),
        ));
    }

    let service = Service {
        id: ObjectId::new(),
        barber_id: req.barber_id,
        title: req.title,
        length: req.length,
        description: req.description,
        price: req.price,
    };

    if let Err(e) = db::services::insert(&state.db, &service).await {
        if db::is_duplicate_key(&e) {
            return Err(ApiError::Conflict(
                "A service with the same title already exists.".into(),
            ));
        }
        return Err(ApiError::internal("Could not create service.", e));
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Service created successfully.",
            "_id": service.id.to_hex(),
            "title": service.title,
        })),
    ))
}

#[derive(Deserialize)]
pub struct DeleteServiceRequest {
    #[serde(rename = "serviceID")]
    pub service_id: String,
}

/// DELETE /service
pub async fn delete_service(
    State(state): State<AppState>,
    _identity: BarberIdentity,
    WithRejection(Json(req), _): WithRejection<Json<DeleteServiceRequest>, ApiError>,
) -> ApiResult<Json<Value>> {
    let id = ObjectId::parse_str(&req.service_id)
        .map_err(|_| ApiError::InvalidRequest("Invalid identifier.".into()))?;

    let deleted = db::services::delete(&state.db, id)
        .await
        .map_err(|e| ApiError::internal("Could not delete service.", e))?;
    if !deleted {
        return Err(ApiError::NotFound("Service"));
    }

    Ok(Json(json!({ "message": "Service deleted successfully." })))
}
