//! Appointment booking endpoints

use axum::Json;
use axum::extract::{Query, State};
use axum_extra::extract::WithRejection;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::auth::BarberIdentity;
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::{Appointment, AppointmentView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListAppointmentsQuery {
    #[serde(rename = "barberId")]
    pub barber_id: String,
}

/// GET /appointments
pub async fn list_appointments(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ListAppointmentsQuery>, ApiError>,
) -> ApiResult<Json<Vec<AppointmentView>>> {
    let appointments = db::appointments::list_by_barber(&state.db, &query.barber_id)
        .await
        .map_err(|e| ApiError::internal("Error getting appointments.", e))?;
    Ok(Json(appointments.iter().map(AppointmentView::from).collect()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[serde(rename = "barberID")]
    pub barber_id: String,
    pub customer_f_name: String,
    pub customer_l_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(rename = "serviceID")]
    pub service_id: String,
    pub service_title: String,
    pub service_length: String,
    pub service_price: f64,
    pub date: String,
    pub time: i32,
}

/// POST /appointments — books a slot, rejecting an exact
/// (barber, date, time) collision. Adjacent overlapping slots are not
/// detected, by policy.
pub async fn create_appointment(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateAppointmentRequest>, ApiError>,
) -> ApiResult<Json<Value>> {
    let taken = db::appointments::find_by_slot(&state.db, &req.barber_id, &req.date, req.time)
        .await
        .map_err(|e| ApiError::internal("Could not book appointment.", e))?;
    if taken.is_some() {
        return Err(ApiError::Conflict("This time slot is already booked.".into()));
    }

    let appointment = Appointment {
        id: ObjectId::new(),
        barber_id: req.barber_id,
        customer_f_name: req.customer_f_name,
        customer_l_name: req.customer_l_name,
        customer_email: req.customer_email,
        customer_phone: req.customer_phone,
        service_id: req.service_id,
        service_title: req.service_title,
        service_length: req.service_length,
        service_price: req.service_price,
        date: req.date,
        time: req.time,
    };

    if let Err(e) = db::appointments::insert(&state.db, &appointment).await {
        if db::is_duplicate_key(&e) {
            return Err(ApiError::Conflict("This time slot is already booked.".into()));
        }
        return Err(ApiError::internal("Could not book appointment.", e));
    }

    Ok(Json(json!({ "message": "Appointment booked successfully." })))
}

#[derive(Deserialize)]
pub struct DeleteAppointmentRequest {
    #[serde(rename = "appointmentId")]
    pub appointment_id: String,
}

/// DELETE /appointments
pub async fn delete_appointment(
    State(state): State<AppState>,
    _identity: BarberIdentity,
    WithRejection(Json(req), _): WithRejection<Json<DeleteAppointmentRequest>, ApiError>,
) -> ApiResult<Json<Value>> {
    let id = ObjectId::parse_str(&req.appointment_id)
        .map_err(|_| ApiError::InvalidRequest("Invalid identifier.".into()))?;

    let deleted = db::appointments::delete(&state.db, id)
        .await
        .map_err(|e| ApiError::internal("Could not delete appointment.", e))?;
    if !deleted {
        return Err(ApiError::NotFound("Appointment"));
    }

    Ok(Json(json!({ "message": "Appointment deleted successfully." })))
}
