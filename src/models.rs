//! Document models and their public views
//!
//! The document structs map 1:1 onto MongoDB collections and keep the
//! wire field names of the original frontend (`fName`, `barberID`,
//! `imageURL`, ...). The `*View` structs are what the API serializes
//! out: identifiers become plain hex strings and the password hash is
//! never included.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const ROLE_BARBER: &str = "Barber";

/// A barber account: identity plus optional schedule configuration.
///
/// The schedule fields are optional so that accounts created before
/// working hours existed still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    /// bcrypt hash, never the plaintext
    pub password: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_weekends: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hour: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_hour: Option<i32>,
}

/// Public fields of a barber, as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarberView {
    #[serde(rename = "_id")]
    pub id: String,
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_weekends: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hour: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_hour: Option<i32>,
}

impl From<&Barber> for BarberView {
    fn from(b: &Barber) -> Self {
        Self {
            id: b.id.to_hex(),
            f_name: b.f_name.clone(),
            l_name: b.l_name.clone(),
            email: b.email.clone(),
            image_url: b.image_url.clone(),
            role: b.role.clone(),
            work_weekends: b.work_weekends,
            opening_hour: b.opening_hour,
            closing_hour: b.closing_hour,
        }
    }
}

/// A service offering owned by exactly one barber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "barberID")]
    pub barber_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceView {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "barberID")]
    pub barber_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    pub description: String,
    pub price: f64,
}

impl From<&Service> for ServiceView {
    fn from(s: &Service) -> Self {
        Self {
            id: s.id.to_hex(),
            barber_id: s.barber_id.clone(),
            title: s.title.clone(),
            length: s.length.clone(),
            description: s.description.clone(),
            price: s.price,
        }
    }
}

/// A reservation of a time slot, with the service details snapshotted
/// at booking time so later catalog edits do not rewrite history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
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
    /// Calendar day, as sent by the frontend (e.g. "2024-01-01")
    pub date: String,
    /// Time slot within the day (e.g. 900)
    pub time: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    #[serde(rename = "_id")]
    pub id: String,
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

impl From<&Appointment> for AppointmentView {
    fn from(a: &Appointment) -> Self {
        Self {
            id: a.id.to_hex(),
            barber_id: a.barber_id.clone(),
            customer_f_name: a.customer_f_name.clone(),
            customer_l_name: a.customer_l_name.clone(),
            customer_email: a.customer_email.clone(),
            customer_phone: a.customer_phone.clone(),
            service_id: a.service_id.clone(),
            service_title: a.service_title.clone(),
            service_length: a.service_length.clone(),
            service_price: a.service_price,
            date: a.date.clone(),
            time: a.time,
        }
    }
}
