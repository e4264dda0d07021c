//! fadebook — booking backend for a barbershop
//!
//! Barber accounts, a per-barber service catalog, and customer
//! appointments, stored in MongoDB with profile images in S3.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
pub mod util;

pub use config::Config;
pub use state::AppState;
