//! Booking store queries

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::models::Appointment;

fn collection(db: &Database) -> Collection<Appointment> {
    db.collection("appointments")
}

pub async fn ensure_indexes(db: &Database) -> mongodb::error::Result<()> {
    // One booking per (barber, date, time) slot. The check is exact
    // match only; overlapping slots of different lengths are not
    // detected, by policy.
    collection(db)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "barberID": 1, "date": 1, "time": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;
    Ok(())
}

pub async fn list_by_barber(
    db: &Database,
    barber_id: &str,
) -> mongodb::error::Result<Vec<Appointment>> {
    collection(db)
        .find(doc! { "barberID": barber_id })
        .await?
        .try_collect()
        .await
}

pub async fn find_by_slot(
    db: &Database,
    barber_id: &str,
    date: &str,
    time: i32,
) -> mongodb::error::Result<Option<Appointment>> {
    collection(db)
        .find_one(doc! { "barberID": barber_id, "date": date, "time": time })
        .await
}

pub async fn insert(db: &Database, appointment: &Appointment) -> mongodb::error::Result<()> {
    collection(db).insert_one(appointment).await?;
    Ok(())
}

pub async fn delete(db: &Database, id: ObjectId) -> mongodb::error::Result<bool> {
    let result = collection(db).delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count == 1)
}
