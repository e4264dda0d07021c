//! Catalog store queries

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::models::Service;

fn collection(db: &Database) -> Collection<Service> {
    db.collection("services")
}

pub async fn ensure_indexes(db: &Database) -> mongodb::error::Result<()> {
    // Titles are unique per barber, not globally
    collection(db)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "barberID": 1, "title": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;
    Ok(())
}

pub async fn list_by_barber(
    db: &Database,
    barber_id: &str,
) -> mongodb::error::Result<Vec<Service>> {
    collection(db)
        .find(doc! { "barberID": barber_id })
        .await?
        .try_collect()
        .await
}

pub async fn find_by_title(
    db: &Database,
    barber_id: &str,
    title: &str,
) -> mongodb::error::Result<Option<Service>> {
    collection(db)
        .find_one(doc! { "barberID": barber_id, "title": title })
        .await
}

pub async fn insert(db: &Database, service: &Service) -> mongodb::error::Result<()> {
    collection(db).insert_one(service).await?;
    Ok(())
}

pub async fn delete(db: &Database, id: ObjectId) -> mongodb::error::Result<bool> {
    let result = collection(db).delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count == 1)
}
