//! Identity store queries

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::models::Barber;

fn collection(db: &Database) -> Collection<Barber> {
    db.collection("barbers")
}

pub async fn ensure_indexes(db: &Database) -> mongodb::error::Result<()> {
    collection(db)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "fName": 1, "lName": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;
    Ok(())
}

pub async fn list(db: &Database) -> mongodb::error::Result<Vec<Barber>> {
    collection(db).find(doc! {}).await?.try_collect().await
}

pub async fn find_by_email(db: &Database, email: &str) -> mongodb::error::Result<Option<Barber>> {
    collection(db).find_one(doc! { "email": email }).await
}

/// Lookup by the (fName, lName) pair used for the duplicate check
pub async fn find_by_name(
    db: &Database,
    f_name: &str,
    l_name: &str,
) -> mongodb::error::Result<Option<Barber>> {
    collection(db)
        .find_one(doc! { "fName": f_name, "lName": l_name })
        .await
}

pub async fn find_by_id(db: &Database, id: ObjectId) -> mongodb::error::Result<Option<Barber>> {
    collection(db).find_one(doc! { "_id": id }).await
}

pub async fn insert(db: &Database, barber: &Barber) -> mongodb::error::Result<()> {
    collection(db).insert_one(barber).await?;
    Ok(())
}

/// Returns whether a document was actually removed
pub async fn delete(db: &Database, id: ObjectId) -> mongodb::error::Result<bool> {
    let result = collection(db).delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count == 1)
}
