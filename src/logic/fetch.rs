//! Typed reads: fetch documents and decode them into their record types.

use crate::error::FeedError;
use crate::store::{Document, DocumentStore, Filter, Record};

pub(crate) fn decode<R: Record>(doc: Document) -> Result<R, FeedError> {
    let Document { id, data } = doc;
    match serde_json::from_value::<R>(data) {
        Ok(mut record) => {
            record.assign_id(id);
            Ok(record)
        }
        Err(source) => Err(FeedError::Decode {
            collection: R::COLLECTION,
            id,
            source,
        }),
    }
}

pub(crate) async fn fetch_by_id<R: Record>(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<Option<R>, FeedError> {
    store.get(R::COLLECTION, id).await?.map(decode).transpose()
}

pub(crate) async fn fetch_all<R: Record>(store: &dyn DocumentStore) -> Result<Vec<R>, FeedError> {
    store
        .get_all(R::COLLECTION)
        .await?
        .into_iter()
        .map(decode)
        .collect()
}

pub(crate) async fn fetch_where<R: Record>(
    store: &dyn DocumentStore,
    filters: &[Filter],
) -> Result<Vec<R>, FeedError> {
    store
        .query(R::COLLECTION, filters)
        .await?
        .into_iter()
        .map(decode)
        .collect()
}
