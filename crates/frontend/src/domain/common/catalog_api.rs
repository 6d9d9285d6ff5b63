use crate::shared::api_utils::{get_json, post_json_body, put_json_body};
use contracts::domain::common::{saved_record, CatalogRecord};
use contracts::shared::api::{catalog_item_path, catalog_path};
use contracts::shared::error::ApiError;
use contracts::shared::list::{FormMode, LookupResolver, LookupTable, Submission};
use serde_json::Value;

/// `GET /{collection}/{empresa}`
pub async fn fetch_catalog<T: CatalogRecord>(empresa: &str) -> Result<Vec<T>, ApiError> {
    get_json(&catalog_path(T::collection_name(), empresa)).await
}

/// Loads every lookup collection `T` joins against
pub async fn fetch_lookups<T: CatalogRecord>(empresa: &str) -> Result<LookupResolver, ApiError> {
    let mut resolver = LookupResolver::new();
    for spec in T::lookups() {
        let records: Vec<Value> = get_json(&catalog_path(spec.collection, empresa)).await?;
        log::debug!("{}: lookup {} with {} records", T::full_name(), spec.collection, records.len());
        resolver = resolver.with_spec(spec, LookupTable::from_json(&records, spec.key_field));
    }
    Ok(resolver)
}

/// Creates or updates the draft and returns the record as the backend stored it
pub async fn save<T: CatalogRecord>(empresa: &str, submission: &Submission<T>) -> Result<T, ApiError> {
    let collection = T::collection_name();
    let body = match submission.mode {
        FormMode::Create => post_json_body(&catalog_path(collection, empresa), &submission.draft).await?,
        FormMode::Edit(key) => {
            put_json_body(&catalog_item_path(collection, empresa, key), &submission.draft).await?
        }
    };
    saved_record(&body, &submission.draft)
}
