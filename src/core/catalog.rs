use crate::domain::model::FragranceOption;
use crate::domain::ports::CatalogSource;

/// Fetches the fragrance listing once and adapts each record for the
/// selection control. A failed fetch is logged and yields an empty catalog;
/// the error never propagates to the caller.
pub async fn load_catalog<S: CatalogSource>(source: &S) -> Vec<FragranceOption> {
    match source.fetch().await {
        Ok(records) => {
            tracing::debug!("catalog returned {} fragrances", records.len());
            records.into_iter().map(FragranceOption::from).collect()
        }
        Err(e) => {
            tracing::error!("fragrance catalog fetch failed: {}", e);
            Vec::new()
        }
    }
}
