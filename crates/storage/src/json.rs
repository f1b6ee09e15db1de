use async_trait::async_trait;
use learn_core::model::Catalog;
use std::path::PathBuf;

use crate::repository::{CatalogProvider, StorageError};

/// Provider reading a catalog from a JSON document.
///
/// The document has the same shape `Catalog` serializes to; records are
/// validated while deserializing.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        parse_catalog(&raw)
    }
}

/// Parse a catalog from JSON text.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or records that fail validation.
pub fn parse_catalog(raw: &str) -> Result<Catalog, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

/// Render a catalog as pretty-printed JSON.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if serialization fails.
pub fn render_catalog(catalog: &Catalog) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureCatalog;

    #[test]
    fn rendered_fixtures_parse_back() {
        let catalog = FixtureCatalog::build().unwrap();
        let json = render_catalog(&catalog).unwrap();
        assert_eq!(parse_catalog(&json).unwrap(), catalog);
    }

    #[test]
    fn rejects_out_of_range_progress() {
        let raw = r#"{
            "user": {"name": "Ada", "courses_in_progress": 0, "completed_courses": 0, "total_points": 0},
            "courses": [{
                "id": 1, "title": "Rust", "category": "Systems", "progress": 120,
                "duration": "1 hora", "rating": 4.0, "students": 1, "is_popular": false,
                "description": "", "modules": 1, "lessons": 1
            }]
        }"#;
        let err = parse_catalog(raw).unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
        assert!(err.to_string().contains("progress"), "{err}");
    }

    #[test]
    fn missing_optional_sections_default_to_empty() {
        let raw = r#"{
            "user": {"name": "Ada", "courses_in_progress": 0, "completed_courses": 0, "total_points": 0},
            "courses": []
        }"#;
        let catalog = parse_catalog(raw).unwrap();
        assert!(catalog.achievements().is_empty());
        assert!(catalog.module_outline().is_empty());
    }
}
