use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ItemKind;
use crate::items::domain::Item;
use crate::items::domain::model::CatalogItem;

// ItemDto is the stored and transferred shape of a catalog item. Field aliases accept
// the records written by the browser app (type, borrower, fileSize).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(alias = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default, alias = "borrower")]
    pub holder: Option<String>,
    #[serde(default, alias = "fileSize", deserialize_with = "size::deserialize", skip_serializing_if = "Option::is_none")]
    pub size_mb: Option<f64>,
}

impl From<&CatalogItem> for ItemDto {
    fn from(other: &CatalogItem) -> Self {
        Self {
            id: other.id(),
            title: other.title().to_string(),
            author: other.author().to_string(),
            kind: other.kind(),
            is_available: Some(other.is_available()),
            holder: other.holder().map(str::to_string),
            size_mb: other.size_mb(),
        }
    }
}

// the browser form stored the raw input, so sizes arrive as numbers or numeric strings
pub mod size {
    use serde::{Deserialize, Deserializer};
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSize {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<RawSize>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawSize::Number(size)) => Ok(Some(size)),
            Some(RawSize::Text(text)) if text.trim().is_empty() => Ok(None),
            Some(RawSize::Text(text)) => text.trim().parse::<f64>().map(Some).map_err(D::Error::custom),
        }
    }
}
