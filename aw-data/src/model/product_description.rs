use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::Entity;
use crate::navigation::Navigation;

use super::ProductModelProductDescriptionCulture;

/// One row of the `ProductDescription` table.
///
/// A plain data holder: every field is public and nothing is validated here.
/// Uniqueness of the id and of `rowguid` is enforced by the store, and the
/// culture links are filled by an explicit loader after the row is mapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescription {
    #[sqlx(rename = "ProductDescriptionID")]
    pub product_description_id: i32,
    #[sqlx(rename = "Description")]
    pub description: Option<String>,
    pub rowguid: Uuid,
    #[sqlx(rename = "ModifiedDate")]
    pub modified_date: NaiveDateTime,
    #[sqlx(skip)]
    #[serde(default)]
    pub product_model_product_description_culture: Navigation<ProductModelProductDescriptionCulture>,
}

impl ProductDescription {
    /// An empty record with an empty, freshly allocated culture collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of culture links currently attached.
    pub fn culture_count(&self) -> usize {
        self.product_model_product_description_culture.len()
    }
}

impl Entity for ProductDescription {
    type Id = i32;

    fn table_name() -> &'static str {
        "ProductDescription"
    }

    fn id_column() -> &'static str {
        "ProductDescriptionID"
    }

    fn columns() -> &'static [&'static str] {
        &["ProductDescriptionID", "Description", "rowguid", "ModifiedDate"]
    }

    fn id(&self) -> i32 {
        self.product_description_id
    }
}
