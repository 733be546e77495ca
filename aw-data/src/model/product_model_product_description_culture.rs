use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Link row tying a product model to a description in a given culture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductModelProductDescriptionCulture {
    #[sqlx(rename = "ProductModelID")]
    pub product_model_id: i32,
    #[sqlx(rename = "ProductDescriptionID")]
    pub product_description_id: i32,
    /// Fixed-width in the source schema, so it may carry trailing spaces.
    #[sqlx(rename = "CultureID")]
    pub culture_id: String,
    #[sqlx(rename = "ModifiedDate")]
    pub modified_date: NaiveDateTime,
}

impl ProductModelProductDescriptionCulture {
    pub fn key(&self) -> CultureLinkKey {
        CultureLinkKey {
            product_model_id: self.product_model_id,
            product_description_id: self.product_description_id,
            culture_id: self.culture_id.clone(),
        }
    }
}

/// Composite primary key of [`ProductModelProductDescriptionCulture`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CultureLinkKey {
    pub product_model_id: i32,
    pub product_description_id: i32,
    pub culture_id: String,
}

impl std::fmt::Display for CultureLinkKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.product_model_id,
            self.product_description_id,
            self.culture_id.trim_end()
        )
    }
}

impl Entity for ProductModelProductDescriptionCulture {
    type Id = CultureLinkKey;

    fn table_name() -> &'static str {
        "ProductModelProductDescriptionCulture"
    }

    // Links are only ever looked up through their owning description.
    fn id_column() -> &'static str {
        "ProductDescriptionID"
    }

    fn columns() -> &'static [&'static str] {
        &["ProductModelID", "ProductDescriptionID", "CultureID", "ModifiedDate"]
    }

    fn id(&self) -> CultureLinkKey {
        self.key()
    }
}
