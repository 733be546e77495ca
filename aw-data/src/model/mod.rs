mod product_description;
mod product_model_product_description_culture;

pub use product_description::ProductDescription;
pub use product_model_product_description_culture::{
    CultureLinkKey, ProductModelProductDescriptionCulture,
};
