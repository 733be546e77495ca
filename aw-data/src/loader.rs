use std::collections::HashMap;

use crate::model::{ProductDescription, ProductModelProductDescriptionCulture};

/// Distribute culture links onto the descriptions they reference.
///
/// Each description's collection is replaced wholesale by the links whose
/// `product_description_id` matches it, so a description with no link ends up
/// empty. A description id that appears more than once in `descriptions`
/// gets the same links on every occurrence. Links pointing at a description
/// not in `descriptions` are skipped.
///
/// Returns the number of links attached, counted per description.
pub fn attach_cultures<I>(descriptions: &mut [ProductDescription], links: I) -> usize
where
    I: IntoIterator<Item = ProductModelProductDescriptionCulture>,
{
    let mut by_description: HashMap<i32, Vec<ProductModelProductDescriptionCulture>> =
        HashMap::with_capacity(descriptions.len());
    for description in descriptions.iter() {
        by_description.entry(description.product_description_id).or_default();
    }

    let mut skipped = 0usize;
    for link in links {
        match by_description.get_mut(&link.product_description_id) {
            Some(bucket) => {
                tracing::trace!(link = %link.key(), "attaching culture link");
                bucket.push(link);
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "culture links without a matching description were ignored");
    }

    let mut attached = 0usize;
    for description in descriptions.iter_mut() {
        let links = by_description
            .get(&description.product_description_id)
            .cloned()
            .unwrap_or_default();
        description
            .product_model_product_description_culture
            .replace(links);
        attached += description.culture_count();
    }
    attached
}
