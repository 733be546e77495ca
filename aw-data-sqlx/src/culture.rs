use aw_data::{Entity, ProductModelProductDescriptionCulture};
use sqlx::Sqlite;

use crate::error::{SqlxErrorExt, SqlxResult};
use crate::repository::SqlxRepository;

impl SqlxRepository<ProductModelProductDescriptionCulture, Sqlite> {
    /// All links pointing at one description, ordered by model then culture.
    pub async fn find_by_description(
        &self,
        product_description_id: i32,
    ) -> SqlxResult<Vec<ProductModelProductDescriptionCulture>> {
        let sql = format!(
            "{} WHERE {} = ? ORDER BY ProductModelID, CultureID",
            self.select_sql(),
            ProductModelProductDescriptionCulture::id_column()
        );
        tracing::debug!(
            table = ProductModelProductDescriptionCulture::table_name(),
            product_description_id,
            "find_by_description"
        );
        sqlx::query_as::<_, ProductModelProductDescriptionCulture>(&sql)
            .bind(product_description_id)
            .fetch_all(self.pool())
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    pub async fn insert(&self, link: &ProductModelProductDescriptionCulture) -> SqlxResult<()> {
        let sql = self.insert_sql();
        tracing::debug!(
            table = ProductModelProductDescriptionCulture::table_name(),
            key = %link.key(),
            "insert"
        );
        sqlx::query(sql)
            .bind(link.product_model_id)
            .bind(link.product_description_id)
            .bind(link.culture_id.as_str())
            .bind(link.modified_date)
            .execute(self.pool())
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(())
    }
}
