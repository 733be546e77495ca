use aw_data::{
    attach_cultures, DataError, Entity, ProductDescription,
    ProductModelProductDescriptionCulture, Repository,
};
use sqlx::Sqlite;

use crate::error::{SqlxErrorExt, SqlxResult};
use crate::repository::{placeholders, SqlxRepository};

/// Ids bound per `IN (...)` query when loading culture links.
const LOAD_CHUNK: usize = 500;

impl Repository<ProductDescription, i32> for SqlxRepository<ProductDescription, Sqlite> {
    async fn find_by_id(&self, id: &i32) -> Result<Option<ProductDescription>, DataError> {
        let sql = format!(
            "{} WHERE {} = ?",
            self.select_sql(),
            ProductDescription::id_column()
        );
        tracing::debug!(table = ProductDescription::table_name(), id = *id, "find_by_id");
        sqlx::query_as::<_, ProductDescription>(&sql)
            .bind(*id)
            .fetch_optional(self.pool())
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    async fn find_all(&self) -> Result<Vec<ProductDescription>, DataError> {
        let sql = format!(
            "{} ORDER BY {}",
            self.select_sql(),
            ProductDescription::id_column()
        );
        tracing::debug!(table = ProductDescription::table_name(), "find_all");
        sqlx::query_as::<_, ProductDescription>(&sql)
            .fetch_all(self.pool())
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    /// Insert the scalar columns. The culture navigation is not written.
    async fn save(&self, entity: &ProductDescription) -> Result<ProductDescription, DataError> {
        let sql = self.insert_sql();
        tracing::debug!(
            table = ProductDescription::table_name(),
            id = entity.product_description_id,
            rowguid = %entity.rowguid,
            "save"
        );
        sqlx::query(sql)
            .bind(entity.product_description_id)
            .bind(entity.description.as_deref())
            .bind(entity.rowguid)
            .bind(entity.modified_date)
            .execute(self.pool())
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(entity.clone())
    }

    /// Links referencing the row are not removed; with foreign keys enforced
    /// the delete fails with `DataError::Database` instead.
    async fn delete(&self, id: &i32) -> Result<bool, DataError> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?",
            ProductDescription::table_name(),
            ProductDescription::id_column()
        );
        tracing::debug!(table = ProductDescription::table_name(), id = *id, "delete");
        let result = sqlx::query(&sql)
            .bind(*id)
            .execute(self.pool())
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DataError> {
        let sql = format!("SELECT COUNT(*) FROM {}", ProductDescription::table_name());
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(self.pool())
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(count.max(0) as u64)
    }
}

impl SqlxRepository<ProductDescription, Sqlite> {
    /// Fetch the culture links of every description in `descriptions` and
    /// replace each navigation with them.
    ///
    /// Returns the number of links attached.
    pub async fn load_cultures(&self, descriptions: &mut [ProductDescription]) -> SqlxResult<usize> {
        if descriptions.is_empty() {
            return Ok(0);
        }

        let mut ids: Vec<i32> = descriptions.iter().map(|d| d.product_description_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let mut links = Vec::new();
        for chunk in ids.chunks(LOAD_CHUNK) {
            let sql = format!(
                "{} WHERE ProductDescriptionID IN ({}) \
                 ORDER BY ProductDescriptionID, ProductModelID, CultureID",
                self.select_sql(),
                placeholders(chunk.len())
            );
            let mut query = sqlx::query_as::<_, ProductModelProductDescriptionCulture>(&sql);
            for id in chunk {
                query = query.bind(*id);
            }
            let mut rows = query
                .fetch_all(self.pool())
                .await
                .map_err(SqlxErrorExt::into_data_error)?;
            links.append(&mut rows);
        }

        tracing::debug!(
            descriptions = ids.len(),
            links = links.len(),
            "loaded culture links"
        );
        Ok(attach_cultures(descriptions, links))
    }

    /// [`find_by_id`](Repository::find_by_id) followed by [`load_cultures`](Self::load_cultures).
    pub async fn find_with_cultures(&self, id: &i32) -> SqlxResult<Option<ProductDescription>> {
        let Some(description) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let mut found = [description];
        self.load_cultures(&mut found).await?;
        let [description] = found;
        Ok(Some(description))
    }

    /// [`find_all`](Repository::find_all) with every navigation loaded.
    pub async fn find_all_with_cultures(&self) -> SqlxResult<Vec<ProductDescription>> {
        let mut descriptions = self.find_all().await?;
        self.load_cultures(&mut descriptions).await?;
        Ok(descriptions)
    }
}
