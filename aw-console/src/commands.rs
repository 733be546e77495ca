use aw_data::{ProductDescription, Repository};
use aw_data_sqlx::SqlxRepository;
use sqlx::Sqlite;

use crate::error::ConsoleError;

type Descriptions = SqlxRepository<ProductDescription, Sqlite>;

pub async fn show(repo: &Descriptions, id: i32) -> Result<String, ConsoleError> {
    let description = repo
        .find_with_cultures(&id)
        .await?
        .ok_or(ConsoleError::Missing(id))?;
    Ok(serde_json::to_string_pretty(&description)?)
}

pub async fn list(repo: &Descriptions) -> Result<String, ConsoleError> {
    let descriptions = repo.find_all_with_cultures().await?;
    tracing::info!(count = descriptions.len(), "listing descriptions");
    Ok(serde_json::to_string_pretty(&descriptions)?)
}

pub async fn count(repo: &Descriptions) -> Result<String, ConsoleError> {
    Ok(repo.count().await?.to_string())
}
