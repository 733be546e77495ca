use aw_data::{DataError, ProductDescription, ProductModelProductDescriptionCulture, Repository};
use aw_data_sqlx::SqlxRepository;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqlitePool};
use uuid::Uuid;

const SCHEMA: &str = r#"
CREATE TABLE ProductDescription (
    ProductDescriptionID INTEGER PRIMARY KEY,
    Description TEXT,
    rowguid BLOB NOT NULL UNIQUE,
    ModifiedDate TEXT NOT NULL
);
CREATE TABLE ProductModelProductDescriptionCulture (
    ProductModelID INTEGER NOT NULL,
    ProductDescriptionID INTEGER NOT NULL REFERENCES ProductDescription (ProductDescriptionID),
    CultureID TEXT NOT NULL,
    ModifiedDate TEXT NOT NULL,
    PRIMARY KEY (ProductModelID, ProductDescriptionID, CultureID)
);
"#;

async fn setup() -> SqlitePool {
    // One connection: every new in-memory connection is a separate database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();
    pool
}

fn modified() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2013, 4, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn description(id: i32, text: &str) -> ProductDescription {
    ProductDescription {
        product_description_id: id,
        description: Some(text.to_string()),
        rowguid: Uuid::new_v4(),
        modified_date: modified(),
        ..ProductDescription::new()
    }
}

fn link(model: i32, description: i32, culture: &str) -> ProductModelProductDescriptionCulture {
    ProductModelProductDescriptionCulture {
        product_model_id: model,
        product_description_id: description,
        culture_id: culture.to_string(),
        modified_date: modified(),
    }
}

#[tokio::test]
async fn save_then_find_by_id() {
    let pool = setup().await;
    let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool);

    let saved = repo.save(&description(7, "Chromoly steel.")).await.unwrap();
    let found = repo.find_by_id(&7).await.unwrap().unwrap();

    assert_eq!(found, saved);
    assert!(found.product_model_product_description_culture.is_empty());
    assert!(repo.find_by_id(&8).await.unwrap().is_none());
}

#[tokio::test]
async fn null_description_round_trips() {
    let pool = setup().await;
    let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool);

    let mut row = description(3, "");
    row.description = None;
    repo.save(&row).await.unwrap();

    let found = repo.find_by_id(&3).await.unwrap().unwrap();
    assert!(found.description.is_none());
}

#[tokio::test]
async fn duplicate_id_is_a_conflict() {
    let pool = setup().await;
    let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool);

    repo.save(&description(7, "first")).await.unwrap();
    let err = repo.save(&description(7, "second")).await.unwrap_err();
    assert!(matches!(err, DataError::Conflict(_)), "got {err}");
}

#[tokio::test]
async fn duplicate_rowguid_is_a_conflict() {
    let pool = setup().await;
    let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool);

    let first = description(1, "first");
    let mut second = description(2, "second");
    second.rowguid = first.rowguid;

    repo.save(&first).await.unwrap();
    let err = repo.save(&second).await.unwrap_err();
    assert!(err.is_conflict(), "got {err}");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn find_all_is_ordered_and_counted() {
    let pool = setup().await;
    let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool);

    for id in [5, 1, 3] {
        repo.save(&description(id, "text")).await.unwrap();
    }

    let ids: Vec<i32> = repo
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|d| d.product_description_id)
        .collect();
    assert_eq!(ids, vec![1, 3, 5]);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let pool = setup().await;
    let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool);

    repo.save(&description(4, "gone soon")).await.unwrap();
    assert!(repo.delete(&4).await.unwrap());
    assert!(!repo.delete(&4).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_does_not_cascade_to_links() {
    let pool = setup().await;
    let descriptions = SqlxRepository::<ProductDescription, Sqlite>::new(pool.clone());
    let links = SqlxRepository::<ProductModelProductDescriptionCulture, Sqlite>::new(pool);

    descriptions.save(&description(4, "linked")).await.unwrap();
    links.insert(&link(1, 4, "en")).await.unwrap();

    let err = descriptions.delete(&4).await.unwrap_err();
    assert!(matches!(err, DataError::Database(_)), "got {err}");
    assert_eq!(links.find_by_description(4).await.unwrap().len(), 1);
    assert_eq!(descriptions.count().await.unwrap(), 1);
}

#[tokio::test]
async fn link_to_missing_description_is_a_database_error() {
    let pool = setup().await;
    let links = SqlxRepository::<ProductModelProductDescriptionCulture, Sqlite>::new(pool);

    let err = links.insert(&link(1, 404, "en")).await.unwrap_err();
    assert!(matches!(err, DataError::Database(_)), "got {err}");
    assert!(links.find_by_description(404).await.unwrap().is_empty());
}

#[tokio::test]
async fn load_cultures_fills_only_matching_descriptions() {
    let pool = setup().await;
    let descriptions = SqlxRepository::<ProductDescription, Sqlite>::new(pool.clone());
    let links = SqlxRepository::<ProductModelProductDescriptionCulture, Sqlite>::new(pool);

    for id in [1, 2, 3] {
        descriptions.save(&description(id, "text")).await.unwrap();
    }
    links.insert(&link(10, 1, "en")).await.unwrap();
    links.insert(&link(10, 1, "fr")).await.unwrap();
    links.insert(&link(11, 3, "ar")).await.unwrap();

    let mut loaded = descriptions.find_all().await.unwrap();
    let attached = descriptions.load_cultures(&mut loaded).await.unwrap();

    assert_eq!(attached, 3);
    let counts: Vec<usize> = loaded.iter().map(|d| d.culture_count()).collect();
    assert_eq!(counts, vec![2, 0, 1]);

    let cultures: Vec<&str> = loaded[0]
        .product_model_product_description_culture
        .iter()
        .map(|l| l.culture_id.as_str())
        .collect();
    assert_eq!(cultures, vec!["en", "fr"]);
}

#[tokio::test]
async fn find_with_cultures_loads_the_navigation() {
    let pool = setup().await;
    let descriptions = SqlxRepository::<ProductDescription, Sqlite>::new(pool.clone());
    let links = SqlxRepository::<ProductModelProductDescriptionCulture, Sqlite>::new(pool);

    descriptions.save(&description(7, "Chromoly steel.")).await.unwrap();
    links.insert(&link(19, 7, "en")).await.unwrap();

    let found = descriptions.find_with_cultures(&7).await.unwrap().unwrap();
    assert_eq!(found.culture_count(), 1);
    assert_eq!(
        found
            .product_model_product_description_culture
            .iter()
            .next()
            .map(|l| l.product_model_id),
        Some(19)
    );
    assert!(descriptions.find_with_cultures(&99).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_link_is_a_conflict() {
    let pool = setup().await;
    let descriptions = SqlxRepository::<ProductDescription, Sqlite>::new(pool.clone());
    let links = SqlxRepository::<ProductModelProductDescriptionCulture, Sqlite>::new(pool);

    descriptions.save(&description(7, "text")).await.unwrap();
    links.insert(&link(1, 7, "en")).await.unwrap();
    let err = links.insert(&link(1, 7, "en")).await.unwrap_err();
    assert!(err.is_conflict(), "got {err}");
}

#[tokio::test]
async fn load_cultures_on_empty_slice_is_a_no_op() {
    let pool = setup().await;
    let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool);
    assert_eq!(repo.load_cultures(&mut []).await.unwrap(), 0);
}

#[tokio::test]
async fn clones_share_pool_and_statements() {
    let pool = setup().await;
    let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool);
    let clone = repo.clone();

    repo.save(&description(9, "shared")).await.unwrap();
    assert_eq!(clone.count().await.unwrap(), 1);

    let debug = format!("{clone:?}");
    assert!(debug.contains("FROM ProductDescription"), "{debug}");
    assert!(debug.contains("INSERT INTO ProductDescription"), "{debug}");
}
