//! # aw-data — AdventureWorks data layer
//!
//! Typed records for the `ProductDescription` table and the
//! `ProductModelProductDescriptionCulture` link rows that point at it,
//! together with the backend-neutral contracts a storage crate implements.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ProductDescription`] | One description row plus its navigational culture links |
//! | [`ProductModelProductDescriptionCulture`] | Link row: product model × description × culture |
//! | [`Navigation<T>`] | Set-like collection backing a one-to-many navigation |
//! | [`Entity`] | Table name, id column and column list of a record |
//! | [`Repository`] | Async CRUD contract |
//! | [`DataError`] | Error type shared by every backend |
//!
//! Relationships are never loaded implicitly. A backend maps the row, then an
//! explicit loader such as [`attach_cultures`] fills the navigation.

pub mod entity;
pub mod error;
pub mod loader;
pub mod model;
pub mod navigation;
pub mod repository;

pub use entity::Entity;
pub use error::DataError;
pub use loader::attach_cultures;
pub use model::{
    CultureLinkKey, ProductDescription, ProductModelProductDescriptionCulture,
};
pub use navigation::Navigation;
pub use repository::Repository;

pub mod prelude {
    //! Re-exports of the most commonly used data types.
    pub use crate::{
        attach_cultures, DataError, Entity, Navigation, ProductDescription,
        ProductModelProductDescriptionCulture, Repository,
    };
}
