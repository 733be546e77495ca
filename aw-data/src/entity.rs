/// Trait describing how a record maps onto its table: table name, id column
/// and the list of persisted columns.
///
/// Navigational fields are never part of [`columns`](Entity::columns).
///
/// # Example
///
/// ```ignore
/// impl Entity for ProductDescription {
///     type Id = i32;
///     fn table_name() -> &'static str { "ProductDescription" }
///     fn id_column() -> &'static str { "ProductDescriptionID" }
///     fn columns() -> &'static [&'static str] {
///         &["ProductDescriptionID", "Description", "rowguid", "ModifiedDate"]
///     }
///     fn id(&self) -> i32 { self.product_description_id }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    type Id: Clone + Send + Sync + ToString + 'static;

    fn table_name() -> &'static str;
    fn id_column() -> &'static str;
    fn columns() -> &'static [&'static str];
    fn id(&self) -> Self::Id;

    /// Comma-separated column list, in declaration order.
    fn select_list() -> String {
        Self::columns().join(", ")
    }
}
