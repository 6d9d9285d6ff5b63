//! Generic catalog screen: list, search, pagination and the create/edit form

pub mod catalog_api;
pub mod catalog_form;
pub mod catalog_list;
pub mod catalog_ui;

pub use catalog_list::catalog_list_view;
pub use catalog_ui::{CatalogUi, ColumnDef, FieldDef};
