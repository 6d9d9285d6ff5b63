//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{module}--{category}` (e.g. `"a001_color--list"`) and a `data-page-category`.

/// Catalog list with search, pagination and a create/edit form.
pub const PAGE_CAT_LIST: &str = "list";

/// Workflow screen (capture, verification, reports, grids).
pub const PAGE_CAT_USECASE: &str = "usecase";
