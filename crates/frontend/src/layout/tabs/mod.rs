//! Tab management
//!
//! - `page`: `TabPage` wrapper around the content of one tab
//! - `registry`: tab key → view
//! - `tab_labels`: tab key → title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
