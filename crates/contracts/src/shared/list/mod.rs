//! Client-side list management shared by every catalog screen.
//!
//! - [`search`]: case-insensitive substring filter
//! - [`lookup`]: foreign-key → description joins
//! - [`pagination`]: page bookkeeping and the page-number window
//! - [`sync`]: applying create/update results to the in-memory collection
//! - [`controller`]: explicit list state plus a pure reducer tying the above together

pub mod controller;
pub mod lookup;
pub mod pagination;
pub mod search;
pub mod sync;

pub use controller::{FormMode, FormState, ListAction, ListEffect, ListState, Submission, Transition};
pub use lookup::{ForeignKeys, LookupResolver, LookupSpec, LookupTable, Resolved};
pub use pagination::Pagination;
pub use search::{filter_list, Searchable};
pub use sync::{apply_mutation, CreatePolicy, Keyed, Mutation};
