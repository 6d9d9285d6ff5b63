pub mod api;
pub mod config;
pub mod error;
pub mod fallback;
pub mod list;
pub mod notice;
pub mod serde_utils;
pub mod validation;
