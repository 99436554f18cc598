//! Core domain types and logic.

pub mod instrument;
pub mod holding;
pub mod article;
pub mod content;
pub mod list_filter;
pub mod ranking;
pub mod order;
pub mod portfolio;
pub mod format;
pub mod config_validation;
pub mod error;
