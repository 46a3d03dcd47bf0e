//! Command implementations for kcount

pub mod completions;
pub mod count;
