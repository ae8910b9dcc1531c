//! Tool System - strict tool definitions and the fixed catalog

mod catalog;
mod definition;

pub use catalog::ToolCatalog;
pub use definition::{ParamType, Tool, ToolParam, is_strict_schema};
