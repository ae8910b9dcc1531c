//! The fixed tool catalog
//!
//! Built in code so every process start sends the model the same tools in the
//! same order.

use std::collections::HashSet;

use crate::error::{Result, RouterError};
use crate::llm::ToolDefinition;

use super::definition::{Tool, is_strict_schema};

/// Ordered catalog of tool definitions, unique by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Build a catalog, rejecting duplicate names and non-strict schemas
    pub fn new(tools: Vec<Tool>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.name.as_str()) {
                return Err(RouterError::Config(format!("Duplicate tool name '{}'", tool.name)));
            }
            if !is_strict_schema(&tool.parameter_schema()) {
                return Err(RouterError::Config(format!(
                    "Tool '{}' has a non-strict parameter schema",
                    tool.name
                )));
            }
        }
        Ok(Self { tools })
    }

    /// The enterprise-IT catalog served by toolroute
    pub fn builtin() -> Self {
        Self {
            tools: builtin_tools(),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Tool names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Wire definitions for a completion request, in catalog order
    pub fn to_llm_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(Tool::to_llm_definition).collect()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_tools() -> Vec<Tool> {
    vec![
        Tool::new("get_ticket_status", "Retrieves the status of an IT support ticket")
            .integer("ticket_id", "The unique ticket identifier"),
        Tool::new(
            "schedule_meeting",
            "Schedules a meeting for a specific date, time, and room",
        )
        .string("date", "Meeting date in YYYY-MM-DD format")
        .string("time", "Meeting time in HH:MM format")
        .string("meeting_room", "Name or identifier of the meeting room"),
        Tool::new(
            "get_expense_balance",
            "Retrieves the current expense reimbursement balance for an employee",
        )
        .integer("employee_id", "The unique employee identifier"),
        Tool::new(
            "calculate_performance_bonus",
            "Calculates the performance bonus for an employee for a specific year",
        )
        .integer("employee_id", "The unique employee identifier")
        .integer("current_year", "The year for which to calculate the bonus"),
        Tool::new(
            "report_office_issue",
            "Reports an office issue with a specific issue code and department",
        )
        .integer("issue_code", "The unique issue identifier code")
        .string("department", "The department responsible for handling the issue"),
    ]
}
