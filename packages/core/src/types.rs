// ABOUTME: Shared value types threaded through every storage and API operation
// ABOUTME: Project scope and the C4 canvas variants an element can live on

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PROJECT_ID;
use crate::validation::ValidationError;

/// Identity of the project every owned entity belongs to.
///
/// Passed explicitly into each project-owned operation so that reads and
/// writes can never leak across projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectScope(i64);

impl ProjectScope {
    pub fn new(project_id: i64) -> Result<Self, ValidationError> {
        if project_id <= 0 {
            return Err(ValidationError::InvalidField {
                field: "project_id",
                reason: format!("must be a positive integer (got {})", project_id),
            });
        }
        Ok(Self(project_id))
    }

    pub fn id(&self) -> i64 {
        self.0
    }
}

impl Default for ProjectScope {
    fn default() -> Self {
        Self(DEFAULT_PROJECT_ID)
    }
}

impl fmt::Display for ProjectScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project#{}", self.0)
    }
}

/// Diagram surface an architecture element is drawn on (C4 levels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasType {
    Context,
    Container,
    Component,
    Code,
}

impl CanvasType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Container => "container",
            Self::Component => "component",
            Self::Code => "code",
        }
    }
}

impl fmt::Display for CanvasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanvasType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "context" => Ok(Self::Context),
            "container" => Ok(Self::Container),
            "component" => Ok(Self::Component),
            "code" => Ok(Self::Code),
            other => Err(ValidationError::InvalidField {
                field: "canvas_type",
                reason: format!("unknown canvas variant '{}'", other),
            }),
        }
    }
}

impl TryFrom<String> for CanvasType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
