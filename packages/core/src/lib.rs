// ABOUTME: Core types and utilities for Architecture Studio
// ABOUTME: Foundational package providing the project scope, canvas variants, and validation

pub mod constants;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{CanvasType, ProjectScope};

// Re-export constants
pub use constants::{archstudio_dir, database_file, DEFAULT_PROJECT_ID};

// Re-export validation
pub use validation::{require_finite, require_text, ValidationError};
