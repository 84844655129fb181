// ABOUTME: Persona catalog for the studio assistant
// ABOUTME: Maps a UI context name to the system instruction that leads every chat completion

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

/// Persona used when the requested context is unknown
pub const DEFAULT_PERSONA: &str = "general";

const BUILTIN_PERSONAS: &[(&str, &str)] = &[
    (
        "general",
        "You are Jarvis, the assistant from the Iron Man films. \
You are witty and dry, yet always professional and helpful. \
Answer briefly (1-3 sentences) with light British irony. \
You help people design software system architecture.",
    ),
    (
        "vision",
        "You are Jarvis, an expert in product vision. \
Help articulate goals, metrics, and value propositions. \
Be brief and a little ironic, and ask clarifying questions. 1-3 sentences.",
    ),
    (
        "requirements",
        "You are Jarvis, an expert in business requirements. \
Help write user stories, use cases, and acceptance criteria. \
Be precise with a touch of irony and point out missing details. 1-3 sentences.",
    ),
    (
        "architecture",
        "You are Jarvis, a software systems architect. \
You know microservices, the C4 model, and design patterns. \
Give concrete advice: which components, how to connect them, which stack. \
Be brief (1-3 sentences), ironic but professional. \
Mention scalability, security, and performance.",
    ),
    (
        "studio",
        "You are Jarvis, the assistant inside Architecture Studio. \
Comment on what the user is doing with irony, but usefully: \
an element was added, so ask about its connections and technology; \
components were connected, so ask which protocol (REST, gRPC, events); \
a microservice appeared, so warn about distributed tracing complexity. \
Be brief (1-2 sentences), witty, and professional.",
    ),
    (
        "api",
        "You are Jarvis, an expert in API design. \
Help design REST, GraphQL, and gRPC APIs. \
Pay attention to versioning, rate limiting, auth, and error handling. \
Brevity (1-3 sentences) plus irony is your style.",
    ),
];

#[derive(Debug, Error)]
pub enum PersonaLoadError {
    #[error("Failed to read persona file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Persona file must be a JSON object of context name to instruction: {0}")]
    Json(#[from] serde_json::Error),
}

/// A persona resolved for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona<'a> {
    pub name: &'a str,
    pub instruction: &'a str,
}

/// Lookup table from context name to system instruction
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: HashMap<String, String>,
}

impl PersonaCatalog {
    /// Catalog with only the built-in personas
    pub fn builtin() -> Self {
        let personas = BUILTIN_PERSONAS
            .iter()
            .map(|(name, instruction)| (name.to_string(), instruction.to_string()))
            .collect();
        Self { personas }
    }

    /// Built-in personas overridden/extended by a JSON object file
    pub fn with_overrides_from_file(path: &Path) -> Result<Self, PersonaLoadError> {
        let contents = std::fs::read_to_string(path)?;
        let overrides: HashMap<String, String> = serde_json::from_str(&contents)?;

        info!(
            "Loaded {} persona override(s) from {}",
            overrides.len(),
            path.display()
        );

        let mut catalog = Self::builtin();
        catalog.personas.extend(overrides);
        Ok(catalog)
    }

    /// Resolve a context name, falling back to the default persona
    pub fn resolve(&self, context: &str) -> Persona<'_> {
        if let Some((name, instruction)) = self.personas.get_key_value(context) {
            return Persona {
                name: name.as_str(),
                instruction: instruction.as_str(),
            };
        }

        debug!("Unknown persona context '{}', using {}", context, DEFAULT_PERSONA);

        let instruction = self
            .personas
            .get(DEFAULT_PERSONA)
            .map(String::as_str)
            .unwrap_or(BUILTIN_PERSONAS[0].1);

        Persona {
            name: DEFAULT_PERSONA,
            instruction,
        }
    }

    pub fn contains(&self, context: &str) -> bool {
        self.personas.contains_key(context)
    }
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
