// ABOUTME: Studio assistant chat proxy
// ABOUTME: Persona lookup table and the chat completion client it feeds

pub mod persona;
pub mod service;

// Re-export persona types
pub use persona::{Persona, PersonaCatalog, PersonaLoadError, DEFAULT_PERSONA};

// Re-export service types
pub use service::{
    ChatError, ChatReply, ChatRequest, ChatResult, ChatService, ChatSettings, ChatTurn, Message,
    DEFAULT_MODEL, HISTORY_LIMIT, OPENAI_API_URL,
};
