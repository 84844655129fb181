// ABOUTME: Shared application state handed to every handler
// ABOUTME: Database handle, the fixed project scope, and the chat client

use std::sync::Arc;

use archstudio_ai::ChatService;
use archstudio_core::ProjectScope;
use archstudio_storage::Database;

#[derive(Clone)]
pub struct ApiState {
    pub db: Database,
    pub scope: ProjectScope,
    pub chat: Arc<ChatService>,
}

impl ApiState {
    pub fn new(db: Database, scope: ProjectScope, chat: ChatService) -> Self {
        Self {
            db,
            scope,
            chat: Arc::new(chat),
        }
    }
}
