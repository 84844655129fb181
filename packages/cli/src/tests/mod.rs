
/// Every variable the configuration reads
pub(crate) const CONFIG_VARS: &[&str] = &[
    "PORT",
    "HOST",
    "ARCHSTUDIO_DB_PATH",
    "ARCHSTUDIO_PROJECT_ID",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "CHAT_MODEL",
    "PERSONAS_FILE",
];

pub(crate) fn clear_config_env() {
    for var in CONFIG_VARS {
        std::env::remove_var(var);
    }
}
