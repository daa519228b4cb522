// API key resolution
//
// Keys come from environment variables only (COTADOR_OPENAI_KEY, etc.).
// They are never read from or written to settings.json.

use std::env;

use cotador_config::AiProvider;

/// Source of an API key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Key retrieved from environment variable
    Environment,
    /// No key found
    None,
}

impl KeySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeySource::Environment => "environment",
            KeySource::None => "none",
        }
    }
}

/// Result of key lookup
#[derive(Debug, Clone)]
pub struct KeyLookup {
    pub key: Option<String>,
    pub source: KeySource,
}

/// Get an API key for the specified provider from its environment variable.
pub fn get_api_key(provider: AiProvider) -> KeyLookup {
    if let Ok(key) = env::var(provider.key_env_var()) {
        if !key.is_empty() {
            return KeyLookup {
                key: Some(key),
                source: KeySource::Environment,
            };
        }
    }

    KeyLookup {
        key: None,
        source: KeySource::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_var_means_no_key() {
        env::remove_var("COTADOR_ANTHROPIC_KEY");
        let lookup = get_api_key(AiProvider::Anthropic);
        assert!(lookup.key.is_none());
        assert_eq!(lookup.source, KeySource::None);
        assert_eq!(lookup.source.as_str(), "none");
    }

    #[test]
    fn env_var_key_is_found() {
        env::set_var("COTADOR_OPENAI_KEY", "sk-test");
        let lookup = get_api_key(AiProvider::OpenAI);
        assert_eq!(lookup.key.as_deref(), Some("sk-test"));
        assert_eq!(lookup.source, KeySource::Environment);
        env::remove_var("COTADOR_OPENAI_KEY");
    }
}
