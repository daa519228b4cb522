// Application settings
// Loaded from ~/.config/cotador/settings.json
// (COTADOR_CONFIG_DIR overrides the directory, mainly for tests)

use std::env;
use std::fs;
use std::path::PathBuf;

use cotador_engine::CompanyData;
use serde::{Deserialize, Serialize};

/// AI provider selection for the text-suggestion collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    /// Suggestions disabled (default)
    #[default]
    None,
    /// Local model via Ollama
    Local,
    /// OpenAI API
    #[serde(rename = "openai")]
    OpenAI,
    /// Anthropic API
    Anthropic,
}

impl AiProvider {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, AiProvider::None)
    }

    /// Returns the default model for this provider
    pub fn default_model(&self) -> &'static str {
        match self {
            AiProvider::None => "",
            AiProvider::Local => "llama3:8b",
            AiProvider::OpenAI => "gpt-4o",
            AiProvider::Anthropic => "claude-sonnet-4-20250514",
        }
    }

    /// Environment variable holding this provider's API key
    pub fn key_env_var(&self) -> String {
        format!("COTADOR_{}_KEY", format!("{self:?}").to_uppercase())
    }
}

/// Settings for the text-suggestion collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub provider: AiProvider,

    /// Model identifier (provider-specific); empty = provider default
    pub model: String,

    /// Custom endpoint for the Local provider (Ollama URL)
    pub endpoint: Option<String>,
}

impl AiSettings {
    /// Get the effective model (user-specified or provider default)
    pub fn effective_model(&self) -> &str {
        if self.model.is_empty() {
            self.provider.default_model()
        } else {
            &self.model
        }
    }

    /// Get the effective endpoint for the Local provider
    pub fn effective_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or("http://localhost:11434")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Issuing company identity, stamped into every new document
    pub company: CompanyData,

    pub ai: AiSettings,
}

impl Settings {
    fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("COTADOR_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cotador")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load settings, falling back to defaults on a missing or unreadable
    /// file. A corrupt file never blocks startup.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error parsing settings.json: {}", e);
                    eprintln!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading settings.json: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir).map_err(|e| format!("cannot create {}: {e}", dir.display()))?;

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        let path = Self::config_path();
        fs::write(&path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_key_env_vars() {
        assert_eq!(AiProvider::OpenAI.key_env_var(), "COTADOR_OPENAI_KEY");
        assert_eq!(AiProvider::Anthropic.key_env_var(), "COTADOR_ANTHROPIC_KEY");
        assert!(!AiProvider::None.is_enabled());
    }

    #[test]
    fn effective_model_falls_back_to_provider_default() {
        let ai = AiSettings {
            provider: AiProvider::OpenAI,
            ..AiSettings::default()
        };
        assert_eq!(ai.effective_model(), "gpt-4o");

        let pinned = AiSettings {
            provider: AiProvider::OpenAI,
            model: "gpt-4o-mini".into(),
            ..AiSettings::default()
        };
        assert_eq!(pinned.effective_model(), "gpt-4o-mini");
    }

    #[test]
    fn partial_settings_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"company": {"name": "Builder Ltda"}}"#).unwrap();
        assert_eq!(settings.company.name, "Builder Ltda");
        assert_eq!(settings.ai.provider, AiProvider::None);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        env::set_var("COTADOR_CONFIG_DIR", dir.path());

        let mut settings = Settings::default();
        settings.company.name = "Builder Indústria e Comércio".into();
        settings.ai.provider = AiProvider::Local;
        settings.save().unwrap();

        let loaded = Settings::load();
        assert_eq!(loaded.company.name, "Builder Indústria e Comércio");
        assert_eq!(loaded.ai.provider, AiProvider::Local);

        env::remove_var("COTADOR_CONFIG_DIR");
    }
}
