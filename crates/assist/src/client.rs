use std::time::Duration;

use cotador_config::{AiProvider, AiSettings};
use serde_json::json;

use crate::keys::get_api_key;

const REQUEST_TIMEOUT_SECS: u64 = 15;
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_COMPLETION_TOKENS: u32 = 1024;

/// Blocking suggestion client over the configured provider.
///
/// Every public method returns the input text on any failure; callers never
/// need to handle an error from this collaborator.
pub struct SuggestionClient {
    ai: AiSettings,
}

impl SuggestionClient {
    pub fn from_settings(ai: &AiSettings) -> Self {
        Self { ai: ai.clone() }
    }

    /// Improve a quote's technical-notes block. `domain_hint` names the kind
    /// of work being quoted (e.g. "Impermeabilização e Construção Civil").
    pub fn refine_notes(&self, notes: &str, domain_hint: &str) -> String {
        if notes.trim().is_empty() {
            return notes.to_string();
        }
        let prompt = format!(
            "Melhore este texto de observações de um orçamento comercial: \
             \"{notes}\". Área de atuação: {domain_hint}. Seja técnico e \
             profissional; responda somente com o texto final."
        );
        self.complete(&prompt).unwrap_or_else(|| notes.to_string())
    }

    /// One-sentence technical description of a service keyword.
    pub fn suggest_description(&self, keyword: &str) -> String {
        if keyword.trim().is_empty() {
            return keyword.to_string();
        }
        let prompt =
            format!("Descreva tecnicamente em uma frase o serviço: {keyword}. Responda somente com a frase.");
        self.complete(&prompt).unwrap_or_else(|| keyword.to_string())
    }

    /// One completion round-trip. `None` on any failure.
    fn complete(&self, prompt: &str) -> Option<String> {
        match self.ai.provider {
            AiProvider::None => None,
            AiProvider::Local => self.chat_openai_style(
                &format!("{}/v1/chat/completions", self.ai.effective_endpoint()),
                None,
                prompt,
            ),
            AiProvider::OpenAI => {
                let key = get_api_key(AiProvider::OpenAI).key?;
                self.chat_openai_style(
                    "https://api.openai.com/v1/chat/completions",
                    Some(&key),
                    prompt,
                )
            }
            AiProvider::Anthropic => self.chat_anthropic(prompt),
        }
    }

    fn http_client(&self) -> Option<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .ok()
    }

    /// OpenAI chat-completions shape; Ollama serves the same endpoint.
    fn chat_openai_style(&self, url: &str, key: Option<&str>, prompt: &str) -> Option<String> {
        let body = json!({
            "model": self.ai.effective_model(),
            "messages": [{ "role": "user", "content": prompt }],
        });

        let mut request = self.http_client()?.post(url).json(&body);
        if let Some(key) = key {
            request = request.bearer_auth(key);
        }

        let response = request.send().ok()?;
        if !response.status().is_success() {
            return None;
        }

        let body: serde_json::Value = response.json().ok()?;
        let text = body["choices"][0]["message"]["content"].as_str()?.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    fn chat_anthropic(&self, prompt: &str) -> Option<String> {
        let key = get_api_key(AiProvider::Anthropic).key?;
        let body = json!({
            "model": self.ai.effective_model(),
            "max_tokens": MAX_COMPLETION_TOKENS,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .http_client()?
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .ok()?;
        if !response.status().is_success() {
            return None;
        }

        let body: serde_json::Value = response.json().ok()?;
        let text = body["content"][0]["text"].as_str()?.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}
