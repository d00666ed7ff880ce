use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use super::interface::{TranslateError, TranslateOutcome, TranslationPair, TranslatorInterface};
use crate::i18n::Lang;

/// Public MyMemory endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net";

/// Client for the MyMemory translation endpoint
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl MyMemoryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn translate_into(&self, text: &str, target: Lang) -> Result<String, TranslateError> {
        let url = format!("{}/get", self.base_url);
        let langpair = format!("az|{}", target.as_code());

        let response = self
            .client
            .get(&url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::Status(response.status()));
        }

        let body: MyMemoryResponse = response.json().await?;
        body.response_data
            .and_then(|d| d.translated_text)
            .ok_or(TranslateError::MalformedResponse)
    }
}

impl Default for MyMemoryClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT.to_string())
    }
}

#[async_trait]
impl TranslatorInterface for MyMemoryClient {
    async fn translate_pair(&self, text: &str) -> TranslateOutcome {
        if text.trim().is_empty() {
            return TranslateOutcome::Translated(TranslationPair::empty());
        }

        let (en, ru) = tokio::join!(
            self.translate_into(text, Lang::En),
            self.translate_into(text, Lang::Ru),
        );

        match (en, ru) {
            (Ok(en), Ok(ru)) => {
                debug!("Translated {} source chars into en/ru", text.len());
                TranslateOutcome::Translated(TranslationPair { en, ru })
            }
            (Err(e), _) | (_, Err(e)) => {
                error!("Translation failed: {}", e);
                TranslateOutcome::Failed(e)
            }
        }
    }
}
