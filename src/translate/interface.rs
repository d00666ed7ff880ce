use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Translations of one source-language string into both derived languages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationPair {
    pub en: String,
    pub ru: String,
}

impl TranslationPair {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.ru.is_empty()
    }
}

/// Failure modes of a translation request. Network errors, non-OK statuses
/// and unexpected bodies all end a request the same way; no retry follows.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("translation endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response shape from translation endpoint")]
    MalformedResponse,
}

/// Result of one translation request.
///
/// Failure is an explicit variant rather than a silent empty pair, so the
/// form layer can surface a non-blocking warning while still falling back to
/// empty suggestions.
#[derive(Debug)]
pub enum TranslateOutcome {
    Translated(TranslationPair),
    Failed(TranslateError),
}

impl TranslateOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, TranslateOutcome::Failed(_))
    }

    /// Best-effort conversion: a failure becomes an empty suggestion pair,
    /// leaving the source-language fields untouched and the record saveable.
    pub fn into_pair(self) -> TranslationPair {
        match self {
            TranslateOutcome::Translated(pair) => pair,
            TranslateOutcome::Failed(_) => TranslationPair::empty(),
        }
    }
}

/// Interface for a service that translates Azerbaijani source text into the
/// derived languages
#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Translate source text into English and Russian.
    ///
    /// Empty or whitespace-only input yields an empty pair without any
    /// network traffic.
    async fn translate_pair(&self, text: &str) -> TranslateOutcome;
}
