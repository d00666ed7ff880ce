use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use crate::config::Config;
use crate::contact::{ContactForm, ContactSettings, TranslatableField};
use crate::i18n::Lang;
use crate::translate::{FieldDebouncer, MyMemoryClient, TranslateOutcome, TranslatorInterface};

/// Wires the translator, the per-field debouncer and the form together.
///
/// The admin screen calls [`input`] on every source-language keystroke and
/// [`drain`] (or [`next_outcome`]) whenever it wants delivered suggestions
/// merged into the form.
///
/// [`input`]: AssistEngine::input
/// [`drain`]: AssistEngine::drain
/// [`next_outcome`]: AssistEngine::next_outcome
pub struct AssistEngine {
    form: ContactForm,
    debouncer: FieldDebouncer,
    outcomes: UnboundedReceiver<(TranslatableField, TranslateOutcome)>,
}

impl AssistEngine {
    pub fn new(config: &Config, record: ContactSettings) -> Self {
        info!(
            "Initializing translation assist: endpoint={}, quiet_window={}ms",
            config.translator.endpoint, config.translator.quiet_window_ms
        );
        let translator: Arc<dyn TranslatorInterface> =
            Arc::new(MyMemoryClient::new(config.translator.endpoint.clone()));
        Self::with_translator(
            translator,
            Duration::from_millis(config.translator.quiet_window_ms),
            record,
        )
    }

    /// Construction seam for tests and alternative translation backends.
    pub fn with_translator(
        translator: Arc<dyn TranslatorInterface>,
        quiet_window: Duration,
        record: ContactSettings,
    ) -> Self {
        let (debouncer, outcomes) = FieldDebouncer::new(translator, quiet_window);
        Self {
            form: ContactForm::new(record),
            debouncer,
            outcomes,
        }
    }

    /// Source-language keystroke: stored immediately, translation scheduled.
    pub fn input(&mut self, field: TranslatableField, value: &str) {
        self.form.set_source(field, value);
        self.debouncer.schedule(field, value.to_string());
    }

    /// Manual edit of a derived-language variant.
    pub fn override_derived(&mut self, field: TranslatableField, lang: Lang, value: &str) {
        self.form.set_derived(field, lang, value);
    }

    /// Merge every already-delivered translation into the form, without
    /// waiting. Returns how many landed.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((field, outcome)) = self.outcomes.try_recv() {
            self.form.apply_outcome(field, outcome);
            applied += 1;
        }
        applied
    }

    /// Wait for the next translation to land and merge it.
    pub async fn next_outcome(&mut self) -> Option<TranslatableField> {
        let (field, outcome) = self.outcomes.recv().await?;
        self.form.apply_outcome(field, outcome);
        Some(field)
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }
}
