use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

use super::interface::{TranslateOutcome, TranslatorInterface};
use crate::contact::TranslatableField;

/// Quiet window used when the config does not set one.
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(800);

/// Trailing-edge debouncer with one cancellable timer per form field.
///
/// A new call for a field aborts only that field's pending timer; other
/// fields keep their own schedules. Cancellation stops scheduling, not
/// dispatched work: once the quiet window has elapsed the request pair runs
/// to completion and its outcome is delivered on the channel, where the form
/// resolves staleness last-write-wins.
pub struct FieldDebouncer {
    translator: Arc<dyn TranslatorInterface>,
    quiet_window: Duration,
    // Entries are tagged with the schedule generation that owns them, so a
    // dispatched task can clear its own entry without evicting a newer one.
    pending: Arc<DashMap<TranslatableField, (u64, AbortHandle)>>,
    generation: AtomicU64,
    outcomes: mpsc::UnboundedSender<(TranslatableField, TranslateOutcome)>,
}

impl FieldDebouncer {
    /// Create a debouncer and the receiver its outcomes arrive on.
    pub fn new(
        translator: Arc<dyn TranslatorInterface>,
        quiet_window: Duration,
    ) -> (
        Self,
        mpsc::UnboundedReceiver<(TranslatableField, TranslateOutcome)>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            translator,
            quiet_window,
            pending: Arc::new(DashMap::new()),
            generation: AtomicU64::new(0),
            outcomes: tx,
        };
        (debouncer, rx)
    }

    /// Schedule a translation for `field`, replacing any still-pending one.
    pub fn schedule(&self, field: TranslatableField, text: String) {
        let translator = self.translator.clone();
        let pending = self.pending.clone();
        let outcomes = self.outcomes.clone();
        let quiet_window = self.quiet_window;
        let generation = self.generation.fetch_add(1, Ordering::Relaxed);

        let task = tokio::spawn(async move {
            tokio::time::sleep(quiet_window).await;
            // Past the quiet window. Drop only this schedule's handle before
            // dispatching: a newer schedule may already own the entry, and
            // its timer must stay cancellable.
            pending.remove_if(&field, |_, (owner, _)| *owner == generation);
            let outcome = translator.translate_pair(&text).await;
            let _ = outcomes.send((field, outcome));
        });

        if let Some((_, previous)) = self
            .pending
            .insert(field, (generation, task.abort_handle()))
        {
            previous.abort();
            debug!("Replaced pending translation for {:?}", field);
        }
    }

    /// Fields whose translation is still waiting out the quiet window.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::interface::TranslationPair;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const WINDOW: Duration = Duration::from_millis(50);

    /// Records every invocation instead of talking to a network.
    struct CountingTranslator {
        calls: AtomicUsize,
        last_text: Mutex<String>,
    }

    impl CountingTranslator {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_text: Mutex::new(String::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_text(&self) -> String {
            self.last_text.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslatorInterface for CountingTranslator {
        async fn translate_pair(&self, text: &str) -> TranslateOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_text.lock().unwrap() = text.to_string();
            TranslateOutcome::Translated(TranslationPair {
                en: format!("en:{}", text),
                ru: format!("ru:{}", text),
            })
        }
    }

    async fn settle() {
        tokio::time::sleep(WINDOW * 4).await;
    }

    #[tokio::test]
    async fn rapid_calls_coalesce_into_one_invocation_with_last_arguments() {
        let translator = CountingTranslator::new();
        let (debouncer, mut rx) = FieldDebouncer::new(translator.clone(), WINDOW);

        for i in 0..5 {
            debouncer.schedule(TranslatableField::SupportDescription, format!("draft {}", i));
        }
        settle().await;

        assert_eq!(translator.calls(), 1);
        assert_eq!(translator.last_text(), "draft 4");

        let (field, outcome) = rx.try_recv().expect("one outcome delivered");
        assert_eq!(field, TranslatableField::SupportDescription);
        assert_eq!(outcome.into_pair().en, "en:draft 4");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn calls_outside_the_quiet_window_each_fire() {
        let translator = CountingTranslator::new();
        let (debouncer, mut rx) = FieldDebouncer::new(translator.clone(), WINDOW);

        debouncer.schedule(TranslatableField::WeekdayHours, "first".to_string());
        settle().await;
        debouncer.schedule(TranslatableField::WeekdayHours, "second".to_string());
        settle().await;

        assert_eq!(translator.calls(), 2);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn fields_debounce_independently() {
        let translator = CountingTranslator::new();
        let (debouncer, mut rx) = FieldDebouncer::new(translator.clone(), WINDOW);

        // Rapid edits across two fields must not cancel each other.
        debouncer.schedule(TranslatableField::SaturdayHours, "10:00 - 16:00".to_string());
        debouncer.schedule(TranslatableField::SundayHours, "Bağlıdır".to_string());
        debouncer.schedule(TranslatableField::SaturdayHours, "10:00 - 17:00".to_string());
        settle().await;

        assert_eq!(translator.calls(), 2);

        let mut fields = Vec::new();
        while let Ok((field, _)) = rx.try_recv() {
            fields.push(field);
        }
        fields.sort_by_key(|f| format!("{:?}", f));
        assert_eq!(
            fields,
            vec![
                TranslatableField::SaturdayHours,
                TranslatableField::SundayHours
            ]
        );
    }

    /// Holds every translation at a gate until the test releases permits.
    struct GatedTranslator {
        calls: AtomicUsize,
        last_text: Mutex<String>,
        gate: tokio::sync::Semaphore,
    }

    impl GatedTranslator {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_text: Mutex::new(String::new()),
                gate: tokio::sync::Semaphore::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_text(&self) -> String {
            self.last_text.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslatorInterface for GatedTranslator {
        async fn translate_pair(&self, text: &str) -> TranslateOutcome {
            self.gate.acquire().await.unwrap().forget();
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_text.lock().unwrap() = text.to_string();
            TranslateOutcome::Translated(TranslationPair::empty())
        }
    }

    #[tokio::test]
    async fn dispatched_request_does_not_evict_a_newer_schedule() {
        let translator = GatedTranslator::new();
        let (debouncer, mut rx) = FieldDebouncer::new(translator.clone(), WINDOW);

        debouncer.schedule(TranslatableField::SupportDescription, "v1".to_string());
        tokio::time::sleep(WINDOW * 2).await;
        // v1 is dispatched and parked at the gate; its entry is gone.
        assert_eq!(debouncer.pending_count(), 0);

        // A fresh schedule must own the entry and stay cancellable even
        // while v1 is still in flight.
        debouncer.schedule(TranslatableField::SupportDescription, "v2".to_string());
        debouncer.schedule(TranslatableField::SupportDescription, "v3".to_string());
        assert_eq!(debouncer.pending_count(), 1);

        translator.gate.add_permits(2);
        settle().await;

        assert_eq!(translator.calls(), 2);
        assert_eq!(translator.last_text(), "v3");
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn pending_entry_clears_after_dispatch() {
        let translator = CountingTranslator::new();
        let (debouncer, _rx) = FieldDebouncer::new(translator.clone(), WINDOW);

        debouncer.schedule(TranslatableField::SupportDescription, "Salam".to_string());
        assert_eq!(debouncer.pending_count(), 1);
        settle().await;
        assert_eq!(debouncer.pending_count(), 0);
    }
}
