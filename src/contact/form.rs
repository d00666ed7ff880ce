use tracing::warn;

use super::model::{ContactSettings, TranslatableField};
use crate::i18n::Lang;
use crate::translate::TranslateOutcome;

/// Admin form state for the contact settings editor.
///
/// Source-language edits are stored as typed; translation suggestions for
/// the derived languages arrive later through [`apply_outcome`] and land
/// last-write-wins.
///
/// [`apply_outcome`]: ContactForm::apply_outcome
#[derive(Debug, Default)]
pub struct ContactForm {
    record: ContactSettings,
    translation_warning: bool,
}

impl ContactForm {
    pub fn new(record: ContactSettings) -> Self {
        Self {
            record,
            translation_warning: false,
        }
    }

    pub fn record(&self) -> &ContactSettings {
        &self.record
    }

    /// Mutable access for the plain (non-translatable) fields.
    pub fn record_mut(&mut self) -> &mut ContactSettings {
        &mut self.record
    }

    pub fn into_record(self) -> ContactSettings {
        self.record
    }

    /// Store a source-language keystroke for a translatable field.
    pub fn set_source(&mut self, field: TranslatableField, value: &str) {
        self.record.field_mut(field).az = value.to_string();
    }

    /// Manual edit of one language variant, overriding any suggestion.
    pub fn set_derived(&mut self, field: TranslatableField, lang: Lang, value: &str) {
        self.record.field_mut(field).set(lang, value);
    }

    /// Merge a delivered translation into the field's derived variants.
    ///
    /// Last write wins for the field the translation belongs to: a
    /// suggestion landing after a manual edit of that same field replaces
    /// it, the same way typing replaces an earlier suggestion. Other fields
    /// are never touched. A failed outcome merges as empty strings and
    /// raises the warning flag instead of blocking the form.
    pub fn apply_outcome(&mut self, field: TranslatableField, outcome: TranslateOutcome) {
        if outcome.is_failed() {
            warn!("Translation for {:?} failed; leaving suggestions empty", field);
            self.translation_warning = true;
        }

        let pair = outcome.into_pair();
        let entry = self.record.field_mut(field);
        entry.en = pair.en;
        entry.ru = pair.ru;
    }

    /// Whether any translation attempt failed since the flag was last taken.
    /// The UI shows this as a non-blocking warning; saving stays possible.
    pub fn take_translation_warning(&mut self) -> bool {
        std::mem::take(&mut self.translation_warning)
    }
}
