//! Core engine for the Barsense admin panel's multilingual contact-settings
//! editor: translation assist (translator + per-field debouncer + form sync),
//! the contact-settings record, and the REST client that loads and saves it.

pub mod api;
pub mod assist;
pub mod config;
pub mod contact;
pub mod i18n;
pub mod translate;

pub use assist::AssistEngine;
pub use config::Config;
pub use contact::{ContactForm, ContactSettings, TranslatableField};
pub use i18n::{Lang, MultiLingualString};
