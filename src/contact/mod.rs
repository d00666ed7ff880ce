pub mod form;
pub mod model;

pub use form::ContactForm;
pub use model::{ContactSettings, LocalizedContact, TranslatableField};
