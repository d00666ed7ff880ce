pub mod debounce;
pub mod interface;
pub mod mymemory;

pub use debounce::FieldDebouncer;
pub use interface::{TranslateError, TranslateOutcome, TranslationPair, TranslatorInterface};
pub use mymemory::MyMemoryClient;
