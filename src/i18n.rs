use serde::{Deserialize, Serialize};

/// Languages the contact settings are maintained in.
///
/// Azerbaijani is the source language the admin types in; English and Russian
/// are derived from it by the translation assist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Az,
    En,
    Ru,
}

impl Lang {
    pub fn as_code(&self) -> &'static str {
        match self {
            Lang::Az => "az",
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "az" => Some(Lang::Az),
            "en" => Some(Lang::En),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }
}

/// Represents a string with translations in multiple languages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiLingualString {
    pub az: String,
    pub en: String,
    pub ru: String,
}

impl MultiLingualString {
    /// Seed from source-language text, with the derived variants left empty
    /// until a translation (or a manual edit) fills them in.
    pub fn from_source(text: &str) -> Self {
        Self {
            az: text.to_string(),
            en: String::new(),
            ru: String::new(),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Az => &self.az,
            Lang::En => &self.en,
            Lang::Ru => &self.ru,
        }
    }

    pub fn set(&mut self, lang: Lang, value: &str) {
        match lang {
            Lang::Az => self.az = value.to_string(),
            Lang::En => self.en = value.to_string(),
            Lang::Ru => self.ru = value.to_string(),
        }
    }
}
