use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::{Lang, MultiLingualString};

/// Contact settings record (singleton, edited in the admin panel)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,

    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,

    /// Free-text groups carrying all three language variants. The `az`
    /// variant is authoritative; `en`/`ru` are assist suggestions the admin
    /// may override before saving.
    #[serde(default)]
    pub support_description: MultiLingualString,
    #[serde(default)]
    pub weekday_hours: MultiLingualString,
    #[serde(default)]
    pub saturday_hours: MultiLingualString,
    #[serde(default)]
    pub sunday_hours: MultiLingualString,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The translatable free-text groups, used as debounce keys and for routing
/// delivered translations back into the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslatableField {
    SupportDescription,
    WeekdayHours,
    SaturdayHours,
    SundayHours,
}

impl ContactSettings {
    pub fn field(&self, field: TranslatableField) -> &MultiLingualString {
        match field {
            TranslatableField::SupportDescription => &self.support_description,
            TranslatableField::WeekdayHours => &self.weekday_hours,
            TranslatableField::SaturdayHours => &self.saturday_hours,
            TranslatableField::SundayHours => &self.sunday_hours,
        }
    }

    pub fn field_mut(&mut self, field: TranslatableField) -> &mut MultiLingualString {
        match field {
            TranslatableField::SupportDescription => &mut self.support_description,
            TranslatableField::WeekdayHours => &mut self.weekday_hours,
            TranslatableField::SaturdayHours => &mut self.saturday_hours,
            TranslatableField::SundayHours => &mut self.sunday_hours,
        }
    }

    /// Read-only view in one language, for the public contact page.
    pub fn localized(&self, lang: Lang) -> LocalizedContact<'_> {
        LocalizedContact {
            address: &self.address,
            email: &self.email,
            phone: &self.phone,
            support_description: self.support_description.get(lang),
            weekday_hours: self.weekday_hours.get(lang),
            saturday_hours: self.saturday_hours.get(lang),
            sunday_hours: self.sunday_hours.get(lang),
        }
    }
}

/// One-language projection of the record
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedContact<'a> {
    pub address: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub support_description: &'a str,
    pub weekday_hours: &'a str,
    pub saturday_hours: &'a str,
    pub sunday_hours: &'a str,
}
