//! Display languages
//!
//! The ledger itself is language-neutral; labels for kinds, categories, export
//! headers and months are looked up through [`Language`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language used for every user-facing label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "tr")]
    Turkish,
}

impl Language {
    /// Header row of the export file
    pub fn export_header(self) -> [&'static str; 5] {
        match self {
            Language::English => ["Date", "Type", "Category", "Description", "Amount"],
            Language::Turkish => ["Tarih", "Tür", "Kategori", "Açıklama", "Tutar"],
        }
    }

    /// Localized month name
    pub fn month_label(self, month: chrono::Month) -> &'static str {
        use chrono::Month::*;
        match self {
            Language::English => month.name(),
            Language::Turkish => match month {
                January => "Ocak",
                February => "Şubat",
                March => "Mart",
                April => "Nisan",
                May => "Mayıs",
                June => "Haziran",
                July => "Temmuz",
                August => "Ağustos",
                September => "Eylül",
                October => "Ekim",
                November => "Kasım",
                December => "Aralık",
            },
        }
    }
}
