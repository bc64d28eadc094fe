//! Internationalization
//!
//! Plain Rust structs per language: type-checked at compile time, no runtime
//! lookup. The session's prompts and the browser captions come from here too,
//! so the whole dialog follows the selected language.

use std::sync::atomic::{AtomicUsize, Ordering};

use kyb_core::services::BrowserTexts;
use kyb_core::types::KybPromptTexts;

mod en_us;
mod es_mx;
pub mod keys;

pub use keys::*;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    EnUs,
    EsMx,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::EsMx]
    }

    /// BCP 47 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::EsMx => "es-MX",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "es-MX" | "es" => Some(Language::EsMx),
            _ => None,
        }
    }
}

/// Current language index
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// Translations of the current language
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &es_mx::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::EsMx => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// Dialog prompts in the current language.
pub fn kyb_prompt_texts() -> KybPromptTexts {
    prompt_texts_for(t())
}

/// Browser captions and messages in the current language.
pub fn browser_texts() -> BrowserTexts {
    browser_texts_for(t())
}

fn prompt_texts_for(tr: &Translations) -> KybPromptTexts {
    let p = &tr.prompts;
    KybPromptTexts {
        company: p.company.to_string(),
        company_required: p.company_required.to_string(),
        rfc: p.rfc.to_string(),
        brand: p.brand.to_string(),
    }
}

fn browser_texts_for(tr: &Translations) -> BrowserTexts {
    let b = &tr.browser;
    BrowserTexts {
        results_title: b.results_title.to_string(),
        company_title: b.company_title.to_string(),
        brand_title: b.brand_title.to_string(),
        company_record: b.company_record.to_string(),
        brand_record: b.brand_record.to_string(),
        procedures: b.procedures.to_string(),
        products_and_services: b.products_and_services.to_string(),
        back: b.back.to_string(),
        no_brand_query: b.no_brand_query.to_string(),
        lookup_failed: b.lookup_failed.to_string(),
        no_match: b.no_match.to_string(),
        no_records: b.no_records.to_string(),
        unexpected_status: b.unexpected_status.to_string(),
    }
}
