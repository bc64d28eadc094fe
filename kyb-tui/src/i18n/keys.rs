//! Translation keys
//!
//! One struct per UI area, checked at compile time.
//!
//! ## Grouping
//!
//! 1. Text belongs to the component it appears in (`home.*`, `browser.*`)
//! 2. Modal contents live under `modal.*`
//! 3. Words reused in several places live under `common.*`
//! 4. Key names and key hints live under `hints.*`

/// Root of all translated texts
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub home: HomeTexts,
    /// Dialog prompts sent by the session
    pub prompts: PromptTexts,
    /// Captions and messages of the result browser
    pub browser: BrowserCaptionTexts,
    pub results: ResultsTexts,
    pub status: StatusTexts,
    pub modal: ModalTexts,
    pub help: HelpTexts,
}

// ============================================================================
// Common
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
    pub error: &'static str,
    pub back: &'static str,
    pub next: &'static str,
    pub prev: &'static str,
}

// ============================================================================
// Key hints
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str,
    pub sub_lists: &'static str,
}

pub struct ActionTexts {
    pub start: &'static str,
    pub navigate: &'static str,
    pub switch_panel: &'static str,
    pub drill: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub submit: &'static str,
}

// ============================================================================
// Pages
// ============================================================================

pub struct HomeTexts {
    pub welcome_title: &'static str,
    pub welcome_message: &'static str,
    pub start_hint: &'static str,
    pub session_in_progress: &'static str,
}

pub struct ResultsTexts {
    pub header: &'static str,
    /// Placeholder for an optional answer left empty
    pub not_given: &'static str,
    pub company_field: &'static str,
    pub rfc_field: &'static str,
    pub brand_field: &'static str,
}

// ============================================================================
// Session texts handed to the core
// ============================================================================

pub struct PromptTexts {
    pub company: &'static str,
    pub company_required: &'static str,
    pub rfc: &'static str,
    pub brand: &'static str,
}

pub struct BrowserCaptionTexts {
    pub results_title: &'static str,
    pub company_title: &'static str,
    pub brand_title: &'static str,
    pub company_record: &'static str,
    pub brand_record: &'static str,
    pub procedures: &'static str,
    pub products_and_services: &'static str,
    pub back: &'static str,
    pub no_brand_query: &'static str,
    pub lookup_failed: &'static str,
    pub no_match: &'static str,
    pub no_records: &'static str,
    pub unexpected_status: &'static str,
}

// ============================================================================
// Status bar
// ============================================================================

pub struct StatusTexts {
    pub config_fallback: &'static str,
    pub session_running: &'static str,
    pub session_cancelled: &'static str,
    pub required_missing: &'static str,
    pub channel_failed: &'static str,
    pub build_failed: &'static str,
}

// ============================================================================
// Modals and help
// ============================================================================

pub struct ModalTexts {
    pub prompt_title: &'static str,
    pub input_label: &'static str,
    pub notice_title: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub results_shortcuts: &'static str,
    pub close_hint: &'static str,
    pub actions: HelpActionTexts,
}

pub struct HelpActionTexts {
    pub start_session: &'static str,
    pub next_prev: &'static str,
    pub switch_panel: &'static str,
    pub procedures: &'static str,
    pub products: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
}
