//! English (en-US)

use super::keys::{
    ActionTexts, BrowserCaptionTexts, CommonTexts, HelpActionTexts, HelpTexts, HintTexts,
    HomeTexts, KeyNames, ModalTexts, PromptTexts, ResultsTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "KYB Explorer",
        confirm: "Confirm",
        cancel: "Cancel",
        close: "Close",
        quit: "Quit",
        error: "Error",
        back: "Back",
        next: "Next",
        prev: "Prev",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            sub_lists: "1/2",
        },
        actions: ActionTexts {
            start: "Start",
            navigate: "Navigate",
            switch_panel: "Switch panel",
            drill: "Sub-lists",
            back: "Back",
            help: "Help",
            submit: "Submit",
        },
    },

    home: HomeTexts {
        welcome_title: "Know Your Business",
        welcome_message: "Look up a company and its brand in the public registries.",
        start_hint: "Press Enter to start a new search",
        session_in_progress: "Search in progress...",
    },

    prompts: PromptTexts {
        company: "Welcome to KYB.\nPlease enter the company's legal name:",
        company_required: "Sorry, the legal name is required for the search.",
        rfc: "Enter the RFC:",
        brand: "Enter the brand:",
    },

    browser: BrowserCaptionTexts {
        results_title: "KYB results",
        company_title: "Company registry",
        brand_title: "Brand registry",
        company_record: "Company",
        brand_record: "Brand",
        procedures: "Procedures",
        products_and_services: "Products & services",
        back: "Back",
        no_brand_query: "No brand query performed",
        lookup_failed: "Lookup failed",
        no_match: "No match found",
        no_records: "No records returned",
        unexpected_status: "Unexpected registry status",
    },

    results: ResultsTexts {
        header: "Search",
        not_given: "-",
        company_field: "Legal name",
        rfc_field: "RFC",
        brand_field: "Brand",
    },

    status: StatusTexts {
        config_fallback: "Configuration could not be read, using defaults (see log)",
        session_running: "A search is already running",
        session_cancelled: "Search cancelled",
        required_missing: "Search aborted: the legal name is required",
        channel_failed: "Search aborted: the prompt could not be shown",
        build_failed: "Results could not be displayed",
    },

    modal: ModalTexts {
        prompt_title: "KYB",
        input_label: "Answer",
        notice_title: "Notice",
    },

    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        results_shortcuts: "Results shortcuts",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            start_session: "Start a search",
            next_prev: "Next / previous record",
            switch_panel: "Switch registry panel",
            procedures: "Procedures / back",
            products: "Products & services / back",
            back: "Leave sub-list / close results",
            quit: "Quit",
        },
    },
};
