//! Dialog script, prompt answers and dialog outcomes

use serde::{Deserialize, Serialize};

pub const STEP_COMPANY: &str = "company";
pub const STEP_RFC: &str = "rfc";
pub const STEP_BRAND: &str = "brand";

/// One prompt of a dialog script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptStep {
    /// Key under which the answer is collected
    pub name: String,
    pub message: String,
    pub expects_text: bool,
    /// Whether an empty answer is rejected
    pub required: bool,
    /// Shown when a required step is answered empty
    pub required_message: String,
}

impl PromptStep {
    pub fn required(
        name: impl Into<String>,
        message: impl Into<String>,
        required_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            expects_text: true,
            required: true,
            required_message: required_message.into(),
        }
    }

    pub fn optional(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            expects_text: true,
            required: false,
            required_message: String::new(),
        }
    }
}

/// Localized texts of the KYB dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KybPromptTexts {
    pub company: String,
    pub company_required: String,
    pub rfc: String,
    pub brand: String,
}

impl Default for KybPromptTexts {
    fn default() -> Self {
        Self {
            company: "Welcome to KYB.\nPlease enter the company's legal name:".to_string(),
            company_required: "Sorry, the legal name is required for the search.".to_string(),
            rfc: "Enter the RFC:".to_string(),
            brand: "Enter the brand:".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogScript {
    steps: Vec<PromptStep>,
}

impl DialogScript {
    pub fn new(steps: Vec<PromptStep>) -> Self {
        Self { steps }
    }

    /// The KYB data-collection script: company (required), RFC, brand.
    pub fn kyb(texts: &KybPromptTexts) -> Self {
        Self::new(vec![
            PromptStep::required(STEP_COMPANY, &texts.company, &texts.company_required),
            PromptStep::optional(STEP_RFC, &texts.rfc),
            PromptStep::optional(STEP_BRAND, &texts.brand),
        ])
    }

    pub fn steps(&self) -> &[PromptStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Answer delivered by the prompt channel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptResponse {
    /// `false` when the user dismissed the prompt
    pub submitted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl PromptResponse {
    pub fn submitted(text: impl Into<String>) -> Self {
        Self {
            submitted: true,
            text: Some(text.into()),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            submitted: false,
            text: None,
        }
    }

    /// Submitted text with surrounding whitespace removed; empty when absent.
    pub fn trimmed_text(&self) -> &str {
        self.text.as_deref().map_or("", str::trim)
    }
}

/// Values gathered by a completed dialog, in script order.
///
/// `None` marks an optional step the user answered with an empty field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Collected {
    fields: Vec<(String, Option<String>)>,
}

impl Collected {
    pub(crate) fn record(&mut self, name: &str, value: Option<String>) {
        self.fields.push((name.to_string(), value));
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether the step was answered at all (possibly with an empty value).
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// What to do when a required step is submitted empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyRequiredPolicy {
    /// Explain, then show the same step again.
    #[default]
    Reprompt,
    /// Explain, then end the dialog.
    Abort,
}

/// Why a dialog (or a whole session) ended without results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail")]
pub enum AbortReason {
    /// The user dismissed the prompt of this step.
    Cancelled { step: String },
    /// A required step was left empty under [`EmptyRequiredPolicy::Abort`].
    EmptyRequired { step: String },
    /// The prompt or rendering channel failed.
    ChannelFailure(String),
}

/// Terminal state of a dialog run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Completed(Collected),
    Aborted(AbortReason),
}

impl DialogOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kyb_script_shape() {
        let script = DialogScript::kyb(&KybPromptTexts::default());
        let names: Vec<&str> = script.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, [STEP_COMPANY, STEP_RFC, STEP_BRAND]);
        assert!(script.steps()[0].required);
        assert!(!script.steps()[1].required);
        assert!(!script.steps()[2].required);
    }

    #[test]
    fn collected_distinguishes_null_from_missing() {
        let mut collected = Collected::default();
        collected.record(STEP_COMPANY, Some("Acme".into()));
        collected.record(STEP_RFC, None);

        assert_eq!(collected.value(STEP_COMPANY), Some("Acme"));
        assert_eq!(collected.value(STEP_RFC), None);
        assert!(collected.contains(STEP_RFC));
        assert!(!collected.contains(STEP_BRAND));
    }

    #[test]
    fn trimmed_text_handles_missing_text() {
        let response = PromptResponse {
            submitted: true,
            text: None,
        };
        assert_eq!(response.trimmed_text(), "");
        assert_eq!(PromptResponse::submitted("  Acme ").trimmed_text(), "Acme");
    }

    #[test]
    fn policy_deserializes_lowercase() {
        let policy: EmptyRequiredPolicy = serde_json::from_str(r#""abort""#)
            .unwrap_or(EmptyRequiredPolicy::Reprompt);
        assert_eq!(policy, EmptyRequiredPolicy::Abort);
    }
}
