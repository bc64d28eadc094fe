//! Domain types

mod dialog;
mod lookup;
mod scene;

pub use dialog::{
    AbortReason, Collected, DialogOutcome, DialogScript, EmptyRequiredPolicy, KybPromptTexts,
    PromptResponse, PromptStep, STEP_BRAND, STEP_COMPANY, STEP_RFC,
};
pub use lookup::{
    JoinedResult, LookupPayload, LookupResult, Record, RecordValue, RegistryQuery, Unavailable,
};
pub use scene::{NodeId, NodeKind, NodeSpec, Offset};
