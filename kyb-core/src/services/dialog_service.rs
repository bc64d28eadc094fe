//! Dialog flow controller

use crate::error::CoreResult;
use crate::traits::PromptChannel;
use crate::types::{
    AbortReason, Collected, DialogOutcome, DialogScript, EmptyRequiredPolicy, PromptStep,
};

/// Drives a [`DialogScript`] one step at a time over a prompt channel.
pub struct DialogService {
    script: DialogScript,
    policy: EmptyRequiredPolicy,
}

/// Result of a single step.
enum StepOutcome {
    Answered(Option<String>),
    Aborted(AbortReason),
}

impl DialogService {
    #[must_use]
    pub fn new(script: DialogScript, policy: EmptyRequiredPolicy) -> Self {
        Self { script, policy }
    }

    pub fn script(&self) -> &DialogScript {
        &self.script
    }

    /// Run the whole script.
    ///
    /// Never fails: a broken channel is logged and reported as
    /// [`AbortReason::ChannelFailure`].
    pub async fn run(&self, channel: &dyn PromptChannel) -> DialogOutcome {
        match self.run_steps(channel).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Dialog aborted by channel failure: {e}");
                DialogOutcome::Aborted(AbortReason::ChannelFailure(e.to_string()))
            }
        }
    }

    async fn run_steps(&self, channel: &dyn PromptChannel) -> CoreResult<DialogOutcome> {
        let mut collected = Collected::default();

        for step in self.script.steps() {
            match self.run_step(channel, step).await? {
                StepOutcome::Answered(value) => collected.record(&step.name, value),
                StepOutcome::Aborted(reason) => return Ok(DialogOutcome::Aborted(reason)),
            }
        }

        log::info!("Dialog completed with {} field(s)", collected.len());
        Ok(DialogOutcome::Completed(collected))
    }

    async fn run_step(
        &self,
        channel: &dyn PromptChannel,
        step: &PromptStep,
    ) -> CoreResult<StepOutcome> {
        loop {
            let response = channel.prompt(&step.message, step.expects_text).await?;

            if !response.submitted {
                log::info!("Dialog cancelled at step '{}'", step.name);
                return Ok(StepOutcome::Aborted(AbortReason::Cancelled {
                    step: step.name.clone(),
                }));
            }

            let text = response.trimmed_text();
            if !text.is_empty() {
                return Ok(StepOutcome::Answered(Some(text.to_string())));
            }
            if !step.required {
                return Ok(StepOutcome::Answered(None));
            }

            log::info!("Required step '{}' answered empty", step.name);
            // The explanation is informational; its own answer is ignored.
            channel.prompt(&step.required_message, false).await?;

            if self.policy == EmptyRequiredPolicy::Abort {
                return Ok(StepOutcome::Aborted(AbortReason::EmptyRequired {
                    step: step.name.clone(),
                }));
            }
        }
    }
}
