//! Session event updates

use kyb_core::services::{ResultBrowser, SessionOutcome};
use kyb_core::types::AbortReason;
use kyb_core::SceneGraph;

use crate::backend::BackendEvent;
use crate::i18n::{self, t};
use crate::model::{App, Page, ResultsState};

pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::Prompt {
            message,
            expects_text,
            reply,
        } => {
            app.modal.show_prompt(message, expects_text, reply);
        }

        BackendEvent::SessionFinished(outcome) => {
            app.session_active = false;
            finish_session(app, outcome);
        }
    }
}

fn finish_session(app: &mut App, outcome: SessionOutcome) {
    match outcome {
        SessionOutcome::Completed { collected, results } => {
            let mut scene = SceneGraph::new();
            match ResultBrowser::build(&results, &mut scene, &i18n::browser_texts()) {
                Ok(browser) => {
                    app.show_results(ResultsState {
                        scene,
                        browser,
                        collected,
                    });
                    app.clear_status();
                }
                Err(e) => {
                    log::error!("Cannot display KYB results: {e}");
                    app.modal.show_error(t().common.error, &e.to_string());
                    app.set_status(t().status.build_failed);
                }
            }
        }

        SessionOutcome::Aborted(reason) => {
            if app.modal.is_prompt() {
                app.modal.close();
            }
            app.current_page = if app.results.is_some() {
                Page::Results
            } else {
                Page::Home
            };
            app.set_status(abort_status(&reason));
        }
    }
}

fn abort_status(reason: &AbortReason) -> &'static str {
    let status = &t().status;
    match reason {
        AbortReason::Cancelled { .. } => status.session_cancelled,
        AbortReason::EmptyRequired { .. } => status.required_missing,
        AbortReason::ChannelFailure(_) => status.channel_failed,
    }
}

#[cfg(test)]
mod tests {
    use kyb_core::services::PanelFocus;
    use kyb_core::types::{
        Collected, JoinedResult, LookupPayload, LookupResult, PromptResponse, Record, RecordValue,
    };
    use tokio::sync::oneshot;

    use super::*;

    fn completed(first: LookupResult, second: LookupResult) -> BackendEvent {
        BackendEvent::SessionFinished(SessionOutcome::Completed {
            collected: Collected::default(),
            results: JoinedResult { first, second },
        })
    }

    fn company(name: &str) -> Record {
        Record::new().with("name", RecordValue::scalar(name))
    }

    #[test]
    fn prompt_opens_modal() {
        let (tx, _rx) = oneshot::channel::<PromptResponse>();
        let mut app = App::new();
        update(
            &mut app,
            BackendEvent::Prompt {
                message: "Enter the RFC:".to_string(),
                expects_text: true,
                reply: tx,
            },
        );
        assert!(app.modal.is_prompt());
        assert!(app.modal.has_pending_reply());
    }

    #[test]
    fn completed_session_shows_results() {
        let mut app = App::new();
        app.session_active = true;
        update(
            &mut app,
            completed(
                LookupResult::Ok(LookupPayload::new(200, None, vec![company("Acme")])),
                LookupResult::failed("connection refused"),
            ),
        );

        assert!(!app.session_active);
        assert_eq!(app.current_page, Page::Results);
        let results = app.results.as_ref();
        assert_eq!(results.map(|r| r.browser.focus()), Some(PanelFocus::Company));
        let brand_message = results.and_then(|r| r.browser.panel(PanelFocus::Brand).message());
        assert!(brand_message.is_some_and(|m| m.contains("connection refused")));
    }

    #[test]
    fn new_results_replace_old_ones() {
        let mut app = App::new();
        for name in ["First", "Second"] {
            update(
                &mut app,
                completed(
                    LookupResult::Ok(LookupPayload::new(200, None, vec![company(name)])),
                    LookupResult::not_requested(),
                ),
            );
        }

        let scene = app.results.as_ref().map(|r| &r.scene);
        assert_eq!(scene.map(|s| s.roots().len()), Some(1));
    }

    #[test]
    fn aborted_session_reports_reason() {
        let mut app = App::new();
        app.session_active = true;
        update(
            &mut app,
            BackendEvent::SessionFinished(SessionOutcome::Aborted(AbortReason::Cancelled {
                step: "company".to_string(),
            })),
        );

        assert!(!app.session_active);
        assert_eq!(app.current_page, Page::Home);
        assert_eq!(app.status_message.as_deref(), Some(t().status.session_cancelled));
    }
}
