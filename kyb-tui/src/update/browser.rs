//! Result browser updates

use crate::message::BrowserMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: BrowserMessage) {
    let Some(results) = app.results.as_mut() else {
        return;
    };
    let scene = &mut results.scene;
    let browser = &mut results.browser;

    match msg {
        BrowserMessage::Next => browser.next(scene),
        BrowserMessage::Prev => browser.prev(scene),
        BrowserMessage::SwitchPanel => browser.switch_focus(),
        BrowserMessage::Toggle(kind) => {
            if !browser.toggle(kind, scene) {
                log::debug!("No {} to show for the current record", kind.id());
            }
        }
    }
}

/// Leave any active sub-list, in either panel; with none active, close the results.
pub fn go_back(app: &mut App) {
    let drilled_out = app
        .results
        .as_mut()
        .is_some_and(|r| r.browser.leave_drills(&mut r.scene));

    if !drilled_out {
        app.close_results();
        app.clear_status();
    }
}

#[cfg(test)]
mod tests {
    use kyb_core::services::{ActiveList, PanelFocus, ResultBrowser, SubListKind};
    use kyb_core::types::{Collected, JoinedResult, LookupPayload, LookupResult, Record, RecordValue};
    use kyb_core::SceneGraph;

    use super::*;
    use crate::message::AppMessage;
    use crate::model::{Page, ResultsState};
    use crate::update::update as app_update;

    fn brand(name: &str, procedures: usize) -> Record {
        let list = (1..=procedures)
            .map(|i| RecordValue::scalar(format!("procedure {i}")))
            .collect();
        Record::new()
            .with("name", RecordValue::scalar(name))
            .with("procedures", RecordValue::List(list))
    }

    fn app_with_brands() -> App {
        app_with(LookupResult::not_requested())
    }

    fn app_with(first: LookupResult) -> App {
        let joined = JoinedResult {
            first,
            second: LookupResult::Ok(LookupPayload::new(
                200,
                None,
                vec![brand("A", 2), brand("B", 1)],
            )),
        };
        let mut scene = SceneGraph::new();
        let browser = ResultBrowser::build(&joined, &mut scene, &crate::i18n::browser_texts())
            .unwrap_or_else(|e| panic!("build failed: {e}"));

        let mut app = App::new();
        app.show_results(ResultsState {
            scene,
            browser,
            collected: Collected::default(),
        });
        app
    }

    fn cursor(app: &App) -> (ActiveList, usize) {
        let nav = app
            .results
            .as_ref()
            .and_then(|r| r.browser.focused_navigator())
            .map(|n| n.cursor());
        nav.map(|c| (c.active, c.index))
            .unwrap_or_else(|| panic!("no navigator"))
    }

    #[test]
    fn focus_starts_on_brand_when_company_is_empty() {
        let app = app_with_brands();
        let focus = app.results.as_ref().map(|r| r.browser.focus());
        assert_eq!(focus, Some(PanelFocus::Brand));
    }

    #[test]
    fn next_wraps() {
        let mut app = app_with_brands();
        update(&mut app, BrowserMessage::Next);
        assert_eq!(cursor(&app), (ActiveList::Main, 1));
        update(&mut app, BrowserMessage::Next);
        assert_eq!(cursor(&app), (ActiveList::Main, 0));
        update(&mut app, BrowserMessage::Prev);
        assert_eq!(cursor(&app), (ActiveList::Main, 1));
    }

    #[test]
    fn go_back_leaves_drill_before_closing() {
        let mut app = app_with_brands();
        update(&mut app, BrowserMessage::Toggle(SubListKind::Procedures));
        assert!(matches!(cursor(&app).0, ActiveList::Sub { .. }));

        app_update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::Results);
        assert_eq!(cursor(&app), (ActiveList::Main, 0));

        app_update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::Home);
        assert!(app.results.is_none());
    }

    #[test]
    fn go_back_leaves_a_drill_in_the_other_panel() {
        let company = Record::new().with("razon_social", RecordValue::scalar("Acme"));
        let mut app = app_with(LookupResult::Ok(LookupPayload::new(200, None, vec![company])));
        update(&mut app, BrowserMessage::SwitchPanel);
        update(&mut app, BrowserMessage::Toggle(SubListKind::Procedures));
        update(&mut app, BrowserMessage::SwitchPanel);

        let brand_drilled = |app: &App| {
            app.results
                .as_ref()
                .and_then(|r| r.browser.panel(PanelFocus::Brand).navigator())
                .and_then(|n| n.drilled())
        };
        assert_eq!(brand_drilled(&app), Some(SubListKind::Procedures));

        app_update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::Results);
        assert_eq!(brand_drilled(&app), None);
        assert_eq!(cursor(&app), (ActiveList::Main, 0));

        app_update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::Home);
    }

    #[test]
    fn messages_without_results_are_ignored() {
        let mut app = App::new();
        update(&mut app, BrowserMessage::Next);
        update(&mut app, BrowserMessage::Toggle(SubListKind::ProductsAndServices));
        assert!(app.results.is_none());
    }
}
