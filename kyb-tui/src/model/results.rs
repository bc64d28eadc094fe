//! Results page state

use kyb_core::services::ResultBrowser;
use kyb_core::types::Collected;
use kyb_core::SceneGraph;

/// Scene and browser of a completed session.
#[derive(Debug)]
pub struct ResultsState {
    pub scene: SceneGraph,
    pub browser: ResultBrowser,
    /// Answers the lookups were made with
    pub collected: Collected,
}

impl ResultsState {
    /// Tear the browser's nodes down, leaving an empty scene.
    pub fn close(mut self) {
        self.browser.destroy(&mut self.scene);
    }
}
