use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::content::{BookingCatalog, BookingOption};

/// Shared flag flipped when the owner of a pending load goes away.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Identifies one load attempt of the scheduling script.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    token: CancelToken,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// How one load attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// The tag loaded but the widget API never appeared.
    MissingApi,
    Errored,
    TimedOut,
}

impl LoadOutcome {
    /// Outcome of a script `load` (`loaded`) or `error` event.
    pub fn from_event(loaded: bool, api_available: bool) -> Self {
        match (loaded, api_available) {
            (true, true) => LoadOutcome::Loaded,
            (true, false) => LoadOutcome::MissingApi,
            (false, _) => LoadOutcome::Errored,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptState {
    Unloaded,
    Loading,
    Ready,
    Failed,
}

/// Lazily acquires the third-party scheduling script, once.
#[derive(Debug, Clone)]
pub struct ScriptLoader {
    state: ScriptState,
    generation: u64,
    token: CancelToken,
}

impl Default for ScriptLoader {
    fn default() -> Self {
        Self::new(CancelToken::new())
    }
}

impl ScriptLoader {
    pub fn new(token: CancelToken) -> Self {
        Self {
            state: ScriptState::Unloaded,
            generation: 0,
            token,
        }
    }

    pub fn state(&self) -> ScriptState {
        self.state
    }

    /// Starts a load attempt. Returns `None` while a load is in flight or the
    /// script is already available, so callers inject at most one tag.
    pub fn begin(&mut self) -> Option<LoadTicket> {
        match self.state {
            ScriptState::Loading | ScriptState::Ready => None,
            ScriptState::Unloaded | ScriptState::Failed => {
                if self.token.is_cancelled() {
                    return None;
                }
                self.generation += 1;
                self.state = ScriptState::Loading;
                Some(LoadTicket {
                    generation: self.generation,
                    token: self.token.clone(),
                })
            }
        }
    }

    fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation && !ticket.is_cancelled()
    }

    /// The script signalled load. A late load for the current attempt still
    /// recovers a timed-out state.
    pub fn complete(&mut self, ticket: &LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match self.state {
            ScriptState::Loading | ScriptState::Failed => {
                self.state = ScriptState::Ready;
                true
            }
            ScriptState::Unloaded | ScriptState::Ready => false,
        }
    }

    /// Timeout, script error, or a missing widget API after load.
    pub fn fail(&mut self, ticket: &LoadTicket) -> bool {
        if !self.is_current(ticket) || self.state != ScriptState::Loading {
            return false;
        }
        self.state = ScriptState::Failed;
        true
    }

    /// Applies the end of an attempt. `false` means the ticket is stale or
    /// cancelled and the current attempt, including its timeout, is untouched.
    pub fn settle(&mut self, ticket: &LoadTicket, outcome: LoadOutcome) -> bool {
        match outcome {
            LoadOutcome::Loaded => self.complete(ticket),
            LoadOutcome::MissingApi | LoadOutcome::Errored | LoadOutcome::TimedOut => {
                self.fail(ticket)
            }
        }
    }

    /// The script turned out to be present already, e.g. from an earlier mount.
    pub fn mark_ready(&mut self) {
        self.state = ScriptState::Ready;
    }
}

/// What the booking modal shows.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingView {
    Closed,
    Selecting,
    Loading(BookingOption),
    Failed(BookingOption),
    Widget(BookingOption),
}

#[derive(Debug, Clone, PartialEq)]
enum Stage {
    Closed,
    Selecting,
    OptionChosen(BookingOption),
}

/// Selection half of the booking modal.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFlow {
    free_plan: bool,
    default_option: Option<BookingOption>,
    stage: Stage,
}

impl BookingFlow {
    pub fn new(free_plan: bool, default_option: Option<BookingOption>) -> Self {
        Self {
            free_plan,
            default_option: default_option.filter(BookingOption::is_offerable),
            stage: Stage::Closed,
        }
    }

    pub fn from_catalog(catalog: &BookingCatalog) -> Self {
        Self::new(
            catalog.is_free_plan(),
            catalog.general_consultation().cloned(),
        )
    }

    pub fn is_open(&self) -> bool {
        self.stage != Stage::Closed
    }

    /// Free-plan visitors go straight to the default option. Without a
    /// usable default they fall back to picking one.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.stage = match (&self.default_option, self.free_plan) {
            (Some(option), true) => Stage::OptionChosen(option.clone()),
            _ => Stage::Selecting,
        };
    }

    pub fn select(&mut self, option: BookingOption) -> bool {
        if self.stage != Stage::Selecting || !option.is_offerable() {
            return false;
        }
        self.stage = Stage::OptionChosen(option);
        true
    }

    /// Only the paid path can return to the option list.
    pub fn back(&mut self) -> bool {
        if self.free_plan || !matches!(self.stage, Stage::OptionChosen(_)) {
            return false;
        }
        self.stage = Stage::Selecting;
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.free_plan && matches!(self.stage, Stage::OptionChosen(_))
    }

    /// Hard reset regardless of the current stage.
    pub fn close(&mut self) {
        self.stage = Stage::Closed;
    }

    pub fn selected(&self) -> Option<&BookingOption> {
        match &self.stage {
            Stage::OptionChosen(option) => Some(option),
            Stage::Closed | Stage::Selecting => None,
        }
    }

    pub fn view(&self, script: ScriptState) -> BookingView {
        match &self.stage {
            Stage::Closed => BookingView::Closed,
            Stage::Selecting => BookingView::Selecting,
            Stage::OptionChosen(option) => match script {
                ScriptState::Ready => BookingView::Widget(option.clone()),
                ScriptState::Failed => BookingView::Failed(option.clone()),
                ScriptState::Unloaded | ScriptState::Loading => {
                    BookingView::Loading(option.clone())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BookingIcon;

    fn option(id: &str, url: Option<&str>) -> BookingOption {
        BookingOption {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            duration: "30 min".to_string(),
            icon: BookingIcon::MessageCircle,
            calendly_url: url.map(str::to_string),
        }
    }

    fn general() -> BookingOption {
        option("general-consultation", Some("https://calendly.com/x/general"))
    }

    #[test]
    fn test_paid_plan_starts_with_selection() {
        let mut flow = BookingFlow::new(false, Some(general()));
        assert_eq!(flow.view(ScriptState::Unloaded), BookingView::Closed);
        flow.open();
        assert_eq!(flow.view(ScriptState::Unloaded), BookingView::Selecting);
        assert_eq!(flow.view(ScriptState::Ready), BookingView::Selecting);
    }

    #[test]
    fn test_free_plan_skips_selection() {
        let mut flow = BookingFlow::new(true, Some(general()));
        flow.open();
        assert_eq!(
            flow.view(ScriptState::Unloaded),
            BookingView::Loading(general())
        );
        assert_eq!(flow.view(ScriptState::Ready), BookingView::Widget(general()));
        assert!(!flow.can_go_back());
        assert!(!flow.back());
        assert_eq!(flow.selected(), Some(&general()));
    }

    #[test]
    fn test_free_plan_without_default_falls_back_to_selection() {
        let mut flow = BookingFlow::new(true, None);
        flow.open();
        assert_eq!(flow.view(ScriptState::Unloaded), BookingView::Selecting);

        let mut flow = BookingFlow::new(true, Some(option("general-consultation", None)));
        flow.open();
        assert_eq!(flow.view(ScriptState::Unloaded), BookingView::Selecting);
    }

    #[test]
    fn test_select_and_back() {
        let mut flow = BookingFlow::new(false, None);
        flow.open();
        let b = option("b", Some("https://x"));
        assert!(flow.select(b.clone()));
        assert_eq!(flow.view(ScriptState::Loading), BookingView::Loading(b.clone()));
        assert_eq!(flow.view(ScriptState::Failed), BookingView::Failed(b.clone()));
        assert!(flow.can_go_back());
        assert!(flow.back());
        assert_eq!(flow.selected(), None);
        assert_eq!(flow.view(ScriptState::Ready), BookingView::Selecting);
    }

    #[test]
    fn test_options_without_url_cannot_be_selected() {
        let mut flow = BookingFlow::new(false, None);
        flow.open();
        assert!(!flow.select(option("a", None)));
        assert_eq!(flow.view(ScriptState::Unloaded), BookingView::Selecting);
    }

    #[test]
    fn test_select_requires_selection_screen() {
        let mut flow = BookingFlow::new(false, None);
        assert!(!flow.select(option("b", Some("https://x"))));
        assert!(!flow.is_open());
    }

    #[test]
    fn test_close_resets_from_every_stage() {
        let b = option("b", Some("https://x"));
        for script in [
            ScriptState::Unloaded,
            ScriptState::Loading,
            ScriptState::Ready,
            ScriptState::Failed,
        ] {
            let mut flow = BookingFlow::new(false, None);
            flow.close();
            flow.open();
            assert_eq!(flow.view(script), BookingView::Selecting);
            flow.close();
            flow.open();
            flow.select(b.clone());
            flow.close();
            assert_eq!(flow.view(script), BookingView::Closed);
            assert_eq!(flow.selected(), None);
            flow.open();
            assert_eq!(flow.view(script), BookingView::Selecting);
        }
    }

    #[test]
    fn test_free_plan_reopens_on_default() {
        let mut flow = BookingFlow::new(true, Some(general()));
        flow.open();
        flow.close();
        flow.open();
        assert_eq!(flow.selected(), Some(&general()));
    }

    #[test]
    fn test_loader_begin_is_idempotent() {
        let mut loader = ScriptLoader::default();
        assert_eq!(loader.state(), ScriptState::Unloaded);
        let ticket = loader.begin().expect("first begin should start a load");
        assert!(loader.begin().is_none());
        assert_eq!(loader.state(), ScriptState::Loading);
        assert!(loader.complete(&ticket));
        assert_eq!(loader.state(), ScriptState::Ready);
        assert!(loader.begin().is_none());
        assert!(!loader.complete(&ticket));
    }

    #[test]
    fn test_loader_timeout_then_retry() {
        let mut loader = ScriptLoader::default();
        let first = loader.begin().unwrap();
        assert!(loader.fail(&first));
        assert_eq!(loader.state(), ScriptState::Failed);
        assert!(!loader.fail(&first));

        let second = loader.begin().expect("retry should start a new load");
        assert_ne!(first.generation(), second.generation());
        // the abandoned attempt can no longer move the state
        assert!(!loader.complete(&first));
        assert_eq!(loader.state(), ScriptState::Loading);
        assert!(loader.complete(&second));
        assert_eq!(loader.state(), ScriptState::Ready);
    }

    #[test]
    fn test_loader_late_load_recovers_timeout() {
        let mut loader = ScriptLoader::default();
        let ticket = loader.begin().unwrap();
        assert!(loader.fail(&ticket));
        assert!(loader.complete(&ticket));
        assert_eq!(loader.state(), ScriptState::Ready);
    }

    #[test]
    fn test_loader_ignores_callbacks_after_cancel() {
        let token = CancelToken::new();
        let mut loader = ScriptLoader::new(token.clone());
        let ticket = loader.begin().unwrap();
        token.cancel();
        assert!(ticket.is_cancelled());
        assert!(!loader.complete(&ticket));
        assert!(!loader.fail(&ticket));
        assert_eq!(loader.state(), ScriptState::Loading);
        assert!(loader.begin().is_none());
    }

    #[test]
    fn test_loader_mark_ready() {
        let mut loader = ScriptLoader::default();
        loader.mark_ready();
        assert!(loader.begin().is_none());
        assert_eq!(loader.state(), ScriptState::Ready);
    }

    #[test]
    fn test_outcome_from_event() {
        assert_eq!(LoadOutcome::from_event(true, true), LoadOutcome::Loaded);
        assert_eq!(LoadOutcome::from_event(true, false), LoadOutcome::MissingApi);
        assert_eq!(LoadOutcome::from_event(false, true), LoadOutcome::Errored);
        assert_eq!(LoadOutcome::from_event(false, false), LoadOutcome::Errored);
    }

    #[test]
    fn test_stale_attempt_cannot_settle_retry() {
        let mut loader = ScriptLoader::default();
        let first = loader.begin().unwrap();
        assert!(loader.settle(&first, LoadOutcome::TimedOut));
        let second = loader.begin().unwrap();

        // the replaced tag still fires; neither event may end the retry
        assert!(!loader.settle(&first, LoadOutcome::Errored));
        assert!(!loader.settle(&first, LoadOutcome::Loaded));
        assert!(!loader.settle(&first, LoadOutcome::TimedOut));
        assert_eq!(loader.state(), ScriptState::Loading);

        // so the retry's own timeout is still the one that fails it
        assert!(loader.settle(&second, LoadOutcome::TimedOut));
        assert_eq!(loader.state(), ScriptState::Failed);
    }

    #[test]
    fn test_missing_api_fails_current_attempt() {
        let mut loader = ScriptLoader::default();
        let ticket = loader.begin().unwrap();
        assert!(loader.settle(&ticket, LoadOutcome::MissingApi));
        assert_eq!(loader.state(), ScriptState::Failed);
        // the pending timeout for the same attempt is then a no-op
        assert!(!loader.settle(&ticket, LoadOutcome::TimedOut));
    }

    #[test]
    fn test_reopen_after_close_mid_load() {
        let mut flow = BookingFlow::new(false, None);
        let mut loader = ScriptLoader::default();
        let a = option("a", Some("https://a"));
        flow.open();
        flow.select(a.clone());
        let ticket = loader.begin().unwrap();
        flow.close();
        assert_eq!(flow.view(loader.state()), BookingView::Closed);

        // the load finishing while closed is kept for the next open
        assert!(loader.settle(&ticket, LoadOutcome::Loaded));
        flow.open();
        assert_eq!(flow.view(loader.state()), BookingView::Selecting);
        flow.select(a.clone());
        assert_eq!(flow.view(loader.state()), BookingView::Widget(a));
    }

    #[test]
    fn test_reselect_reuses_loaded_script() {
        let mut flow = BookingFlow::new(false, None);
        let mut loader = ScriptLoader::default();
        flow.open();
        flow.select(option("a", Some("https://a")));
        let ticket = loader.begin().unwrap();
        loader.complete(&ticket);
        flow.back();
        flow.select(option("b", Some("https://b")));
        assert!(loader.begin().is_none());
        assert_eq!(
            flow.view(loader.state()),
            BookingView::Widget(option("b", Some("https://b")))
        );
    }
}
