//! Live search driver for interactive front ends.
//!
//! Keystrokes are debounced before a search starts, and every search carries
//! a ticket from [`RequestSequencer`]. A finished search is published only if
//! no newer one has been issued since, so a slow response can never overwrite
//! the results of a later query.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

use crate::api::ProfileApi;
use crate::domain::search::{FilterField, PageSummary, SearchState};
use crate::services::ServiceResult;
use crate::services::search::{SearchOutcome, search_profiles};

/// Quiet period after the last keystroke before a search starts.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(350);

/// Deadline-based debounce: every touch pushes the deadline back.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` once the deadline has passed, clearing it.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Identifies one issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out strictly increasing tickets.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// User actions understood by [`LiveSearch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveEvent {
    /// A filter input changed; debounced.
    Input(FilterField, String),
    Submit,
    Reset,
    NextPage,
    PrevPage,
    SelectCategory(String),
}

impl LiveEvent {
    /// Parses one line of terminal input.
    ///
    /// `field=value` edits a filter, `:search`, `:reset`, `:next` and `:prev`
    /// map to the matching actions and `:category NAME` picks a category.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if let Some(command) = line.strip_prefix(':') {
            let (name, arg) = command
                .split_once(char::is_whitespace)
                .map(|(name, arg)| (name, arg.trim()))
                .unwrap_or((command, ""));
            return match name {
                "search" => Some(LiveEvent::Submit),
                "reset" => Some(LiveEvent::Reset),
                "next" => Some(LiveEvent::NextPage),
                "prev" => Some(LiveEvent::PrevPage),
                "category" if !arg.is_empty() => Some(LiveEvent::SelectCategory(arg.to_string())),
                _ => None,
            };
        }

        let (key, value) = line.split_once('=')?;
        let field = FilterField::from_key(key.trim())?;
        Some(LiveEvent::Input(field, value.trim().to_string()))
    }
}

type Completion = (Ticket, ServiceResult<SearchOutcome>);

/// Owns the search state of one interactive session.
pub struct LiveSearch<A> {
    api: Arc<A>,
    state: SearchState,
    summary: Option<PageSummary>,
    debouncer: Debouncer,
    sequencer: RequestSequencer,
}

impl<A> LiveSearch<A>
where
    A: ProfileApi + 'static,
{
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: SearchState::default(),
            summary: None,
            debouncer: Debouncer::default(),
            sequencer: RequestSequencer::default(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Applies `event` and reports whether a search should start immediately.
    fn apply(&mut self, event: LiveEvent, now: Instant) -> bool {
        match event {
            LiveEvent::Input(field, value) => {
                self.state = self.state.clone().with_filter(field, value);
                self.summary = None;
                self.debouncer.touch(now);
                false
            }
            LiveEvent::Submit => self.restart(self.state.clone().submit()),
            LiveEvent::Reset => self.restart(self.state.clone().reset()),
            LiveEvent::SelectCategory(category) => {
                self.restart(self.state.clone().select_category(category))
            }
            LiveEvent::NextPage => {
                let next = self
                    .summary
                    .as_ref()
                    .and_then(|summary| self.state.next_page(summary));
                self.move_to(next)
            }
            LiveEvent::PrevPage => {
                let prev = self.state.prev_page();
                self.move_to(prev)
            }
        }
    }

    fn restart(&mut self, state: SearchState) -> bool {
        self.state = state;
        self.summary = None;
        self.debouncer.cancel();
        true
    }

    fn move_to(&mut self, state: Option<SearchState>) -> bool {
        match state {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    fn spawn_search(&mut self, done: &mpsc::UnboundedSender<Completion>) {
        let ticket = self.sequencer.issue();
        let api = Arc::clone(&self.api);
        let state = self.state.clone();
        let done = done.clone();
        log::debug!("Starting live search {ticket:?}");
        tokio::spawn(async move {
            let result = search_profiles(api.as_ref(), &state).await;
            // The driver may already be gone.
            let _ = done.send((ticket, result));
        });
    }

    fn complete(
        &mut self,
        ticket: Ticket,
        result: ServiceResult<SearchOutcome>,
        outcomes: &watch::Sender<Option<SearchOutcome>>,
    ) {
        if !self.sequencer.is_latest(ticket) {
            log::debug!("Discarding stale live search result {ticket:?}");
            return;
        }
        match result {
            Ok(outcome) => {
                self.state.page.last_batch_count = outcome.state.page.last_batch_count;
                self.summary = Some(outcome.summary);
                outcomes.send_replace(Some(outcome));
            }
            Err(err) => log::error!("Live search failed: {err}"),
        }
    }

    /// Processes events until the sender side is closed.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<LiveEvent>,
        outcomes: watch::Sender<Option<SearchOutcome>>,
    ) {
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();

        loop {
            let deadline = self.debouncer.deadline();
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        if self.apply(event, Instant::now()) {
                            self.spawn_search(&done_tx);
                        }
                    }
                    None => break,
                },
                Some((ticket, result)) = done_rx.recv() => {
                    self.complete(ticket, result, &outcomes);
                }
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if self.debouncer.fire(Instant::now()) {
                        self.spawn_search(&done_tx);
                    }
                }
            }
        }
    }
}
