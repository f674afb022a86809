//! Controller driving the fetch, qualify, submit and reload cycle against
//! a [RankingStore] while reporting progress to a [RankingSurface]

use crate::{
    error::{RankingError, SyncError},
    qualify::qualifies,
    ranking::{Ranking, Score},
    store::RankingStore,
};
use log::{debug, error, info};
use std::sync::Arc;

/// Collaborator presenting the ranking to the player. Receives read only
/// snapshots of the ranking and signals for the name entry panel
pub trait RankingSurface: Send {
    /// Called whenever a new ranking has been fetched
    ///
    /// `summary` The rendered summary text for the ranking
    /// `ranking` The ranking snapshot the summary was created from
    fn show_ranking(&mut self, summary: &str, ranking: &Arc<Ranking>);

    /// Shows or hides the panel collecting the player name
    fn set_entry_visible(&mut self, visible: bool);

    /// Called when fetching the ranking failed
    fn fetch_failed(&mut self, _err: &RankingError) {}

    /// Called when submitting an entry failed
    fn submit_failed(&mut self, _err: &RankingError) {}

    /// Called once the session has been closed
    fn closed(&mut self) {}
}

/// States of the sync controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// Nothing in flight, the only state the session can be closed from
    #[default]
    Idle,
    /// Waiting for the ranking to be fetched
    Fetching,
    /// Waiting for the player to supply a name for their entry
    AwaitingEntry,
    /// Waiting for an entry submission to complete
    Submitting,
    /// The session has been torn down
    Closed,
}

/// State for a single play-through
#[derive(Debug, Default)]
pub struct SyncSession {
    /// The score for the current play, reset to zero after a submission
    pub current_score: Score,
    /// The most recently fetched ranking
    pub latest_ranking: Option<Arc<Ranking>>,
}

/// Controller owning the session state. Operations take `&mut self`
/// so only one operation is ever in flight
pub struct RankingSync<S, P> {
    /// Store the ranking is fetched from and submitted to
    store: S,
    /// Surface the ranking is presented on
    surface: P,
    /// Current controller state
    state: SyncState,
    /// Session for the current play
    session: SyncSession,
}

impl<S, P> RankingSync<S, P>
where
    S: RankingStore,
    P: RankingSurface,
{
    pub fn new(store: S, surface: P) -> Self {
        Self {
            store,
            surface,
            state: SyncState::Idle,
            session: SyncSession::default(),
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn session(&self) -> &SyncSession {
        &self.session
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ensures the controller is in the `expected` state
    fn ensure_state(&self, expected: SyncState) -> Result<(), SyncError> {
        match self.state {
            SyncState::Closed => Err(SyncError::Closed),
            state if state == expected => Ok(()),
            state => Err(SyncError::Busy(state)),
        }
    }

    /// Reports the score of the current play starting a fetch of the
    /// ranking. A score of zero only views the ranking unless the
    /// ranking is empty. Returns the state the controller settled in
    /// which is either [SyncState::Idle] or [SyncState::AwaitingEntry]
    ///
    /// `score` The score for the current play
    pub async fn report_score(&mut self, score: Score) -> Result<SyncState, SyncError> {
        self.ensure_state(SyncState::Idle)?;
        self.session.current_score = score;
        self.fetch().await;
        Ok(self.state)
    }

    /// Submits an entry using the provided name and the current score,
    /// reloading the ranking on success. On failure the controller stays
    /// awaiting an entry so the submission can be retried
    ///
    /// `name` The name the player entered
    pub async fn submit_name(&mut self, name: &str) -> Result<SyncState, SyncError> {
        self.ensure_state(SyncState::AwaitingEntry)?;
        self.state = SyncState::Submitting;

        let score = self.session.current_score;
        info!("Submitting ranking entry (Name: {}, Score: {})", name, score);

        match self.store.submit_entry(name, score).await {
            Ok(()) => {
                self.surface.set_entry_visible(false);
                // Reload with a zero score so the entry isn't offered again
                self.session.current_score = 0;
                self.fetch().await;
            }
            Err(err) => {
                error!("Failed to submit ranking entry: {}", err);
                self.surface.submit_failed(&err);
                self.state = SyncState::AwaitingEntry;
            }
        }

        Ok(self.state)
    }

    /// Closes the session, only permitted when nothing is in flight and
    /// no entry is pending
    pub fn close(&mut self) -> Result<(), SyncError> {
        self.ensure_state(SyncState::Idle)?;
        self.state = SyncState::Closed;
        self.session = SyncSession::default();
        self.surface.closed();
        Ok(())
    }

    /// Fetches the ranking and presents it, moving to awaiting an entry
    /// if the current score qualifies
    async fn fetch(&mut self) {
        self.state = SyncState::Fetching;

        let ranking = match self.store.fetch_ranking().await {
            Ok(value) => Arc::new(value),
            Err(err) => {
                // Previous ranking is kept
                error!("Failed to fetch ranking: {}", err);
                self.surface.fetch_failed(&err);
                self.state = SyncState::Idle;
                return;
            }
        };

        let summary = ranking.summary();
        debug!("Ranking text:\n{}", summary);

        self.session.latest_ranking = Some(ranking.clone());
        self.surface.show_ranking(&summary, &ranking);

        if qualifies(&ranking, self.session.current_score) {
            debug!(
                "Score qualified for ranking entry (Score: {})",
                self.session.current_score
            );
            self.surface.set_entry_visible(true);
            self.state = SyncState::AwaitingEntry;
        } else {
            self.state = SyncState::Idle;
        }
    }
}
