//! Client for synchronizing a player's score against a remote ranking.
//!
//! The [RankingSync] controller fetches the ranking, decides whether the
//! current score qualifies using [qualifies], asks the [RankingSurface]
//! to collect a name when it does and submits the entry back to the
//! [RankingStore] before reloading the ranking.

pub mod config;
pub mod error;
pub mod logging;
pub mod qualify;
pub mod ranking;
pub mod store;
pub mod sync;
pub mod utils;

pub use error::{LoggingError, RankingError, RankingResult, SyncError, TransportError};
pub use qualify::qualifies;
pub use ranking::{RankEntry, Ranking, Score};
pub use store::{HttpRankingStore, RankingStore};
pub use sync::{RankingSurface, RankingSync, SyncSession, SyncState};
