use log::{error, info};
use ranking_sync::{
    config::{load_config, VERSION},
    logging, HttpRankingStore, Ranking, RankingError, RankingSurface, RankingSync, Score,
    SyncState,
};
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};

/// Surface printing the ranking to the console
struct ConsoleSurface;

impl RankingSurface for ConsoleSurface {
    fn show_ranking(&mut self, summary: &str, _ranking: &Arc<Ranking>) {
        println!("{summary}");
    }

    fn set_entry_visible(&mut self, visible: bool) {
        if visible {
            println!("New high score! Enter your name:");
        }
    }

    fn submit_failed(&mut self, err: &RankingError) {
        println!("Failed to register your score ({err}), enter your name to try again:");
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = load_config();

    if let Err(err) = logging::setup(config.logging, &config.logging_dir) {
        eprintln!("Failed to setup logging: {}", err);
    }

    info!("Starting Ranking Sync v{}", VERSION);

    // Score for the current play, zero only views the ranking
    let score: Score = match std::env::args().nth(1) {
        Some(value) => match value.parse() {
            Ok(value) => value,
            Err(err) => {
                error!("Invalid score {:?}: {}", value, err);
                return Ok(());
            }
        },
        None => 0,
    };

    let store = HttpRankingStore::new(config.url);
    let mut sync = RankingSync::new(store, ConsoleSurface);

    let mut state = sync.report_score(score).await.unwrap_or_else(|err| {
        error!("Unable to report score: {}", err);
        sync.state()
    });

    let mut lines = BufReader::new(io::stdin()).lines();
    while state == SyncState::AwaitingEntry {
        let name = match lines.next_line().await? {
            Some(value) => value,
            // Input closed before a name was entered
            None => break,
        };

        state = match sync.submit_name(name.trim()).await {
            Ok(value) => value,
            Err(err) => {
                error!("Unable to submit name: {}", err);
                break;
            }
        };
    }

    if let Err(err) = sync.close() {
        error!("Unable to close ranking: {}", err);
    }

    Ok(())
}
