//! Module for the remote ranking store that rankings are fetched from and
//! new entries are submitted to

use crate::{
    error::RankingResult,
    ranking::{Ranking, Score},
    utils::types::BoxFuture,
};
use log::{debug, warn};
use reqwest::Client;

/// Type alias for the boxed futures returned by ranking stores
pub type StoreFuture<'a, T> = BoxFuture<'a, RankingResult<T>>;

/// Trait implemented by remote stores holding the ranking. Each call is
/// a single round trip with no retrying
pub trait RankingStore: Send + Sync {
    /// Fetches the complete current ranking
    fn fetch_ranking(&self) -> StoreFuture<'_, Ranking>;

    /// Submits a new entry to the ranking. Placement of the entry is
    /// decided by the store
    ///
    /// `name`  The name for the entry
    /// `score` The score for the entry
    fn submit_entry<'a>(&'a self, name: &'a str, score: Score) -> StoreFuture<'a, ()>;
}

/// Ranking store backed by a HTTP endpoint, rankings are read with a
/// GET request and entries are written with a form encoded POST to
/// the same URL
pub struct HttpRankingStore {
    /// The underlying HTTP client
    client: Client,
    /// The ranking endpoint URL
    url: String,
}

impl HttpRankingStore {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Creates a store using an existing HTTP client, used when the
    /// caller wants control over the client (i.e. to set a timeout)
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> RankingResult<Ranking> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;

        debug!("Ranking data: {}", String::from_utf8_lossy(&body));

        Ranking::decode(&body)
    }

    async fn submit(&self, name: &str, score: Score) -> RankingResult<()> {
        let score = score.to_string();
        let form = [("name", name), ("score", score.as_str())];

        let response = self
            .client
            .post(&self.url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;

        // Entry is stored once the status is accepted, the free text
        // response is only logged
        match response.text().await {
            Ok(body) => debug!("Ranking submit response: {}", body),
            Err(err) => warn!("Unable to read ranking submit response: {}", err),
        }
        Ok(())
    }
}

impl RankingStore for HttpRankingStore {
    fn fetch_ranking(&self) -> StoreFuture<'_, Ranking> {
        Box::pin(self.fetch())
    }

    fn submit_entry<'a>(&'a self, name: &'a str, score: Score) -> StoreFuture<'a, ()> {
        Box::pin(self.submit(name, score))
    }
}
