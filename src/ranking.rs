//! Ranking models and conversion between the wire representation
//! (a JSON array of name/score objects) and the in-memory ranking

use crate::error::RankingResult;
use log::debug;
use serde::{Deserialize, Serialize};

/// Score value of a single ranking entry
pub type Score = i32;

/// Structure for a single entry within a ranking
///
/// # Structure
///
/// ```json
/// { "name": "Ann", "score": 15 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    /// The name the player chose for this entry
    name: String,
    /// The score this entry achieved
    score: Score,
}

impl RankEntry {
    pub fn new(name: impl Into<String>, score: Score) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

/// Snapshot of the remote ranking. Entries are kept in the order the
/// server provided them in and are never re-sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Box<[RankEntry]>,
}

impl Ranking {
    /// Decodes a ranking from the raw response payload.
    ///
    /// An empty (or whitespace only) payload is treated as an empty
    /// ranking. Any element that is missing its `name` or `score` or
    /// has them with the wrong types fails the entire payload.
    ///
    /// `payload` The raw response body bytes
    pub fn decode(payload: &[u8]) -> RankingResult<Ranking> {
        if payload.iter().all(u8::is_ascii_whitespace) {
            return Ok(Ranking::default());
        }

        let ranking: Ranking = serde_json::from_slice(payload)?;
        debug!("Decoded ranking with {} entries", ranking.len());
        Ok(ranking)
    }

    /// Encodes the ranking back into its JSON array representation
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The lowest placed entry according to the server ordering
    pub fn last(&self) -> Option<&RankEntry> {
        self.entries.last()
    }

    /// Creates the summary text shown to the player, one line per
    /// entry in the form `<rank> : <name><score>` where rank starts at 1.
    /// (no separator is written between the name and the score)
    pub fn summary(&self) -> String {
        let mut output = String::new();
        for (index, entry) in self.entries.iter().enumerate() {
            output.push_str(&format!("{} : {}{}\n", index + 1, entry.name, entry.score));
        }
        output
    }
}

impl From<Vec<RankEntry>> for Ranking {
    fn from(value: Vec<RankEntry>) -> Self {
        Self {
            entries: value.into_boxed_slice(),
        }
    }
}

impl FromIterator<RankEntry> for Ranking {
    fn from_iter<T: IntoIterator<Item = RankEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{RankEntry, Ranking};
    use crate::error::RankingError;

    fn sample() -> Ranking {
        Ranking::from(vec![
            RankEntry::new("b", 8),
            RankEntry::new("a", 5),
            RankEntry::new("a", 5),
            RankEntry::new("", 0),
        ])
    }

    /// Tests that the server order is kept and duplicates are not removed
    #[test]
    fn test_decode_preserves_order() {
        let payload = br#"[{"name":"low","score":1},{"name":"high","score":99},{"name":"low","score":1}]"#;
        let ranking = Ranking::decode(payload).unwrap();

        let expected = [
            RankEntry::new("low", 1),
            RankEntry::new("high", 99),
            RankEntry::new("low", 1),
        ];
        assert_eq!(ranking.entries(), &expected);
    }

    /// Tests that empty arrays and empty bodies both produce an empty ranking
    #[test]
    fn test_decode_empty() {
        let payloads: [&[u8]; 3] = [b"[]", b"", b"  \n"];
        for payload in payloads {
            let ranking = Ranking::decode(payload).unwrap();
            assert!(ranking.is_empty());
            assert!(ranking.last().is_none());
        }
    }

    /// Tests that unknown fields on an entry are ignored
    #[test]
    fn test_decode_extra_fields() {
        let payload = br#"[{"_id":"abc","name":"Ann","score":15,"createdAt":"now"}]"#;
        let ranking = Ranking::decode(payload).unwrap();
        assert_eq!(ranking.entries(), &[RankEntry::new("Ann", 15)]);
    }

    /// Tests that a single malformed element fails the whole payload
    #[test]
    fn test_decode_malformed() {
        let payloads: [&[u8]; 7] = [
            b"not json",
            b"{\"name\":\"Ann\",\"score\":1}",
            b"[{\"name\":\"Ann\"}]",
            b"[{\"score\":1}]",
            b"[{\"name\":\"Ann\",\"score\":\"1\"}]",
            b"[{\"name\":1,\"score\":1}]",
            b"[{\"name\":\"Ann\",\"score\":1},{\"name\":\"Bob\",\"score\":1.5}]",
        ];

        for payload in payloads {
            let err = Ranking::decode(payload).unwrap_err();
            assert!(matches!(err, RankingError::MalformedPayload(_)));
        }
    }

    /// Tests that encoding then decoding produces the same ranking
    #[test]
    fn test_round_trip() {
        for ranking in [Ranking::default(), sample()] {
            let bytes = ranking.encode().unwrap();
            let decoded = Ranking::decode(&bytes).unwrap();
            assert_eq!(decoded, ranking);
        }
    }

    /// Tests the exact summary text layout
    #[test]
    fn test_summary() {
        let ranking = Ranking::from(vec![RankEntry::new("Ann", 100), RankEntry::new("Bob", 90)]);
        assert_eq!(ranking.summary(), "1 : Ann100\n2 : Bob90\n");
        assert_eq!(Ranking::default().summary(), "");

        // Duplicates and empty names are written as is
        assert_eq!(sample().summary(), "1 : b8\n2 : a5\n3 : a5\n4 : 0\n");
    }

    /// Tests that encoding writes a plain JSON array in ranking order
    #[test]
    fn test_encode_layout() {
        let ranking = Ranking::from(vec![RankEntry::new("Ann", 15), RankEntry::new("Bob", -2)]);
        let bytes: Vec<u8> = ranking.encode().unwrap();
        assert_eq!(
            bytes,
            br#"[{"name":"Ann","score":15},{"name":"Bob","score":-2}]"#
        );
    }
}
