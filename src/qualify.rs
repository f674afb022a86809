//! Qualification rule deciding whether a score earns a place on the ranking

use crate::ranking::{Ranking, Score};

/// Number of entries a ranking holds before scores have to beat the
/// lowest entry to qualify
pub const RANKING_FILL_SIZE: usize = 10;

/// Decides whether the `score` should be offered an entry on the
/// `ranking`.
///
/// - An empty ranking accepts any score, including zero
/// - A ranking with fewer than [RANKING_FILL_SIZE] entries accepts
///   any positive score
/// - Otherwise the score must be strictly greater than the score of
///   the last entry
pub fn qualifies(ranking: &Ranking, score: Score) -> bool {
    let last = match ranking.last() {
        Some(value) => value,
        None => return true,
    };

    if ranking.len() < RANKING_FILL_SIZE && score > 0 {
        return true;
    }

    score > last.score()
}

#[cfg(test)]
mod test {
    use super::{qualifies, RANKING_FILL_SIZE};
    use crate::ranking::{RankEntry, Ranking, Score};

    /// Creates a ranking from the provided scores in order
    fn ranking(scores: &[Score]) -> Ranking {
        scores
            .iter()
            .enumerate()
            .map(|(index, score)| RankEntry::new(format!("player{index}"), *score))
            .collect()
    }

    /// Tests that an empty ranking accepts every score including zero
    #[test]
    fn test_empty_ranking() {
        let empty = Ranking::default();
        for score in [0, 1, 5, 1000, Score::MAX] {
            assert!(qualifies(&empty, score));
        }
    }

    /// Tests that a partially filled ranking accepts positive scores
    /// regardless of how they compare to the existing entries
    #[test]
    fn test_filling_ranking() {
        for count in 1..RANKING_FILL_SIZE {
            let scores: Vec<Score> = (0..count).map(|i| 1000 - i as Score).collect();
            let ranking = ranking(&scores);
            assert!(qualifies(&ranking, 1));
            assert!(qualifies(&ranking, 5000));
        }
    }

    /// Tests that zero scores are not accepted once the ranking has entries
    #[test]
    fn test_filling_ranking_zero() {
        for count in 1..RANKING_FILL_SIZE {
            let scores: Vec<Score> = (0..count).map(|i| 50 - i as Score).collect();
            assert!(!qualifies(&ranking(&scores), 0));
        }

        // Zero entries on the board don't let a zero score in either
        assert!(!qualifies(&ranking(&[0]), 0));
    }

    /// Tests that a full ranking only accepts scores beating the last entry
    #[test]
    fn test_full_ranking() {
        let full = ranking(&[100, 90, 80, 70, 60, 50, 40, 30, 20, 10]);
        assert!(!qualifies(&full, 0));
        assert!(!qualifies(&full, 5));
        assert!(!qualifies(&full, 10));
        assert!(qualifies(&full, 11));
        assert!(qualifies(&full, 15));
        assert!(qualifies(&full, 1000));

        // Rankings larger than the fill size use the same rule
        let overfull = ranking(&[100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 10, 3]);
        assert!(!qualifies(&overfull, 3));
        assert!(qualifies(&overfull, 4));
    }

    /// Tests that the last entry by server order is used rather than the
    /// lowest score
    #[test]
    fn test_uses_server_order() {
        let unordered = ranking(&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert!(!qualifies(&unordered, 50));
        assert!(qualifies(&unordered, 101));
    }
}
