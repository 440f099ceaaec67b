use serde::Serialize;
use crate::snapshot::UserSnapshot;

pub const MIN_SCORE: u32 = 300;
pub const MAX_SCORE: u32 = 500;
const POINTS_PER_NET: f64 = 2.0;

/// Estimated exam score, always within [300, 500].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ScoreEstimate(u32);

impl ScoreEstimate {
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return ScoreEstimate(MIN_SCORE);
        }
        let clamped = raw.clamp(MIN_SCORE as f64, MAX_SCORE as f64);
        ScoreEstimate(clamped.floor() as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Add points, saturating at the ceiling.
    pub fn advanced_by(self, points: u32) -> Self {
        ScoreEstimate(self.0.saturating_add(points).min(MAX_SCORE))
    }
}

/// 300 base points plus 2 per net across all topics. Negative nets count.
pub fn estimate_score(snapshot: &UserSnapshot) -> ScoreEstimate {
    if !snapshot.has_topics() {
        return ScoreEstimate(MIN_SCORE);
    }
    let total_net: f64 = snapshot.topic_nets().sum();
    ScoreEstimate::from_raw(MIN_SCORE as f64 + POINTS_PER_NET * total_net)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_account_scores_floor() {
        assert_eq!(estimate_score(&UserSnapshot::default()).value(), 300);
    }

    #[test]
    fn test_sums_nets_including_negative() {
        let snapshot = UserSnapshot::builder()
            .topic("a", 20.0)
            .topic("b", -5.0)
            .topic("c", 10.0)
            .build();
        assert_eq!(estimate_score(&snapshot).value(), 350);
    }

    #[test]
    fn test_negative_total_is_held_at_floor() {
        let snapshot = UserSnapshot::builder().topic("a", -40.0).build();
        assert_eq!(estimate_score(&snapshot).value(), 300);
    }

    #[test]
    fn test_fractional_total_rounds_down() {
        let snapshot = UserSnapshot::builder().topic("a", 12.3).build();
        assert_eq!(estimate_score(&snapshot).value(), 324);
    }

    #[test]
    fn test_advanced_by_saturates() {
        assert_eq!(ScoreEstimate::from_raw(490.0).advanced_by(15).value(), 500);
        assert_eq!(ScoreEstimate::from_raw(1e12).value(), 500);
    }
}
