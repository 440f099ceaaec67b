use serde::Serialize;
use crate::snapshot::UserSnapshot;

pub const MIN_PROGRESS: u32 = 30;
pub const MAX_PROGRESS: u32 = 100;
/// Reported for accounts with no tracked topics yet.
pub const NO_INFORMATION_PROGRESS: u32 = 60;

/// A topic counts as covered once its net reaches this value.
pub const COVERED_TOPIC_NET: f64 = 5.0;
const POINTS_PER_TOPIC: u64 = 10;
const POINTS_PER_SESSION: u64 = 5;

/// Overall progress signal, always within [30, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProgressPercent(u32);

impl ProgressPercent {
    pub fn from_raw(raw: u64) -> Self {
        let clamped = raw.clamp(MIN_PROGRESS as u64, MAX_PROGRESS as u64);
        ProgressPercent(clamped as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

/// Linear, saturating progress: 10 points per covered topic, 5 per completed session.
pub fn compute_progress(snapshot: &UserSnapshot) -> ProgressPercent {
    if !snapshot.has_topics() {
        return ProgressPercent(NO_INFORMATION_PROGRESS);
    }

    let covered = snapshot
        .topic_nets()
        .filter(|net| *net >= COVERED_TOPIC_NET)
        .count() as u64;
    let sessions = snapshot.completed_sessions() as u64;

    let raw = covered
        .saturating_mul(POINTS_PER_TOPIC)
        .saturating_add(sessions.saturating_mul(POINTS_PER_SESSION));
    ProgressPercent::from_raw(raw)
}
