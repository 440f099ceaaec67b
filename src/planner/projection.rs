use crate::planner::score::ScoreEstimate;

/// Expected gain per study month. Independent of tempo.
pub const MONTHLY_GAIN: u32 = 15;

/// Score trajectory for the nine study months, starting at the current estimate.
pub fn project_scores(current: ScoreEstimate) -> [ScoreEstimate; 9] {
    std::array::from_fn(|i| current.advanced_by(MONTHLY_GAIN * i as u32))
}
