//! Adaptive study planner.
//!
//! A pure pipeline over a [`UserSnapshot`]: progress and score are read
//! from the snapshot, progress decides the tempo, and the tempo shifts the
//! mock-exam milestone of a nine-month schedule. Nothing here performs I/O
//! or logs; callers own both.

pub mod daily;
pub mod progress;
pub mod projection;
pub mod schedule;
pub mod score;
pub mod tempo;
pub mod weekly;

use serde::Serialize;

use crate::snapshot::{Track, UserSnapshot};
use daily::DailySchedule;
use progress::{compute_progress, ProgressPercent};
use projection::project_scores;
use schedule::{focus_area, milestone_for, Milestone, StudyMonth};
use score::{estimate_score, ScoreEstimate};
use tempo::Tempo;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPlanEntry {
    #[serde(rename = "month_name")]
    pub month: StudyMonth,
    pub focus_area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Milestone>,
    pub projected_score: ScoreEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub track: Track,
    pub tempo: Tempo,
    pub month_offset: i8,
    pub advice: String,
    pub progress: ProgressPercent,
    pub current_score: ScoreEstimate,
    /// Always October..June in calendar order.
    pub months: [MonthlyPlanEntry; 9],
    /// Same values as `months[*].projected_score`, kept whole for the chart.
    pub projected_scores: [ScoreEstimate; 9],
    pub daily_schedule: DailySchedule,
    pub daily_hours: String,
}

impl Plan {
    pub fn entry(&self, month: StudyMonth) -> &MonthlyPlanEntry {
        &self.months[month as usize]
    }

    /// The trailing months still ahead of the student.
    pub fn upcoming(&self, months_remaining: u32) -> &[MonthlyPlanEntry] {
        let keep = (months_remaining as usize).min(self.months.len());
        &self.months[self.months.len() - keep..]
    }
}

/// Build the full plan for one snapshot.
pub fn plan(snapshot: &UserSnapshot) -> Plan {
    let track = snapshot.track();
    let progress = compute_progress(snapshot);
    let current_score = estimate_score(snapshot);
    let tempo = Tempo::classify(progress);
    let projected = project_scores(current_score);

    let months: [MonthlyPlanEntry; 9] = std::array::from_fn(|i| {
        let month = StudyMonth::ALL[i];
        MonthlyPlanEntry {
            month,
            focus_area: focus_area(track, month).to_string(),
            milestone: milestone_for(month, tempo),
            projected_score: projected[i],
        }
    });

    let daily_schedule = DailySchedule::new(snapshot.sleep_time(), progress);

    Plan {
        track,
        tempo,
        month_offset: tempo.month_offset(),
        advice: tempo.advice().to_string(),
        progress,
        current_score,
        months,
        projected_scores: projected,
        daily_hours: daily_schedule.to_string(),
        daily_schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_are_indexed_in_calendar_order() {
        let plan = plan(&UserSnapshot::default());
        for (i, month) in StudyMonth::ALL.iter().enumerate() {
            assert_eq!(plan.months[i].month, *month);
            assert_eq!(plan.entry(*month).month, *month);
        }
    }

    #[test]
    fn test_projected_scores_match_month_entries() {
        let snapshot = UserSnapshot::builder().topic("a", 100.0).build();
        let plan = plan(&snapshot);
        for (entry, score) in plan.months.iter().zip(plan.projected_scores.iter()) {
            assert_eq!(entry.projected_score, *score);
        }
        assert_eq!(plan.projected_scores[0].value(), 500);
    }

    #[test]
    fn test_upcoming_keeps_the_tail() {
        let plan = plan(&UserSnapshot::default());
        assert_eq!(plan.upcoming(12).len(), 9);
        assert_eq!(plan.upcoming(9).len(), 9);
        let last_three = plan.upcoming(3);
        assert_eq!(last_three.len(), 3);
        assert_eq!(last_three[0].month, StudyMonth::April);
        assert!(plan.upcoming(0).is_empty());
    }

    #[test]
    fn test_serialized_entries_omit_empty_milestones() {
        let plan = plan(&UserSnapshot::default());
        let value = serde_json::to_value(&plan).unwrap();
        let months = value["months"].as_array().unwrap();
        assert_eq!(months.len(), 9);
        assert_eq!(months[0]["month_name"], "Ekim");
        assert!(months[0].get("milestone").is_none());
        assert_eq!(months[6]["milestone"], "DENEMELER BAŞLIYOR!");
        assert_eq!(value["tempo"], "NORMAL");
        assert_eq!(value["daily_hours"], "09:00-15:00, 20:00-23:00");
        let series = value["projected_scores"].as_array().unwrap();
        assert_eq!(series.len(), 9);
        assert_eq!(series[0], 300);
        assert_eq!(series[8], 420);
    }
}
