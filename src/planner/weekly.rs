use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::clock::week_bounds;
use crate::planner::schedule::{Milestone, StudyMonth};
use crate::planner::Plan;

/// One week of a plan, as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlan {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    /// None during the summer break before the study year.
    pub month: Option<StudyMonth>,
    pub focus_area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Milestone>,
    pub daily_hours: String,
    pub weekly_study_hours: f64,
}

/// Slice `plan` down to the week containing `date`. Outside October..June
/// the student is pointed at the October focus.
pub fn weekly_plan(plan: &Plan, date: NaiveDate) -> WeeklyPlan {
    let (week_start, week_end) = week_bounds(date);
    let month = StudyMonth::from_calendar_month(date.month());
    let entry = plan.entry(month.unwrap_or(StudyMonth::October));

    WeeklyPlan {
        week_start,
        week_end,
        month,
        focus_area: entry.focus_area.clone(),
        milestone: month.and(entry.milestone),
        daily_hours: plan.daily_hours.clone(),
        weekly_study_hours: plan.daily_schedule.study_hours * 7.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::plan;
    use crate::planner::schedule::MilestoneShift;
    use crate::snapshot::UserSnapshot;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_picks_the_month_of_the_date() {
        let snapshot = UserSnapshot::builder().field("Sayısal (MF)").topic("a", 1.0).build();
        let week = weekly_plan(&plan(&snapshot), date(2024, 11, 20));
        assert_eq!(week.month, Some(StudyMonth::November));
        assert_eq!(week.focus_area, "Matematik Temeli");
        assert_eq!(week.week_start, date(2024, 11, 18));
        assert_eq!(week.week_end, date(2024, 11, 24));
        // progress 30 => 7h a day
        assert_eq!(week.weekly_study_hours, 49.0);
    }

    #[test]
    fn test_carries_the_month_milestone() {
        let week = weekly_plan(&plan(&UserSnapshot::default()), date(2025, 4, 10));
        assert_eq!(week.milestone, Some(Milestone::MockExamsStart(MilestoneShift::OnTime)));
    }

    #[test]
    fn test_summer_falls_back_to_october_focus() {
        let week = weekly_plan(&plan(&UserSnapshot::default()), date(2024, 8, 7));
        assert_eq!(week.month, None);
        assert_eq!(week.focus_area, "Temel Konular");
        assert_eq!(week.milestone, None);
    }
}
