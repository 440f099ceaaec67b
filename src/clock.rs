use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::config::planner::PlannerConfig;

/// Time left until the exam, measured in the exam's local calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExamCountdown {
    pub today: NaiveDate,
    pub exam_date: NaiveDate,
    pub days_remaining: i64,
    pub weeks_remaining: i64,
    /// Calendar months from the current month through the exam month, inclusive.
    pub months_remaining: u32,
}

impl ExamCountdown {
    pub fn at(now: DateTime<Utc>, config: &PlannerConfig) -> Self {
        let today = now.with_timezone(&config.offset()).date_naive();
        Self::between(today, config.exam_date)
    }

    pub fn now(config: &PlannerConfig) -> Self {
        Self::at(Utc::now(), config)
    }

    pub fn between(today: NaiveDate, exam_date: NaiveDate) -> Self {
        let days_remaining = (exam_date - today).num_days().max(0);
        let months_remaining = if today > exam_date {
            0
        } else {
            let months = (exam_date.year() - today.year()) * 12
                + exam_date.month() as i32
                - today.month() as i32
                + 1;
            months.max(0) as u32
        };

        ExamCountdown {
            today,
            exam_date,
            days_remaining,
            weeks_remaining: days_remaining / 7,
            months_remaining,
        }
    }
}

/// Monday..Sunday week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_october_start_has_nine_months_left() {
        let countdown = ExamCountdown::between(date(2024, 10, 1), date(2025, 6, 15));
        assert_eq!(countdown.months_remaining, 9);
        assert_eq!(countdown.days_remaining, 257);
        assert_eq!(countdown.weeks_remaining, 36);
    }

    #[test]
    fn test_exam_month_counts_as_one() {
        let countdown = ExamCountdown::between(date(2025, 6, 1), date(2025, 6, 15));
        assert_eq!(countdown.months_remaining, 1);
        assert_eq!(countdown.days_remaining, 14);
    }

    #[test]
    fn test_after_exam_everything_is_zero() {
        let countdown = ExamCountdown::between(date(2025, 7, 1), date(2025, 6, 15));
        assert_eq!(countdown.months_remaining, 0);
        assert_eq!(countdown.days_remaining, 0);
        assert_eq!(countdown.weeks_remaining, 0);
    }

    #[test]
    fn test_local_offset_decides_the_day() {
        let config = PlannerConfig::default();
        // 22:30 UTC on the 14th is already the 15th in Istanbul
        let now = Utc.with_ymd_and_hms(2025, 6, 14, 22, 30, 0).unwrap();
        let countdown = ExamCountdown::at(now, &config);
        assert_eq!(countdown.today, date(2025, 6, 15));
        assert_eq!(countdown.days_remaining, 0);
    }

    #[test]
    fn test_week_runs_monday_to_sunday() {
        // 2024-10-16 is a Wednesday
        assert_eq!(week_bounds(date(2024, 10, 16)), (date(2024, 10, 14), date(2024, 10, 20)));
        assert_eq!(week_bounds(date(2024, 10, 14)), (date(2024, 10, 14), date(2024, 10, 20)));
        assert_eq!(week_bounds(date(2024, 10, 20)), (date(2024, 10, 14), date(2024, 10, 20)));
    }
}
