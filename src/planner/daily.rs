use serde::Serialize;
use std::fmt;

use crate::planner::progress::ProgressPercent;

const EVENING_DELAY_HOURS: u32 = 11;
const EVENING_BLOCK_HOURS: u32 = 3;
const FALLBACK_START_HOUR: u32 = 9;

/// Sleep-time markers and the morning start they imply. Checked in order.
const START_RULES: [(&[&str], u32); 3] = [
    (&["Erken", "22:00", "23:00"], 6),
    (&["Normal", "00:00"], 7),
    (&["Geç", "01:00"], 8),
];

/// Recommended study day: a morning block sized by progress and a fixed evening block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailySchedule {
    pub study_hours: f64,
    pub morning_start: u32,
}

impl DailySchedule {
    pub fn new(sleep_time: &str, progress: ProgressPercent) -> Self {
        DailySchedule {
            study_hours: study_hours_for(progress),
            morning_start: morning_start_for(sleep_time),
        }
    }

    pub fn morning_end(&self) -> u32 {
        self.morning_start + self.study_hours.floor() as u32
    }

    pub fn evening_start(&self) -> u32 {
        self.morning_start + EVENING_DELAY_HOURS
    }

    pub fn evening_end(&self) -> u32 {
        self.evening_start() + EVENING_BLOCK_HOURS
    }
}

impl fmt::Display for DailySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:00-{:02}:00, {:02}:00-{:02}:00",
            self.morning_start,
            self.morning_end(),
            self.evening_start(),
            self.evening_end()
        )
    }
}

/// Students further behind get more hours.
pub fn study_hours_for(progress: ProgressPercent) -> f64 {
    match progress.value() {
        p if p < 50 => 7.0,
        p if p < 70 => 6.5,
        _ => 6.0,
    }
}

pub fn morning_start_for(sleep_time: &str) -> u32 {
    START_RULES
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| sleep_time.contains(m)))
        .map(|(_, hour)| *hour)
        .unwrap_or(FALLBACK_START_HOUR)
}
