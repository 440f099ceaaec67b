use serde::Serialize;
use crate::planner::progress::ProgressPercent;

/// Weekly progress target every student is measured against.
pub const TARGET_PROGRESS: i64 = 70;
const FAST_MARGIN: i64 = 15;
const SLOW_MARGIN: i64 = -10;

/// Learning pace relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tempo {
    Fast,
    Normal,
    Slow,
}

impl Tempo {
    /// FAST when at least 15 over target, SLOW when strictly more than 10 under.
    pub fn classify(progress: ProgressPercent) -> Self {
        let gap = progress.value() as i64 - TARGET_PROGRESS;
        if gap >= FAST_MARGIN {
            Tempo::Fast
        } else if gap < SLOW_MARGIN {
            Tempo::Slow
        } else {
            Tempo::Normal
        }
    }

    /// Months the milestone timeline moves: earlier for FAST, later for SLOW.
    pub fn month_offset(&self) -> i8 {
        match self {
            Tempo::Fast => -1,
            Tempo::Normal => 0,
            Tempo::Slow => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tempo::Fast => "Hızlı",
            Tempo::Normal => "Normal",
            Tempo::Slow => "Yavaş",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Tempo::Fast => "Hedefin önündesin, denemelere bir ay erken başlayabilirsin.",
            Tempo::Normal => "Plana uygun ilerliyorsun, bu tempoyu koru.",
            Tempo::Slow => "Hedefin gerisindesin, eksik konulara ağırlık ver; denemeler bir ay ertelendi.",
        }
    }
}
