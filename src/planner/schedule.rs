use serde::{Serialize, Serializer};
use std::fmt;

use crate::planner::tempo::Tempo;
use crate::snapshot::Track;

/// The nine months of a study year, October through June.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StudyMonth {
    #[serde(rename = "Ekim")]
    October,
    #[serde(rename = "Kasım")]
    November,
    #[serde(rename = "Aralık")]
    December,
    #[serde(rename = "Ocak")]
    January,
    #[serde(rename = "Şubat")]
    February,
    #[serde(rename = "Mart")]
    March,
    #[serde(rename = "Nisan")]
    April,
    #[serde(rename = "Mayıs")]
    May,
    #[serde(rename = "Haziran")]
    June,
}

impl StudyMonth {
    pub const ALL: [StudyMonth; 9] = [
        StudyMonth::October,
        StudyMonth::November,
        StudyMonth::December,
        StudyMonth::January,
        StudyMonth::February,
        StudyMonth::March,
        StudyMonth::April,
        StudyMonth::May,
        StudyMonth::June,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StudyMonth::October => "Ekim",
            StudyMonth::November => "Kasım",
            StudyMonth::December => "Aralık",
            StudyMonth::January => "Ocak",
            StudyMonth::February => "Şubat",
            StudyMonth::March => "Mart",
            StudyMonth::April => "Nisan",
            StudyMonth::May => "Mayıs",
            StudyMonth::June => "Haziran",
        }
    }

    /// Map a calendar month (1-12). July through September are outside the study year.
    pub fn from_calendar_month(month: u32) -> Option<Self> {
        match month {
            10 => Some(StudyMonth::October),
            11 => Some(StudyMonth::November),
            12 => Some(StudyMonth::December),
            1 => Some(StudyMonth::January),
            2 => Some(StudyMonth::February),
            3 => Some(StudyMonth::March),
            4 => Some(StudyMonth::April),
            5 => Some(StudyMonth::May),
            6 => Some(StudyMonth::June),
            _ => None,
        }
    }
}

fn base_focus(month: StudyMonth) -> &'static str {
    match month {
        StudyMonth::October => "Temel Konular",
        StudyMonth::November => "TYT Matematik & Türkçe",
        StudyMonth::December => "Fen Bilimleri Temeli",
        StudyMonth::January => "AYT Hazırlık",
        StudyMonth::February => "Eksik Konular",
        StudyMonth::March => "Genel Tekrar",
        StudyMonth::April => "Deneme & Revizyon",
        StudyMonth::May => "Son Tekrar & Deneme",
        StudyMonth::June => "Final Tekrar",
    }
}

/// Focus area for a month. November to January specialise per track;
/// the language track shares the base schedule.
pub fn focus_area(track: Track, month: StudyMonth) -> &'static str {
    use StudyMonth::*;
    match (track, month) {
        (Track::Sayisal, November) => "Matematik Temeli",
        (Track::Sayisal, December) => "Fizik & Kimya",
        (Track::Sayisal, January) => "Biyoloji & AYT Mat",
        (Track::Sozel, November) => "Türkçe & Edebiyat",
        (Track::Sozel, December) => "Tarih Temeli",
        (Track::Sozel, January) => "Coğrafya & Felsefe",
        (Track::EsitAgirlik, November) => "Matematik & Türkçe",
        (Track::EsitAgirlik, December) => "Sosyal Bilimler",
        (Track::EsitAgirlik, January) => "Edebiyat & İngilizce",
        _ => base_focus(month),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneShift {
    OnTime,
    Early,
    Late,
}

/// A regime change in the study year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Milestone {
    MockExamsStart(MilestoneShift),
    FinalPreparation,
    ExamMonth,
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Milestone::MockExamsStart(shift) => {
                f.write_str("DENEMELER BAŞLIYOR!")?;
                match shift {
                    MilestoneShift::OnTime => Ok(()),
                    MilestoneShift::Early => f.write_str(" (1 ay erken)"),
                    MilestoneShift::Late => f.write_str(" (1 ay geç)"),
                }
            }
            Milestone::FinalPreparation => f.write_str("YKS'YE HAZIRLIK!"),
            Milestone::ExamMonth => f.write_str("YKS ZAMANI!"),
        }
    }
}

impl Serialize for Milestone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Month that opens mock exams for the given tempo.
pub fn mock_exam_month(tempo: Tempo) -> StudyMonth {
    match tempo {
        Tempo::Fast => StudyMonth::March,
        Tempo::Normal => StudyMonth::April,
        Tempo::Slow => StudyMonth::May,
    }
}

/// The kickoff is relocated, never duplicated. When it lands on May it
/// takes that month's slot.
pub fn milestone_for(month: StudyMonth, tempo: Tempo) -> Option<Milestone> {
    if month == mock_exam_month(tempo) {
        let shift = match tempo {
            Tempo::Fast => MilestoneShift::Early,
            Tempo::Normal => MilestoneShift::OnTime,
            Tempo::Slow => MilestoneShift::Late,
        };
        return Some(Milestone::MockExamsStart(shift));
    }
    match month {
        StudyMonth::May => Some(Milestone::FinalPreparation),
        StudyMonth::June => Some(Milestone::ExamMonth),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialised_months_per_track() {
        assert_eq!(focus_area(Track::Sayisal, StudyMonth::November), "Matematik Temeli");
        assert_eq!(focus_area(Track::Sozel, StudyMonth::December), "Tarih Temeli");
        assert_eq!(focus_area(Track::EsitAgirlik, StudyMonth::January), "Edebiyat & İngilizce");
        assert_eq!(focus_area(Track::Dil, StudyMonth::November), "TYT Matematik & Türkçe");
        assert_eq!(focus_area(Track::Dil, StudyMonth::January), "AYT Hazırlık");
    }

    #[test]
    fn test_other_months_use_base_focus_for_every_track() {
        for track in Track::ALL {
            assert_eq!(focus_area(track, StudyMonth::October), "Temel Konular");
            assert_eq!(focus_area(track, StudyMonth::April), "Deneme & Revizyon");
            assert_eq!(focus_area(track, StudyMonth::June), "Final Tekrar");
        }
    }

    #[test]
    fn test_normal_tempo_keeps_april_kickoff() {
        let labels: Vec<_> = StudyMonth::ALL
            .iter()
            .filter_map(|m| milestone_for(*m, Tempo::Normal).map(|ms| (*m, ms.to_string())))
            .collect();
        assert_eq!(
            labels,
            vec![
                (StudyMonth::April, "DENEMELER BAŞLIYOR!".to_string()),
                (StudyMonth::May, "YKS'YE HAZIRLIK!".to_string()),
                (StudyMonth::June, "YKS ZAMANI!".to_string()),
            ]
        );
    }

    #[test]
    fn test_fast_tempo_moves_kickoff_to_march() {
        assert_eq!(
            milestone_for(StudyMonth::March, Tempo::Fast).map(|m| m.to_string()).as_deref(),
            Some("DENEMELER BAŞLIYOR! (1 ay erken)")
        );
        assert_eq!(milestone_for(StudyMonth::April, Tempo::Fast), None);
        assert_eq!(milestone_for(StudyMonth::May, Tempo::Fast), Some(Milestone::FinalPreparation));
    }

    #[test]
    fn test_slow_tempo_moves_kickoff_to_may() {
        assert_eq!(milestone_for(StudyMonth::April, Tempo::Slow), None);
        assert_eq!(
            milestone_for(StudyMonth::May, Tempo::Slow).map(|m| m.to_string()).as_deref(),
            Some("DENEMELER BAŞLIYOR! (1 ay geç)")
        );
        assert_eq!(milestone_for(StudyMonth::June, Tempo::Slow), Some(Milestone::ExamMonth));
    }

    #[test]
    fn test_calendar_mapping_skips_summer() {
        assert_eq!(StudyMonth::from_calendar_month(10), Some(StudyMonth::October));
        assert_eq!(StudyMonth::from_calendar_month(6), Some(StudyMonth::June));
        assert_eq!(StudyMonth::from_calendar_month(8), None);
    }
}
