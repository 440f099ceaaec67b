use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Academic track ("alan") a student prepares for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Track {
    Sayisal,
    Sozel,
    EsitAgirlik,
    /// Language track; also the column used for unrecognised labels.
    Dil,
}

impl Track {
    pub const ALL: [Track; 4] = [Track::Sayisal, Track::Sozel, Track::EsitAgirlik, Track::Dil];

    /// Parse a stored field label. Accepts the full label or its code in
    /// parentheses; anything else maps to `Track::Dil`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if let Some(track) = Track::ALL.iter().find(|t| t.label() == label) {
            return *track;
        }
        if label.contains("(MF)") {
            Track::Sayisal
        } else if label.contains("(TM)") {
            Track::Sozel
        } else if label.contains("(EA)") {
            Track::EsitAgirlik
        } else {
            Track::Dil
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Track::Sayisal => "Sayısal (MF)",
            Track::Sozel => "Sözel (TM)",
            Track::EsitAgirlik => "Eşit Ağırlık (EA)",
            Track::Dil => "Dil",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TopicRecord {
    pub net_score: f64,
}

impl TopicRecord {
    fn from_value(value: &Value) -> Self {
        TopicRecord {
            net_score: sanitize_net(value.get("net_score").and_then(Value::as_f64).unwrap_or(0.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SessionRecord {
    pub completed: bool,
}

impl SessionRecord {
    fn from_value(value: &Value) -> Self {
        SessionRecord {
            completed: value.get("completed").and_then(Value::as_bool).unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Survey {
    pub sleep_time: String,
}

/// The read shape of a stored user document.
///
/// Decoding never fails on shape: unknown keys are ignored, missing or
/// malformed sections fall back to empty values. Only syntactically
/// invalid JSON is rejected, and that happens before this type is built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct UserSnapshot {
    pub field: Option<String>,
    pub topic_tracking: BTreeMap<String, TopicRecord>,
    pub pomodoro: BTreeMap<String, SessionRecord>,
    pub survey: Survey,
}

impl From<Value> for UserSnapshot {
    fn from(value: Value) -> Self {
        let survey = value.get("survey");

        let field = value
            .get("field")
            .and_then(Value::as_str)
            .or_else(|| survey.and_then(|s| s.get("field")).and_then(Value::as_str))
            .map(str::to_owned);

        let topic_tracking = value
            .get("topic_tracking")
            .and_then(Value::as_object)
            .map(|topics| {
                topics
                    .iter()
                    .map(|(id, record)| (id.clone(), TopicRecord::from_value(record)))
                    .collect()
            })
            .unwrap_or_default();

        let pomodoro = value
            .get("pomodoro")
            .and_then(Value::as_object)
            .map(|sessions| {
                sessions
                    .iter()
                    .map(|(id, record)| (id.clone(), SessionRecord::from_value(record)))
                    .collect()
            })
            .unwrap_or_default();

        let sleep_time = survey
            .and_then(|s| s.get("sleep_time"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        UserSnapshot {
            field,
            topic_tracking,
            pomodoro,
            survey: Survey { sleep_time },
        }
    }
}

impl UserSnapshot {
    pub fn builder() -> UserSnapshotBuilder {
        UserSnapshotBuilder::default()
    }

    /// Missing field label resolves to the default column.
    pub fn track(&self) -> Track {
        self.field.as_deref().map(Track::from_label).unwrap_or(Track::Dil)
    }

    pub fn has_topics(&self) -> bool {
        !self.topic_tracking.is_empty()
    }

    pub fn topic_nets(&self) -> impl Iterator<Item = f64> + '_ {
        self.topic_tracking.values().map(|t| sanitize_net(t.net_score))
    }

    pub fn completed_sessions(&self) -> usize {
        self.pomodoro.values().filter(|s| s.completed).count()
    }

    pub fn sleep_time(&self) -> &str {
        &self.survey.sleep_time
    }
}

fn sanitize_net(net: f64) -> f64 {
    if net.is_finite() { net } else { 0.0 }
}

/// Builds snapshots in code, mainly for callers that already hold typed data.
#[derive(Debug, Default)]
pub struct UserSnapshotBuilder {
    snapshot: UserSnapshot,
}

impl UserSnapshotBuilder {
    pub fn field<S: Into<String>>(mut self, label: S) -> Self {
        self.snapshot.field = Some(label.into());
        self
    }

    pub fn topic<S: Into<String>>(mut self, id: S, net_score: f64) -> Self {
        self.snapshot
            .topic_tracking
            .insert(id.into(), TopicRecord { net_score: sanitize_net(net_score) });
        self
    }

    pub fn session<S: Into<String>>(mut self, id: S, completed: bool) -> Self {
        self.snapshot.pomodoro.insert(id.into(), SessionRecord { completed });
        self
    }

    pub fn sleep_time<S: Into<String>>(mut self, label: S) -> Self {
        self.snapshot.survey.sleep_time = label.into();
        self
    }

    pub fn build(self) -> UserSnapshot {
        self.snapshot
    }
}
