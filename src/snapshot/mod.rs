pub mod model;
pub mod store;

pub use model::{SessionRecord, Survey, TopicRecord, Track, UserSnapshot, UserSnapshotBuilder};
