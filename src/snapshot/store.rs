use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::error::PlannerError;
use crate::snapshot::model::UserSnapshot;

/// User documents are keyed by the SHA-256 of the username, never the name itself.
pub fn user_key(username: &str) -> String {
    let digest = Sha256::digest(username.as_bytes());
    format!("{:x}", digest)
}

pub fn snapshot_path(data_dir: &Path, username: &str) -> PathBuf {
    data_dir.join("users").join(format!("{}.json", user_key(username)))
}

/// Load a snapshot asynchronously. A missing file is `Ok(None)`.
pub async fn load_snapshot(path: &Path) -> Result<Option<UserSnapshot>, PlannerError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = ?path, "No snapshot on disk");
            return Ok(None);
        }
        Err(e) => {
            return Err(PlannerError::new(
                format!("Failed to read snapshot: {}", e),
                "io"
            ).with_context(format!("path: {:?}", path)));
        }
    };

    let snapshot = serde_json::from_str::<UserSnapshot>(&content)
        .map_err(|e| PlannerError::new(
            format!("Failed to parse snapshot: {}", e),
            "json_parse"
        ).with_context(format!("path: {:?}", path)))?;

    tracing::debug!(
        path = ?path,
        topics = snapshot.topic_tracking.len(),
        sessions = snapshot.pomodoro.len(),
        "Snapshot loaded"
    );
    Ok(Some(snapshot))
}

pub async fn load_snapshot_for_user(
    data_dir: &Path,
    username: &str,
) -> Result<Option<UserSnapshot>, PlannerError> {
    load_snapshot(&snapshot_path(data_dir, username)).await
}
