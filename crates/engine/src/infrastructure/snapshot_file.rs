//! Snapshot source backed by a JSON export of the host state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use partyhud_domain::HostSnapshot;

use crate::infrastructure::ports::{ClockPort, PortError, SnapshotSource};

/// Reads a [`HostSnapshot`] from disk on every call.
///
/// Exports without `capturedAt` are stamped with the read time.
pub struct JsonFileSnapshotSource {
    path: PathBuf,
    clock: Arc<dyn ClockPort>,
}

impl JsonFileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for JsonFileSnapshotSource {
    async fn snapshot(&self) -> Result<HostSnapshot, PortError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let mut snapshot: HostSnapshot = serde_json::from_str(&raw)?;
        if snapshot.captured_at.is_none() {
            snapshot.captured_at = Some(self.clock.now());
        }
        tracing::debug!(
            path = %self.path.display(),
            actors = snapshot.actors.len(),
            "Read host snapshot"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use std::io::Write;

    fn source(file: &tempfile::NamedTempFile) -> JsonFileSnapshotSource {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap();
        JsonFileSnapshotSource::new(file.path(), Arc::new(FixedClock(now)))
    }

    #[tokio::test]
    async fn stamps_missing_capture_time() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"currentUser": "u1", "actors": [{{"id": "a1", "name": "Fling"}}]}}"#
        )
        .unwrap();

        let snapshot = source(&file).snapshot().await.unwrap();
        assert_eq!(snapshot.actors.len(), 1);
        assert_eq!(
            snapshot.captured_at,
            Some(Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap())
        );
    }

    #[tokio::test]
    async fn keeps_exported_capture_time() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"currentUser": "u1", "capturedAt": "2024-01-01T00:00:00Z"}}"#
        )
        .unwrap();

        let snapshot = source(&file).snapshot().await.unwrap();
        assert_eq!(
            snapshot.captured_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[tokio::test]
    async fn malformed_export_is_a_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = source(&file).snapshot().await.unwrap_err();
        assert!(matches!(err, PortError::Serialization(_)));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap();
        let source = JsonFileSnapshotSource::new(dir.path().join("gone.json"), Arc::new(FixedClock(now)));

        let err = source.snapshot().await.unwrap_err();
        assert!(matches!(err, PortError::Io(_)));
    }
}
