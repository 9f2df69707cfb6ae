//! JSONL file writer for purchase audit events.
//!
//! Each [`PurchaseEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tickets_application::ports::purchase_logger::{PurchaseEvent, PurchaseLogger};
use tracing::warn;

/// JSONL purchase logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing file so
/// the audit trail survives restarts. Flushes on `Drop`.
pub struct JsonlPurchaseLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlPurchaseLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create audit log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open audit log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One line of the audit trail.
///
/// Object payloads are inlined next to `type` and `timestamp`; anything else
/// is nested under `data`.
#[derive(Serialize)]
struct AuditRecord<'a> {
    #[serde(rename = "type")]
    event_type: &'a str,
    timestamp: String,
    #[serde(flatten)]
    body: AuditBody,
}

#[derive(Serialize)]
#[serde(untagged)]
enum AuditBody {
    Fields(Map<String, Value>),
    Data { data: Value },
}

impl<'a> AuditRecord<'a> {
    fn new(event: &'a PurchaseEvent, timestamp: DateTime<Utc>) -> Self {
        let body = match &event.payload {
            Value::Object(map) => {
                let mut fields = map.clone();
                fields.remove("type");
                fields.remove("timestamp");
                AuditBody::Fields(fields)
            }
            other => AuditBody::Data {
                data: other.clone(),
            },
        };
        Self {
            event_type: event.event_type,
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            body,
        }
    }
}

impl PurchaseLogger for JsonlPurchaseLogger {
    fn log(&self, event: PurchaseEvent) {
        let record = AuditRecord::new(&event, Utc::now());
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Dropping {} audit record: {}", event.event_type, e);
                return;
            }
        };

        let Ok(mut writer) = self.writer.lock() else {
            warn!("Audit log writer is poisoned; dropping {}", event.event_type);
            return;
        };
        if let Err(e) = writeln!(writer, "{}", line).and_then(|()| writer.flush()) {
            warn!("Could not write to audit log {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlPurchaseLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
