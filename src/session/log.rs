use super::Session;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// One line of the internal audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLine {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an internal log line to the session.
pub fn ttlog(session: &mut Session, operation: &str, target: &str, message: &str) {
    session.log.push(LogLine {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    });
}
