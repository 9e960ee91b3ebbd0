//! Clipboard payload for a submitted agent
//!
//! The payload is pasted by hand into the `sampleAgents` array of the
//! directory source, so field names and nesting must match `AgentRecord`'s
//! serde layout exactly. Keys follow struct declaration order.

use crate::directory::AgentRecord;

/// Pretty-printed JSON with two-space indentation
pub fn to_payload(record: &AgentRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}
