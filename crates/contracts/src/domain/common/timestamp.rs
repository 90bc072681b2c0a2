use serde::{Deserialize, Serialize};

/// Server-assigned document timestamp (seconds + nanoseconds since the unix epoch).
///
/// While a local write is still pending the store reports no timestamp at all,
/// so aggregates hold it as `Option<DocTimestamp>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocTimestamp {
    #[serde(default)]
    pub seconds: i64,
    #[serde(default)]
    pub nanoseconds: i32,
}

impl DocTimestamp {
    pub fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            nanoseconds: 0,
        }
    }

    /// Sort key where a missing timestamp counts as the epoch.
    pub fn sort_key(ts: Option<&DocTimestamp>) -> i64 {
        ts.map(|t| t.seconds).unwrap_or(0)
    }
}
