use serde::{Deserialize, Serialize};

/// Key attribute of the exponent table.
pub const ID: &str = "ID";
pub const LATEST_GREETING_TIME: &str = "LatestGreetingTime";

/// A stored calculation, keyed by the text form of its result.
/// Writing the same result twice replaces the earlier record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExponentRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "LatestGreetingTime")]
    pub latest_greeting_time: String,
}

impl ExponentRecord {
    pub fn new(id: String, latest_greeting_time: String) -> Self {
        Self {
            id,
            latest_greeting_time,
        }
    }
}
