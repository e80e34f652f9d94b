use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only record of a privileged action. No update or delete exists for
/// these entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminLogEntity {
    pub id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub admin_user: String,
    pub action: String,
    pub details: String,
}
