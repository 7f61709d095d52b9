/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::iso_millis;

/// Body of `POST /api/task/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    /// Always serialized as UTC with millisecond precision
    #[serde(with = "iso_millis")]
    pub deadline: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_create_task_request_wire_format() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let local = ist.with_ymd_and_hms(2025, 2, 16, 20, 25, 0).unwrap();
        let req = CreateTaskRequest {
            title: "Write report".to_string(),
            description: "Quarterly numbers".to_string(),
            deadline: local.with_timezone(&Utc),
        };

        let value = serde_json::to_value(&req).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Write report",
                "description": "Quarterly numbers",
                "deadline": "2025-02-16T14:55:00.000Z",
            })
        );
    }
}
