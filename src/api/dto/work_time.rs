//! DTOs for the work-time resource.
//!
//! The wire field is `name` even though the value is numeric; clients
//! already depend on that shape.

use serde::{Deserialize, Serialize};

use crate::domain::entities::WorkTime;

/// Write payload: `{"name": 0.5}`.
#[derive(Debug, Deserialize)]
pub struct WorkTimeWrite {
    pub name: f64,
}

/// Work time as returned to clients.
#[derive(Debug, Serialize)]
pub struct WorkTimeItem {
    pub id: i64,
    pub name: f64,
}

impl From<WorkTime> for WorkTimeItem {
    fn from(work_time: WorkTime) -> Self {
        Self {
            id: work_time.id,
            name: work_time.value,
        }
    }
}
