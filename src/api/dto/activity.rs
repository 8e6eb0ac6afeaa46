//! DTOs for the professor-activity association resource.

use serde::{Deserialize, Serialize};

use crate::api::dto::assignment::ProfessorSummary;
use crate::api::dto::lookups::NamedItem;
use crate::domain::entities::ActivityRecordDetail;

/// Write payload. The activity is an embedded object, not a bare id —
/// the one association that differs from the discipline contract.
#[derive(Debug, Deserialize)]
pub struct ActivityRecordWriteRequest {
    pub professor: i64,
    pub activity: EmbeddedActivity,
    pub description: Option<String>,
}

/// Embedded activity reference, resolved by its unique name.
#[derive(Debug, Deserialize)]
pub struct EmbeddedActivity {
    pub name: String,
}

/// Activity record as returned by the standalone resource.
#[derive(Debug, Serialize)]
pub struct ActivityRecordItem {
    pub id: i64,
    pub professor: ProfessorSummary,
    pub activity: NamedItem,
    pub description: Option<String>,
}

impl From<ActivityRecordDetail> for ActivityRecordItem {
    fn from(detail: ActivityRecordDetail) -> Self {
        Self {
            id: detail.id,
            professor: detail.professor.into(),
            activity: detail.activity.into(),
            description: detail.description,
        }
    }
}

/// Activity record as nested inside a professor read (no professor echo).
#[derive(Debug, Serialize)]
pub struct ProfessorActivityItem {
    pub id: i64,
    pub activity: NamedItem,
    pub description: Option<String>,
}

impl From<ActivityRecordDetail> for ProfessorActivityItem {
    fn from(detail: ActivityRecordDetail) -> Self {
        Self {
            id: detail.id,
            activity: detail.activity.into(),
            description: detail.description,
        }
    }
}
