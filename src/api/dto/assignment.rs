//! DTOs for the professor-discipline association resource.

use serde::{Deserialize, Serialize};

use crate::api::dto::lookups::NamedItem;
use crate::domain::entities::{ProfessorRef, TeachingAssignmentDetail};

/// Write payload: all three references as bare ids.
#[derive(Debug, Deserialize)]
pub struct AssignmentWriteRequest {
    pub professor: i64,
    pub discipline: i64,
    pub teaching_type: i64,
}

/// Name-only professor form embedded in expanded reads.
#[derive(Debug, Serialize)]
pub struct ProfessorSummary {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub third_name: Option<String>,
}

impl From<ProfessorRef> for ProfessorSummary {
    fn from(professor: ProfessorRef) -> Self {
        Self {
            id: professor.id,
            last_name: professor.last_name,
            first_name: professor.first_name,
            third_name: professor.third_name,
        }
    }
}

/// Assignment as returned to clients: references expanded, ids not echoed.
#[derive(Debug, Serialize)]
pub struct AssignmentItem {
    pub id: i64,
    pub professor: ProfessorSummary,
    pub discipline: NamedItem,
    pub teaching_type: NamedItem,
}

impl From<TeachingAssignmentDetail> for AssignmentItem {
    fn from(detail: TeachingAssignmentDetail) -> Self {
        Self {
            id: detail.id,
            professor: detail.professor.into(),
            discipline: detail.discipline.into(),
            teaching_type: detail.teaching_type.into(),
        }
    }
}
