//! DTOs for the professor resource.
//!
//! Writes carry bare reference ids; reads return full nested objects plus
//! the read-only `disciplines` and `activities` collections. The two
//! contracts are deliberately separate types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::activity::ProfessorActivityItem;
use crate::api::dto::assignment::AssignmentItem;
use crate::api::dto::lookups::{NamedItem, OfficeItem};
use crate::api::dto::work_time::WorkTimeItem;
use crate::domain::entities::{NewProfessor, ProfessorDetail};

/// Write payload for creating or replacing a professor.
///
/// Length bounds mirror the column widths in the schema.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfessorWriteRequest {
    #[validate(length(min = 1, max = 20))]
    pub first_name: String,

    #[validate(length(min = 1, max = 20))]
    pub last_name: String,

    #[validate(length(max = 20))]
    pub third_name: Option<String>,

    pub birth_date: NaiveDate,

    #[validate(length(min = 1, max = 30))]
    pub email: String,

    #[validate(length(min = 1, max = 11))]
    pub phone_number: String,

    /// Optional office id.
    pub office: Option<i64>,

    /// Optional degree id.
    pub degree: Option<i64>,

    /// Required position id.
    pub position: i64,

    /// Required work-time id.
    pub work_time: i64,
}

impl From<ProfessorWriteRequest> for NewProfessor {
    fn from(request: ProfessorWriteRequest) -> Self {
        NewProfessor {
            first_name: request.first_name,
            last_name: request.last_name,
            third_name: request.third_name,
            birth_date: request.birth_date,
            email: request.email,
            phone_number: request.phone_number,
            office_id: request.office,
            degree_id: request.degree,
            position_id: request.position,
            work_time_id: request.work_time,
        }
    }
}

/// Professor as returned to clients.
#[derive(Debug, Serialize)]
pub struct ProfessorResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub third_name: Option<String>,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone_number: String,
    pub office: Option<OfficeItem>,
    pub degree: Option<NamedItem>,
    pub position: NamedItem,
    pub work_time: WorkTimeItem,
    pub disciplines: Vec<AssignmentItem>,
    pub activities: Vec<ProfessorActivityItem>,
}

impl From<ProfessorDetail> for ProfessorResponse {
    fn from(detail: ProfessorDetail) -> Self {
        Self {
            id: detail.professor.id,
            first_name: detail.professor.first_name,
            last_name: detail.professor.last_name,
            third_name: detail.professor.third_name,
            birth_date: detail.professor.birth_date,
            email: detail.professor.email,
            phone_number: detail.professor.phone_number,
            office: detail.office.map(OfficeItem::from),
            degree: detail.degree.map(NamedItem::from),
            position: detail.position.into(),
            work_time: detail.work_time.into(),
            disciplines: detail
                .disciplines
                .into_iter()
                .map(AssignmentItem::from)
                .collect(),
            activities: detail
                .activities
                .into_iter()
                .map(ProfessorActivityItem::from)
                .collect(),
        }
    }
}
