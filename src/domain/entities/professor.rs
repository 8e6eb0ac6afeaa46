//! Professor entity, the primary record of the registry.

use chrono::NaiveDate;

use crate::domain::entities::activity::ActivityRecordDetail;
use crate::domain::entities::assignment::TeachingAssignmentDetail;
use crate::domain::entities::lookup::LookupEntry;
use crate::domain::entities::work_time::WorkTime;

/// A professor row as stored.
///
/// Office and degree are optional references; position and work time are
/// required. References are kept as raw ids here — expansion to full
/// objects happens when a read response is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub third_name: Option<String>,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone_number: String,
    pub office_id: Option<i64>,
    pub degree_id: Option<i64>,
    pub position_id: i64,
    pub work_time_id: i64,
}

impl Professor {
    /// "Last First" display form.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Short reference form embedded in expanded association reads.
    pub fn to_ref(&self) -> ProfessorRef {
        ProfessorRef {
            id: self.id,
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            third_name: self.third_name.clone(),
        }
    }
}

/// Input data for creating or fully replacing a professor.
#[derive(Debug, Clone)]
pub struct NewProfessor {
    pub first_name: String,
    pub last_name: String,
    pub third_name: Option<String>,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone_number: String,
    pub office_id: Option<i64>,
    pub degree_id: Option<i64>,
    pub position_id: i64,
    pub work_time_id: i64,
}

/// A professor with every reference expanded, as reads return it.
///
/// Writes carry bare ids; reads get full nested objects plus the two
/// read-only association collections.
#[derive(Debug, Clone)]
pub struct ProfessorDetail {
    pub professor: Professor,
    pub office: Option<LookupEntry>,
    pub degree: Option<LookupEntry>,
    pub position: LookupEntry,
    pub work_time: WorkTime,
    pub disciplines: Vec<TeachingAssignmentDetail>,
    pub activities: Vec<ActivityRecordDetail>,
}

/// Name-only professor reference used inside expanded association rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessorRef {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub third_name: Option<String>,
}
