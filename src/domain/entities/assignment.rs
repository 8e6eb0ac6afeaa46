//! Teaching assignment: a professor teaches a discipline in one mode.

use crate::domain::entities::lookup::LookupEntry;
use crate::domain::entities::professor::ProfessorRef;

/// A (professor, discipline, teaching type) row. The triple is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeachingAssignment {
    pub id: i64,
    pub professor_id: i64,
    pub discipline_id: i64,
    pub teaching_type_id: i64,
}

/// Input data for creating or replacing an assignment.
#[derive(Debug, Clone, Copy)]
pub struct NewTeachingAssignment {
    pub professor_id: i64,
    pub discipline_id: i64,
    pub teaching_type_id: i64,
}

/// An assignment with its three references expanded.
///
/// This is what reads return; the raw foreign ids are write-only.
#[derive(Debug, Clone)]
pub struct TeachingAssignmentDetail {
    pub id: i64,
    pub professor: ProfessorRef,
    pub discipline: LookupEntry,
    pub teaching_type: LookupEntry,
}
