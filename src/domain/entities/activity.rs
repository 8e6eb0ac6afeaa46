//! Activity record: a professor participates in an extra activity.

use crate::domain::entities::lookup::LookupEntry;
use crate::domain::entities::professor::ProfessorRef;

/// A (professor, activity) row with an optional free-text description.
/// The pair is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub id: i64,
    pub professor_id: i64,
    pub activity_id: i64,
    pub description: Option<String>,
}

/// Input data for creating or replacing an activity record.
#[derive(Debug, Clone)]
pub struct NewActivityRecord {
    pub professor_id: i64,
    pub activity_id: i64,
    pub description: Option<String>,
}

/// An activity record with professor and activity expanded.
#[derive(Debug, Clone)]
pub struct ActivityRecordDetail {
    pub id: i64,
    pub professor: ProfessorRef,
    pub activity: LookupEntry,
    pub description: Option<String>,
}
