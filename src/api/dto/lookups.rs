//! DTOs for the reference (lookup) resources.
//!
//! Offices serialize their scalar as `number`; every other reference
//! resource uses `name`, so they share one item/write pair.

use serde::{Deserialize, Serialize};

use crate::api::dto::assignment::AssignmentItem;
use crate::domain::entities::{LookupEntry, TeachingAssignmentDetail};

/// Extracts the single scalar from a lookup write payload.
pub trait LookupWrite {
    fn into_value(self) -> String;
}

/// Write payload for offices: `{"number": "..."}`.
#[derive(Debug, Deserialize)]
pub struct OfficeWrite {
    pub number: String,
}

impl LookupWrite for OfficeWrite {
    fn into_value(self) -> String {
        self.number
    }
}

/// Office as returned to clients.
#[derive(Debug, Serialize)]
pub struct OfficeItem {
    pub id: i64,
    pub number: String,
}

impl From<LookupEntry> for OfficeItem {
    fn from(entry: LookupEntry) -> Self {
        Self {
            id: entry.id,
            number: entry.value,
        }
    }
}

/// Write payload for the name-valued resources: `{"name": "..."}`.
#[derive(Debug, Deserialize)]
pub struct NameWrite {
    pub name: String,
}

impl LookupWrite for NameWrite {
    fn into_value(self) -> String {
        self.name
    }
}

/// Name-valued entry as returned to clients (degrees, positions,
/// disciplines, teaching types, activities).
#[derive(Debug, Serialize)]
pub struct NamedItem {
    pub id: i64,
    pub name: String,
}

impl From<LookupEntry> for NamedItem {
    fn from(entry: LookupEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.value,
        }
    }
}

/// Discipline detail with its teaching assignments embedded.
#[derive(Debug, Serialize)]
pub struct DisciplineDetailResponse {
    pub id: i64,
    pub name: String,
    pub assignments: Vec<AssignmentItem>,
}

impl DisciplineDetailResponse {
    pub fn new(entry: LookupEntry, assignments: Vec<TeachingAssignmentDetail>) -> Self {
        Self {
            id: entry.id,
            name: entry.value,
            assignments: assignments.into_iter().map(AssignmentItem::from).collect(),
        }
    }
}
