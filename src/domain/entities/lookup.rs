//! Shared entry type for the single-column reference tables.

/// A reference-table row: an id plus one unique scalar value.
///
/// Office numbers, degree/position/discipline/teaching-type names and
/// activity names all share this shape; the owning table differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub id: i64,
    pub value: String,
}

impl LookupEntry {
    pub fn new(id: i64, value: String) -> Self {
        Self { id, value }
    }
}
