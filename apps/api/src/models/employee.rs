use sqlx::FromRow;

use crate::matching::normalizer::{normalize, SkillSet};

/// Raw roster row as stored in the `employees` table.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
    /// Free-form, comma-separated skill text. May be NULL.
    pub skills: Option<String>,
}

/// An employee with normalized skills, ready for scoring.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub skills: SkillSet,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            skills: normalize(record.skills.as_deref()),
            id: record.id,
            name: record.name,
        }
    }
}
