//! Wide-to-long reshaping of enrollment records.
//!
//! ```text
//! Wide (one row per sub-region)               Long (one row per type)
//! ┌───────────────────────────────────┐       ┌─────────────────────────────┐
//! │ 20대, 서울특별시, W=10 R=5 V=2 C=1 │  →    │ 20대, 서울특별시, 사업장, 10 │
//! └───────────────────────────────────┘       │ 20대, 서울특별시, 지역,    5 │
//!                                             │ 20대, 서울특별시, 임의,    2 │
//!                                             │ 20대, 서울특별시, 임의계속, 1 │
//!                                             └─────────────────────────────┘
//! ```

use crate::models::{EnrollmentRecord, EnrollmentType, MeltedRecord};

/// Melt records into one row per (record, enrollment type).
///
/// Rows stay grouped by source record, and within a record follow
/// [`EnrollmentType::ALL`] order.
pub fn melt(records: &[EnrollmentRecord]) -> Vec<MeltedRecord> {
    let mut melted = Vec::with_capacity(records.len() * EnrollmentType::ALL.len());

    for record in records {
        for kind in EnrollmentType::ALL {
            melted.push(MeltedRecord {
                age_bracket: record.age_bracket.clone(),
                province: record.province.clone(),
                enrollment_type: kind,
                count: record.counts.get(kind),
            });
        }
    }

    melted
}
