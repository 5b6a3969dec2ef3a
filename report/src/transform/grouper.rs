//! Group enrollment records by province.
//!
//! ```text
//! Records (one per sub-region)            →  Aggregates (one per province)
//! ┌──────────────────────────────┐          ┌──────────────────────────┐
//! │ 서울특별시 강남구  W=10 R=5   │          │ 서울특별시  W=18 R=9     │
//! │ 서울특별시 종로구  W=8  R=4   │    →     ├──────────────────────────┤
//! │ 부산광역시 해운대구 W=4 R=11  │          │ 부산광역시  W=4  R=11    │
//! └──────────────────────────────┘          └──────────────────────────┘
//! ```
//!
//! Output is ordered by province name so repeated runs over the same
//! input produce identical tables.

use std::collections::BTreeMap;

use crate::models::{EnrollmentCounts, EnrollmentRecord, EnrollmentType, ProvinceAggregate};

/// Sum workplace, regional, and voluntary counts per province.
pub fn aggregate_by_province(records: &[EnrollmentRecord]) -> Vec<ProvinceAggregate> {
    let mut provinces: BTreeMap<&str, ProvinceAggregate> = BTreeMap::new();

    for record in records {
        let entry = provinces
            .entry(record.province.as_str())
            .or_insert_with(|| ProvinceAggregate {
                province: record.province.clone(),
                ..Default::default()
            });
        entry.workplace += record.counts.workplace;
        entry.regional += record.counts.regional;
        entry.voluntary += record.counts.voluntary;
    }

    provinces.into_values().collect()
}

/// National totals per enrollment type.
pub fn enrollment_totals(records: &[EnrollmentRecord]) -> Vec<(EnrollmentType, i64)> {
    let totals = records
        .iter()
        .fold(EnrollmentCounts::default(), |mut acc, record| {
            for kind in EnrollmentType::ALL {
                acc.set(kind, acc.get(kind) + record.counts.get(kind));
            }
            acc
        });

    EnrollmentType::ALL
        .into_iter()
        .map(|kind| (kind, totals.get(kind)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, workplace: i64, regional: i64, voluntary: i64) -> EnrollmentRecord {
        let counts = EnrollmentCounts {
            workplace,
            regional,
            voluntary,
            voluntary_continued: 1,
        };
        EnrollmentRecord::new(region, "20대", counts).unwrap()
    }

    fn sample() -> Vec<EnrollmentRecord> {
        vec![
            record("서울특별시 강남구", 10, 5, 1),
            record("부산광역시 해운대구", 4, 11, 0),
            record("서울특별시 종로구", 8, 4, 2),
        ]
    }

    #[test]
    fn test_one_row_per_province() {
        let aggregates = aggregate_by_province(&sample());

        assert_eq!(aggregates.len(), 2);
        let seoul = aggregates.iter().find(|a| a.province == "서울특별시").unwrap();
        assert_eq!(seoul.workplace, 18);
        assert_eq!(seoul.regional, 9);
        assert_eq!(seoul.voluntary, 3);
    }

    #[test]
    fn test_workplace_total_preserved() {
        let records = sample();
        let aggregates = aggregate_by_province(&records);

        let before: i64 = records.iter().map(|r| r.counts.workplace).sum();
        let after: i64 = aggregates.iter().map(|a| a.workplace).sum();
        assert_eq!(before, after);
    }

    #[test]
    fn test_order_is_independent_of_input_order() {
        let mut reversed = sample();
        reversed.reverse();

        assert_eq!(aggregate_by_province(&sample()), aggregate_by_province(&reversed));
    }

    #[test]
    fn test_enrollment_totals() {
        let totals = enrollment_totals(&sample());

        assert_eq!(
            totals,
            vec![
                (EnrollmentType::Workplace, 22),
                (EnrollmentType::Regional, 20),
                (EnrollmentType::Voluntary, 3),
                (EnrollmentType::VoluntaryContinued, 3),
            ]
        );
    }
}
