//! Domain models for the enrollment report pipeline.
//!
//! - [`EnrollmentType`] - The four pension enrollment categories
//! - [`EnrollmentRecord`] - One sub-region row of the source CSV
//! - [`MeltedRecord`] - One (row, enrollment type) pair in long form
//! - [`ProvinceAggregate`] - Per-province sums

/// Column holding the sub-region name, e.g. `서울특별시 강남구`.
pub const REGION_COLUMN: &str = "시군구명";

/// Column holding the age bracket label.
pub const AGE_BRACKET_COLUMN: &str = "연령(구분)";

// =============================================================================
// Enrollment Type
// =============================================================================

/// Category of pension-scheme participation.
///
/// Declaration order is the fixed value-column order used everywhere
/// a table is reshaped or summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnrollmentType {
    /// Enrolled through an employer.
    Workplace,
    /// Regional enrollment (self-employed, freelancers).
    Regional,
    /// Voluntary enrollment.
    Voluntary,
    /// Voluntary enrollment continued past the mandatory age.
    VoluntaryContinued,
}

impl EnrollmentType {
    /// All types, in value-column order.
    pub const ALL: [EnrollmentType; 4] = [
        Self::Workplace,
        Self::Regional,
        Self::Voluntary,
        Self::VoluntaryContinued,
    ];

    /// Header of the count column in the source CSV.
    ///
    /// Also used as the type label in reshaped tables and charts.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Workplace => "사업장가입자",
            Self::Regional => "지역가입자",
            Self::Voluntary => "임의가입자",
            Self::VoluntaryContinued => "임의계속가입자",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Workplace => "직장인 가입자 수",
            Self::Regional => "자영업/프리랜서 가입자 수",
            Self::Voluntary => "임의 가입자 수",
            Self::VoluntaryContinued => "임의계속 가입자 수",
        }
    }
}

impl std::fmt::Display for EnrollmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

// =============================================================================
// Records
// =============================================================================

/// Per-type enrollment counts.
///
/// Counts are signed: the source data is taken as-is and negative
/// values are not rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrollmentCounts {
    pub workplace: i64,
    pub regional: i64,
    pub voluntary: i64,
    pub voluntary_continued: i64,
}

impl EnrollmentCounts {
    /// Count for one enrollment type.
    pub fn get(&self, kind: EnrollmentType) -> i64 {
        match kind {
            EnrollmentType::Workplace => self.workplace,
            EnrollmentType::Regional => self.regional,
            EnrollmentType::Voluntary => self.voluntary,
            EnrollmentType::VoluntaryContinued => self.voluntary_continued,
        }
    }

    /// Set the count for one enrollment type.
    pub fn set(&mut self, kind: EnrollmentType, value: i64) {
        match kind {
            EnrollmentType::Workplace => self.workplace = value,
            EnrollmentType::Regional => self.regional = value,
            EnrollmentType::Voluntary => self.voluntary = value,
            EnrollmentType::VoluntaryContinued => self.voluntary_continued = value,
        }
    }

    /// Sum across all four types.
    pub fn total(&self) -> i64 {
        EnrollmentType::ALL.iter().map(|t| self.get(*t)).sum()
    }
}

/// One sub-region row of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRecord {
    /// Sub-region name (city/county/district), e.g. `서울특별시 강남구`.
    pub region_name: String,
    /// Leading token of `region_name`, e.g. `서울특별시`.
    pub province: String,
    /// Age bracket label.
    pub age_bracket: String,
    /// Enrollment counts.
    pub counts: EnrollmentCounts,
}

impl EnrollmentRecord {
    /// Build a record, deriving the province from the region name.
    ///
    /// Returns `None` when the region name has no non-whitespace token.
    pub fn new(
        region_name: impl Into<String>,
        age_bracket: impl Into<String>,
        counts: EnrollmentCounts,
    ) -> Option<Self> {
        let region_name = region_name.into();
        let province = derive_province(&region_name)?.to_string();
        Some(Self {
            region_name,
            province,
            age_bracket: age_bracket.into(),
            counts,
        })
    }
}

/// First whitespace-separated token of a region name.
pub fn derive_province(region_name: &str) -> Option<&str> {
    region_name.split_whitespace().next()
}

/// Long-form row: one per (source row, enrollment type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeltedRecord {
    pub age_bracket: String,
    pub province: String,
    pub enrollment_type: EnrollmentType,
    pub count: i64,
}

/// Sums for one province.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvinceAggregate {
    pub province: String,
    pub workplace: i64,
    pub regional: i64,
    pub voluntary: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_province_first_token() {
        assert_eq!(derive_province("서울특별시 강남구"), Some("서울특별시"));
        assert_eq!(derive_province("경기도 수원시 장안구"), Some("경기도"));
        assert_eq!(derive_province("  세종특별자치시  "), Some("세종특별자치시"));
    }

    #[test]
    fn test_derive_province_empty() {
        assert_eq!(derive_province(""), None);
        assert_eq!(derive_province("   \t"), None);
        assert!(EnrollmentRecord::new("  ", "20대", EnrollmentCounts::default()).is_none());
    }

    #[test]
    fn test_enrollment_type_columns() {
        let columns: Vec<_> = EnrollmentType::ALL.iter().map(|t| t.column()).collect();
        assert_eq!(columns, ["사업장가입자", "지역가입자", "임의가입자", "임의계속가입자"]);
        assert_eq!(EnrollmentType::Regional.to_string(), "지역가입자");
    }

    #[test]
    fn test_counts_total() {
        let counts = EnrollmentCounts {
            workplace: 10,
            regional: 5,
            voluntary: 2,
            voluntary_continued: 1,
        };
        assert_eq!(counts.total(), 18);
        assert_eq!(counts.get(EnrollmentType::Regional), 5);
    }
}
