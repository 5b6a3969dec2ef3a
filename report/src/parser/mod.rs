//! Enrollment CSV loader with encoding handling and delimiter auto-detection.
//!
//! Turns the raw bytes of the source file into typed [`EnrollmentRecord`]s.
//! The source data is published in CP949, so that is the default; UTF-8
//! and chardet-based detection are available for re-exported copies.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::models::{
    EnrollmentCounts, EnrollmentRecord, EnrollmentType, AGE_BRACKET_COLUMN, REGION_COLUMN,
};

/// Text encoding of the input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EncodingChoice {
    /// Korean legacy code page (superset of EUC-KR).
    #[default]
    Cp949,
    /// UTF-8, with or without BOM.
    Utf8,
    /// Detect with chardet, falling back to CP949.
    Auto,
}

impl EncodingChoice {
    /// Encoding label passed to [`decode_content`].
    fn resolve(self, bytes: &[u8]) -> String {
        match self {
            Self::Cp949 => "cp949".to_string(),
            Self::Utf8 => "utf-8".to_string(),
            Self::Auto => detect_encoding(bytes),
        }
    }
}

/// Result of loading with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Typed rows, in file order
    pub records: Vec<EnrollmentRecord>,
    /// Encoding used to decode the file
    pub encoding: String,
    /// Detected or used delimiter
    pub delimiter: char,
    /// Column headers
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    if bytes.starts_with(UTF8_BOM) {
        return "utf-8".to_string();
    }

    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "euc-kr" | "cp949" | "uhc" | "windows-949" => "cp949".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        // Anything chardet is unsure about is most likely the usual source encoding.
        _ => "cp949".to_string(),
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode bytes to string using the specified encoding.
///
/// Decoding is strict: malformed input is an error rather than a string
/// full of replacement characters.
pub fn decode_content(bytes: &[u8], encoding: &str) -> LoadResult<String> {
    let label = encoding.trim().to_lowercase();
    let codec = match label.as_str() {
        "utf-8" | "utf8" | "ascii" => encoding_rs::UTF_8,
        // encoding_rs' EUC-KR is the WHATWG definition, which covers CP949.
        "cp949" | "uhc" | "euc-kr" => encoding_rs::EUC_KR,
        other => encoding_rs::Encoding::for_label(other.as_bytes()).ok_or_else(|| {
            LoadError::Encoding {
                encoding: encoding.to_string(),
            }
        })?,
    };

    let bytes = if codec == encoding_rs::UTF_8 {
        bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
    } else {
        bytes
    };

    codec
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| LoadError::Encoding {
            encoding: encoding.to_string(),
        })
}

/// Detect the delimiter by counting occurrences in the first line
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [b',', b';', b'\t', b'|'];
    let mut best_sep = b',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep as char).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Positions of the required columns within a header row.
struct ColumnMap {
    region: usize,
    age_bracket: usize,
    counts: [(EnrollmentType, usize); 4],
}

impl ColumnMap {
    fn from_headers(headers: &[String]) -> LoadResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        let region = find(REGION_COLUMN)?;
        let age_bracket = find(AGE_BRACKET_COLUMN)?;
        let mut counts = [(EnrollmentType::Workplace, 0); 4];
        for (slot, kind) in counts.iter_mut().zip(EnrollmentType::ALL) {
            *slot = (kind, find(kind.column())?);
        }

        Ok(Self {
            region,
            age_bracket,
            counts,
        })
    }

    fn record(&self, line: usize, row: &StringRecord) -> LoadResult<EnrollmentRecord> {
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let mut counts = EnrollmentCounts::default();
        for (kind, idx) in self.counts {
            counts.set(kind, parse_count(cell(idx), line, kind.column())?);
        }

        EnrollmentRecord::new(cell(self.region), cell(self.age_bracket), counts)
            .ok_or(LoadError::EmptyRegionName { line })
    }
}

/// Parse one count cell.
///
/// Thousands separators are tolerated and an empty cell counts as zero.
/// Negative values pass through unchanged.
pub fn parse_count(raw: &str, line: usize, column: &str) -> LoadResult<i64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Ok(0);
    }

    cleaned.parse::<i64>().map_err(|_| LoadError::InvalidCount {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Parse decoded CSV text into typed records.
pub fn parse_records(content: &str, delimiter: u8, encoding: String) -> LoadResult<ParseResult> {
    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_matches('"').to_string())
        .collect();

    let columns = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = result?;
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);
        records.push(columns.record(line, &row)?);
    }

    Ok(ParseResult {
        records,
        encoding,
        delimiter: delimiter as char,
        headers,
    })
}

/// Parse raw bytes with the given encoding and optional explicit delimiter.
pub fn parse_bytes(
    bytes: &[u8],
    encoding: EncodingChoice,
    delimiter: Option<u8>,
) -> LoadResult<ParseResult> {
    let encoding = encoding.resolve(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));

    parse_records(&content, delimiter, encoding)
}

/// Load an enrollment CSV file.
///
/// # Example
/// ```ignore
/// let result = load_records("enrollment.csv", EncodingChoice::Cp949, None)?;
/// println!("Encoding: {}, Delimiter: '{}'", result.encoding, result.delimiter);
/// println!("Records: {}", result.records.len());
/// ```
pub fn load_records<P: AsRef<Path>>(
    path: P,
    encoding: EncodingChoice,
    delimiter: Option<u8>,
) -> LoadResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes, encoding, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "시군구명,연령(구분),사업장가입자,지역가입자,임의가입자,임의계속가입자";

    fn sample_csv() -> String {
        format!(
            "{HEADER}\n\
             서울특별시 강남구,20대,1200,300,10,1\n\
             서울특별시 종로구,30대,800,250,5,0\n\
             부산광역시 해운대구,20대,400,\"1,100\",3,2\n"
        )
    }

    #[test]
    fn test_parse_records_derives_province() {
        let result = parse_records(&sample_csv(), b',', "utf-8".into()).unwrap();

        assert_eq!(result.records.len(), 3);
        assert_eq!(result.records[0].region_name, "서울특별시 강남구");
        assert_eq!(result.records[0].province, "서울특별시");
        assert_eq!(result.records[2].province, "부산광역시");
        assert_eq!(result.records[2].counts.regional, 1100);
        assert_eq!(result.headers.len(), 6);
    }

    #[test]
    fn test_missing_column_error() {
        let csv = "시군구명,연령(구분),사업장가입자,지역가입자,임의가입자\n서울특별시 강남구,20대,1,2,3";
        let err = parse_records(csv, b',', "utf-8".into()).unwrap_err();

        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "임의계속가입자"));
    }

    #[test]
    fn test_empty_region_name_rejected() {
        let csv = format!("{HEADER}\n서울특별시 강남구,20대,1,2,3,4\n ,20대,1,2,3,4\n");
        let err = parse_records(&csv, b',', "utf-8".into()).unwrap_err();

        assert!(matches!(err, LoadError::EmptyRegionName { line: 3 }));
    }

    #[test]
    fn test_invalid_count_rejected() {
        let csv = format!("{HEADER}\n서울특별시 강남구,20대,many,2,3,4\n");
        let err = parse_records(&csv, b',', "utf-8".into()).unwrap_err();

        match err {
            LoadError::InvalidCount { column, value, .. } => {
                assert_eq!(column, "사업장가입자");
                assert_eq!(value, "many");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_and_empty_counts_accepted() {
        let csv = format!("{HEADER}\n서울특별시 강남구,20대,-5,,3,4\n");
        let result = parse_records(&csv, b',', "utf-8".into()).unwrap();

        assert_eq!(result.records[0].counts.workplace, -5);
        assert_eq!(result.records[0].counts.regional, 0);
    }

    #[test]
    fn test_empty_csv_error() {
        let result = parse_records("", b',', "utf-8".into());
        assert!(matches!(result, Err(LoadError::EmptyFile)));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let csv = format!("{HEADER}\n서울특별시 강남구,20대,1,2,3,4\n,,,,,\n");
        let result = parse_records(&csv, b',', "utf-8".into()).unwrap();
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_cp949_decoding() {
        let csv = sample_csv();
        let (bytes, _, had_errors) = encoding_rs::EUC_KR.encode(&csv);
        assert!(!had_errors);

        let result = parse_bytes(&bytes, EncodingChoice::Cp949, None).unwrap();
        assert_eq!(result.encoding, "cp949");
        assert_eq!(result.delimiter, ',');
        assert_eq!(result.records[1].region_name, "서울특별시 종로구");
    }

    #[test]
    fn test_cp949_bytes_are_not_utf8() {
        let (bytes, _, _) = encoding_rs::EUC_KR.encode("서울특별시");
        let err = decode_content(&bytes, "utf-8").unwrap_err();
        assert!(matches!(err, LoadError::Encoding { .. }));
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(sample_csv().as_bytes());

        let result = parse_bytes(&bytes, EncodingChoice::Utf8, None).unwrap();
        assert_eq!(result.headers[0], REGION_COLUMN);

        assert_eq!(detect_encoding(&bytes), "utf-8");
    }

    #[test]
    fn test_unknown_encoding_label() {
        let err = decode_content(b"abc", "klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), b';');
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), b',');
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), b'\t');
        assert_eq!(detect_delimiter("a|b|c\n1|2|3"), b'|');
    }

    #[test]
    fn test_semicolon_file() {
        let csv = format!("{}\n서울특별시 강남구;20대;1;2;3;4\n", HEADER.replace(',', ";"));
        let result = parse_bytes(csv.as_bytes(), EncodingChoice::Utf8, None).unwrap();

        assert_eq!(result.delimiter, ';');
        assert_eq!(result.records[0].counts.voluntary_continued, 4);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 1,234 ", 2, "c").unwrap(), 1234);
        assert_eq!(parse_count("", 2, "c").unwrap(), 0);
        assert!(parse_count("1.5", 2, "c").is_err());
    }
}
