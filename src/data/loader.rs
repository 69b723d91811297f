use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{Data, Reader, Xlsx};

use super::cleaning;
use super::error::LoadError;
use super::model::{format_number, python_bool, Column, ColumnData, Dataset};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// File formats accepted by the upload control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xlsx,
}

impl SourceFormat {
    pub const EXTENSIONS: [&'static str; 2] = ["csv", "xlsx"];

    /// Pick the parser from the file name's extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Result<Self, LoadError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" => Ok(SourceFormat::Xlsx),
            other => Err(LoadError::UnsupportedExtension(other.to_string())),
        }
    }
}

/// Load a survey file from disk. A file name that is not valid UTF-8 is
/// read lossily; only its extension matters here.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_bytes(&name, &bytes)
}

/// Parse an uploaded file's bytes and run the age cleaning pass.
///
/// The format is chosen from `file_name`:
/// * `.csv`  – comma separated, header row first
/// * `.xlsx` – first worksheet, header row first
pub fn load_bytes(file_name: &str, bytes: &[u8]) -> Result<Dataset, LoadError> {
    let mut dataset = match SourceFormat::from_file_name(file_name)? {
        SourceFormat::Csv => parse_csv(bytes)?,
        SourceFormat::Xlsx => parse_xlsx(bytes)?,
    };

    let cleaned = cleaning::clean_age_columns(&mut dataset);
    if !cleaned.is_empty() {
        log::debug!("Coerced age columns to numbers: {cleaned:?}");
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Cells and type inference
// ---------------------------------------------------------------------------

/// Tokens read as missing values, matching what spreadsheet exports and
/// pandas treat as NA.
const NA_VALUES: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A",
    "<NA>",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A parsed cell before its column's type is known. Numbers and booleans keep
/// their text form so a mixed column can fall back to text losslessly.
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Missing,
    Number(f64, String),
    Bool(bool, String),
    Text(String),
}

impl Cell {
    fn into_text(self) -> Option<String> {
        match self {
            Cell::Missing => None,
            Cell::Number(_, s) | Cell::Bool(_, s) | Cell::Text(s) => Some(s),
        }
    }
}

fn csv_cell(raw: &str) -> Cell {
    if NA_VALUES.contains(&raw) {
        return Cell::Missing;
    }
    if let Ok(x) = raw.trim().parse::<f64>() {
        if !x.is_nan() {
            return Cell::Number(x, raw.to_string());
        }
    }
    match raw {
        "True" | "true" | "TRUE" => Cell::Bool(true, raw.to_string()),
        "False" | "false" | "FALSE" => Cell::Bool(false, raw.to_string()),
        _ => Cell::Text(raw.to_string()),
    }
}

fn excel_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::Int(i) => Cell::Number(*i as f64, i.to_string()),
        Data::Float(f) => Cell::Number(*f, format_number(*f)),
        Data::Bool(b) => Cell::Bool(*b, python_bool(*b).to_string()),
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

/// Numeric if every present cell is a number (an all-missing column counts as
/// numeric), boolean if every present cell is a boolean, text otherwise.
fn infer_column(cells: Vec<Cell>) -> ColumnData {
    let present = || cells.iter().filter(|c| !matches!(c, Cell::Missing));

    if present().all(|c| matches!(c, Cell::Number(..))) {
        return ColumnData::Numeric(
            cells
                .iter()
                .map(|c| match c {
                    Cell::Number(x, _) => Some(*x),
                    _ => None,
                })
                .collect(),
        );
    }
    if present().all(|c| matches!(c, Cell::Bool(..))) {
        return ColumnData::Boolean(
            cells
                .iter()
                .map(|c| match c {
                    Cell::Bool(b, _) => Some(*b),
                    _ => None,
                })
                .collect(),
        );
    }
    ColumnData::Text(cells.into_iter().map(Cell::into_text).collect())
}

/// Fill blank headers with `Unnamed: {i}` and suffix duplicates `.1`, `.2`, ...
fn normalize_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(raw.len());

    for (i, name) in raw.into_iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {i}")
        } else {
            name
        };

        let mut candidate = base.clone();
        if seen.contains_key(&candidate) {
            let mut n = seen.get(&base).copied().unwrap_or(0);
            loop {
                n += 1;
                candidate = format!("{base}.{n}");
                if !seen.contains_key(&candidate) {
                    break;
                }
            }
            seen.insert(base, n);
        }
        seen.insert(candidate.clone(), 0);
        names.push(candidate);
    }
    names
}

fn build_dataset(headers: Vec<String>, columns: Vec<Vec<Cell>>) -> Result<Dataset, LoadError> {
    let columns = normalize_headers(headers)
        .into_iter()
        .zip(columns)
        .map(|(name, cells)| {
            let column = Column::new(name, infer_column(cells));
            log::debug!("Column '{}' read as {}", column.name, column.kind());
            column
        })
        .collect();
    Dataset::new(columns)
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

fn parse_csv(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if headers.is_empty() {
        return Err(anyhow::anyhow!("No columns to parse from file").into());
    }

    let width = headers.len();
    let mut columns: Vec<Vec<Cell>> = vec![Vec::new(); width];

    for (row_no, result) in reader.records().enumerate() {
        // Line numbers are 1-based and the header sits on line 1.
        let line = row_no + 2;
        let record = result.with_context(|| format!("CSV line {line}"))?;
        if record.len() > width {
            return Err(anyhow::anyhow!(
                "Error tokenizing data. Expected {width} fields in line {line}, saw {}",
                record.len()
            )
            .into());
        }
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(record.get(i).map(csv_cell).unwrap_or(Cell::Missing));
        }
    }

    build_dataset(headers, columns)
}

// ---------------------------------------------------------------------------
// Excel parser
// ---------------------------------------------------------------------------

fn parse_xlsx(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let (headers, columns) = read_first_sheet(bytes)?;
    build_dataset(headers, columns)
}

fn read_first_sheet(bytes: &[u8]) -> Result<(Vec<String>, Vec<Vec<Cell>>)> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).context("opening Excel workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("Excel workbook has no worksheets")?
        .context("reading first worksheet")?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        bail!("No columns to parse from file");
    };

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            Data::Float(f) => format_number(*f),
            other => other.to_string(),
        })
        .collect();

    let mut columns: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(row.get(i).map(excel_cell).unwrap_or(Cell::Missing));
        }
    }
    Ok((headers, columns))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::ColumnKind;

    fn load_csv(text: &str) -> Result<Dataset, LoadError> {
        load_bytes("survey.csv", text.as_bytes())
    }

    #[test]
    fn dispatches_on_extension_case_insensitively() {
        assert_eq!(SourceFormat::from_file_name("a.CSV").unwrap(), SourceFormat::Csv);
        assert_eq!(SourceFormat::from_file_name("b.Xlsx").unwrap(), SourceFormat::Xlsx);
        assert!(matches!(
            SourceFormat::from_file_name("c.json"),
            Err(LoadError::UnsupportedExtension(ext)) if ext == "json"
        ));
        assert!(matches!(
            SourceFormat::from_file_name("no_extension"),
            Err(LoadError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn infers_numeric_text_and_boolean_columns() {
        let ds = load_csv(
            "score,city,member\n\
             1,Jakarta,True\n\
             2.5,Bandung,False\n\
             ,Jakarta,\n",
        )
        .unwrap();

        assert_eq!(ds.shape(), (3, 3));
        let score = ds.column("score").unwrap();
        assert_eq!(score.as_numeric().unwrap(), &[Some(1.0), Some(2.5), None]);
        assert_eq!(ds.column("city").unwrap().kind(), ColumnKind::Text);
        assert_eq!(ds.column("member").unwrap().kind(), ColumnKind::Boolean);
    }

    #[test]
    fn mixed_column_keeps_original_text() {
        let ds = load_csv("code\n007\nabc\nNA\n").unwrap();
        let code = ds.column("code").unwrap();
        assert_eq!(
            code.as_text().unwrap(),
            &[Some("007".to_string()), Some("abc".to_string()), None]
        );
    }

    #[test]
    fn all_missing_column_is_numeric() {
        let ds = load_csv("a,b\n1,\n2,\n").unwrap();
        assert_eq!(ds.column("b").unwrap().as_numeric().unwrap(), &[None, None]);
    }

    #[test]
    fn short_rows_are_padded_and_long_rows_fail() {
        let ds = load_csv("a,b,c\n1,2\n").unwrap();
        assert_eq!(ds.column("c").unwrap().as_numeric().unwrap(), &[None]);

        let err = load_csv("a,b\n1,2,3\n").unwrap_err();
        match err {
            LoadError::Parse(msg) => assert!(msg.contains("Expected 2 fields"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_a_load_failure() {
        let err = load_csv("").unwrap_err();
        assert!(err.to_string().contains("No columns to parse"));
    }

    #[test]
    fn header_only_file_has_zero_rows() {
        let ds = load_csv("a,b\n").unwrap();
        assert_eq!(ds.shape(), (0, 2));
    }

    #[test]
    fn strips_byte_order_mark() {
        let ds = load_bytes("bom.csv", b"\xEF\xBB\xBFname\nx\n").unwrap();
        assert!(ds.column("name").is_some());
    }

    #[test]
    fn normalizes_blank_and_duplicate_headers() {
        let names = normalize_headers(vec![
            "a".into(),
            "".into(),
            "a".into(),
            "a".into(),
            "a.1".into(),
        ]);
        assert_eq!(names, vec!["a", "Unnamed: 1", "a.1", "a.2", "a.1.1"]);
    }

    #[test]
    fn cleans_age_columns_on_load() {
        let ds = load_csv("Age,Name\n25 years,Ana\n30 yrs,Budi\n").unwrap();
        assert_eq!(
            ds.column("Age").unwrap().as_numeric().unwrap(),
            &[Some(25.0), Some(30.0)]
        );
    }

    /// Header row plus two answers: strings, numbers, booleans, an error
    /// cell, a blank cell and date-formatted serials.
    const SURVEY_XLSX: &[u8] =
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/survey.xlsx"));

    #[test]
    fn reads_first_worksheet_of_a_workbook() {
        let ds = load_bytes("survey.xlsx", SURVEY_XLSX).unwrap();

        assert_eq!(ds.shape(), (2, 6));
        let names: Vec<&str> = ds.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Respondent", "Umur", "Score", "Member", "Ratio", "Joined"]);

        assert_eq!(
            ds.column("Respondent").unwrap().as_text().unwrap(),
            &[Some("Ana".to_string()), Some("Budi".to_string())]
        );
        // blank cell
        assert_eq!(ds.column("Score").unwrap().as_numeric().unwrap(), &[Some(3.5), None]);
        // error cell
        assert_eq!(ds.column("Ratio").unwrap().as_numeric().unwrap(), &[None, Some(0.5)]);

        let member = ds.column("Member").unwrap();
        assert_eq!(member.kind(), ColumnKind::Boolean);
        assert_eq!(member.display_cell(0), "True");
        assert_eq!(member.display_cell(1), "False");

        let joined = ds.column("Joined").unwrap();
        assert_eq!(joined.kind(), ColumnKind::Text);
        assert!(joined.as_text().unwrap().iter().all(Option::is_some));
    }

    #[test]
    fn cleans_age_cells_read_from_excel() {
        let ds = load_bytes("SURVEY.XLSX", SURVEY_XLSX).unwrap();
        assert_eq!(
            ds.column("Umur").unwrap().as_numeric().unwrap(),
            &[Some(25.0), Some(30.0)]
        );
    }

    #[test]
    fn garbage_xlsx_is_a_parse_failure() {
        let err = load_bytes("survey.xlsx", b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn invalid_utf8_csv_is_a_parse_failure() {
        let err = load_bytes("survey.csv", b"name\n\xff\xfe\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "gender,umur").unwrap();
        writeln!(file, "F,umur 41 tahun").unwrap();
        drop(file);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.column("umur").unwrap().as_numeric().unwrap(), &[Some(41.0)]);
    }

    #[cfg(unix)]
    #[test]
    fn load_file_accepts_non_utf8_file_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"caf\xe9.csv"));
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.shape(), (1, 2));
        assert_eq!(ds.column("b").unwrap().as_numeric().unwrap(), &[Some(2.0)]);
    }

    #[test]
    fn load_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
