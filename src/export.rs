/// Response export
///
/// Turns the response log into a comma-separated table: one header row,
/// then one row per response in log order. Absent filename attributes
/// become empty cells. Export is a read-only pass over the log.

use std::path::Path;
use tracing::info;

use crate::error::ExportError;
use crate::state::data::ResponseRecord;

/// Suggested name for downloaded results
pub const RESULTS_FILE_NAME: &str = "results.csv";

/// Column headers, in output order
pub const COLUMNS: [&str; 14] = [
    "Age",
    "Gender",
    "Wood Experience",
    "Image",
    "Naturalness",
    "Aesthetic",
    "Sorting",
    "Scale",
    "Distortion",
    "Roughness",
    "Knot Effect",
    "Contrast",
    "Brightness",
    "Wood Type",
];

/// In-memory table for on-screen preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Flatten one record into cells matching `COLUMNS`
fn record_cells(record: &ResponseRecord) -> Vec<String> {
    let mut cells = vec![
        record.demographics.age.clone(),
        record.demographics.gender.to_string(),
        record.demographics.wood_experience.to_string(),
        record.image.clone(),
        record.rating.naturalness.to_string(),
        record.rating.aesthetic.to_string(),
        record.rating.sorting.to_string(),
    ];
    cells.extend(
        record
            .attributes
            .values()
            .into_iter()
            .map(|value| value.unwrap_or_default().to_string()),
    );
    cells
}

pub fn to_table(records: &[ResponseRecord]) -> Table {
    Table {
        header: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: records.iter().map(record_cells).collect(),
    }
}

/// Serialize the log as CSV. The header is always present.
pub fn to_csv(records: &[ResponseRecord]) -> String {
    let mut csv = String::new();
    push_row(&mut csv, COLUMNS.iter().copied());
    for record in records {
        let cells = record_cells(record);
        push_row(&mut csv, cells.iter().map(String::as_str));
    }
    csv
}

fn push_row<'a>(csv: &mut String, fields: impl Iterator<Item = &'a str>) {
    let line = fields.map(escape_csv).collect::<Vec<_>>().join(",");
    csv.push_str(&line);
    csv.push('\n');
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains(',')
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// Write the CSV to `path`, creating parent directories as needed
pub async fn write_csv(path: &Path, records: &[ResponseRecord]) -> Result<(), ExportError> {
    let csv = to_csv(records);
    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    tokio::fs::write(path, csv.as_bytes()).await.map_err(io_err)?;

    info!("💾 Wrote {} responses to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ParsedAttributes;
    use crate::state::data::{
        Aesthetic, Demographics, Gender, Naturalness, Rating, Sorting, WoodExperience,
    };

    const HEADER: &str = "Age,Gender,Wood Experience,Image,Naturalness,Aesthetic,Sorting,\
                          Scale,Distortion,Roughness,Knot Effect,Contrast,Brightness,Wood Type\n";

    fn record(image: &str, age: &str) -> ResponseRecord {
        ResponseRecord {
            demographics: Demographics {
                age: age.to_string(),
                gender: Gender::Other,
                wood_experience: WoodExperience::Expert,
            },
            image: image.to_string(),
            rating: Rating {
                naturalness: Naturalness::Natural,
                aesthetic: Aesthetic::new(5),
                sorting: Sorting::Moderate,
            },
            attributes: ParsedAttributes::parse(image),
        }
    }

    #[test]
    fn test_empty_log_is_header_only() {
        assert_eq!(to_csv(&[]), HEADER);
        assert!(to_table(&[]).rows.is_empty());
    }

    #[test]
    fn test_matched_filename_row() {
        let name = "wood_scale_2_distortion_0.1_roughness_low_knot_none_contrast_high_brightness_50_type_oak.png";
        let csv = to_csv(&[record(name, "27")]);

        let expected = format!(
            "{HEADER}27,Other,Expert,{name},Natural,5,Moderate Color Variation,2,0.1,low,none,high,50,oak\n"
        );
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_unmatched_filename_leaves_empty_cells() {
        let csv = to_csv(&[record("random.png", "27")]);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(row, "27,Other,Expert,random.png,Natural,5,Moderate Color Variation,,,,,,,");
        assert_eq!(row.split(',').count(), COLUMNS.len());
    }

    #[test]
    fn test_rows_follow_log_order() {
        let records = [record("b.png", "1"), record("a.png", "2"), record("c.png", "3")];
        let table = to_table(&records);

        let images: Vec<&str> = table.rows.iter().map(|r| r[3].as_str()).collect();
        assert_eq!(images, ["b.png", "a.png", "c.png"]);
        assert!(table.rows.iter().all(|r| r.len() == table.header.len()));
    }

    #[test]
    fn test_free_text_is_quoted() {
        let csv = to_csv(&[record("x.png", "about 30, \"roughly\"")]);
        let row = csv.lines().nth(1).unwrap();

        assert!(row.starts_with("\"about 30, \"\"roughly\"\"\",Other"));
    }

    #[test]
    fn test_export_is_repeatable() {
        let records = [record("a.png", "40"), record("random.png", "40")];
        assert_eq!(to_csv(&records).into_bytes(), to_csv(&records).into_bytes());
    }

    #[tokio::test]
    async fn test_write_csv_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join(RESULTS_FILE_NAME);
        let records = [record("a.png", "40")];

        write_csv(&path, &records).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_csv(&records));
    }

    #[tokio::test]
    async fn test_write_csv_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten with a file
        let result = write_csv(dir.path(), &[]).await;
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
