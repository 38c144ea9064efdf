use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::models::FindingRow;

pub const DELIMITER: &str = "|";

const HEADERS: [&str; 9] = [
    "github id",
    "internal id",
    "duplicate of",
    "title",
    "warden",
    "weight",
    "severity",
    "url",
    "labels",
];

/// Writes the ordered rows as pipe-delimited text under `output_dir` and
/// returns the path written. Nothing is written until every row has
/// rendered, so a failed run leaves no partial file behind.
pub fn write_spreadsheet(
    rows: &[FindingRow],
    repo: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let contents = render(rows)?;
    let path = output_dir.join(spreadsheet_filename(repo, Local::now()));
    fs::write(&path, contents)?;
    Ok(path)
}

/// `<repo short name>--DD-MM-YYYY--HH-MM-SS.csv`. The timestamp keeps
/// reruns from overwriting earlier exports.
fn spreadsheet_filename(repo: &str, now: DateTime<Local>) -> String {
    let short_name = repo.rsplit('/').next().unwrap_or(repo);
    format!("{}--{}.csv", short_name, now.format("%d-%m-%Y--%H-%M-%S"))
}

fn render(rows: &[FindingRow]) -> Result<String> {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(HEADERS.join(DELIMITER));

    for row in rows {
        let fields = [
            row.github_id.to_string(),
            row.internal_id.to_string(),
            row.duplicate_of.clone(),
            row.title.clone(),
            row.warden.clone(),
            row.weight.map(|w| w.to_string()).unwrap_or_default(),
            row.severity.to_string(),
            row.url.clone(),
            // JSON array keeps the label list lossless and round-trippable.
            serde_json::to_string(&row.labels)?,
        ];
        let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        lines.push(line.join(DELIMITER));
    }

    Ok(lines.join("\n") + "\n")
}

/// CSV-style quoting: only fields containing the delimiter, a quote, or a
/// line break get wrapped, with embedded quotes doubled.
fn escape_field(field: &str) -> String {
    if field.contains(DELIMITER)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InternalId, Severity};
    use chrono::TimeZone;

    fn row(title: &str, labels: &[&str], weight: Option<f64>) -> FindingRow {
        FindingRow {
            github_id: 42,
            internal_id: InternalId::Assigned(Severity::High, 1),
            duplicate_of: String::new(),
            title: title.to_string(),
            warden: "alice".to_string(),
            weight,
            severity: Severity::High,
            url: "https://github.com/org/findings/issues/42".to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            sort_key: String::new(),
        }
    }

    /// Inverse of `escape_field` + join, used to prove round-trippability.
    fn parse_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut chars = line.chars().peekable();
        let mut quoted = false;

        while let Some(c) = chars.next() {
            match c {
                '"' if current.is_empty() && !quoted => quoted = true,
                '"' if quoted => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        current.push('"');
                    } else {
                        quoted = false;
                    }
                }
                '|' if !quoted => {
                    fields.push(std::mem::take(&mut current));
                }
                _ => current.push(c),
            }
        }
        fields.push(current);
        fields
    }

    #[test]
    fn test_header_row() {
        let output = render(&[]).unwrap();
        assert_eq!(
            output,
            "github id|internal id|duplicate of|title|warden|weight|severity|url|labels\n"
        );
    }

    #[test]
    fn test_weight_cell_formats() {
        let output = render(&[
            row("a", &[], Some(1.0)),
            row("b", &[], Some(1.3)),
            row("c", &[], Some(0.6)),
            row("d", &[], None),
        ])
        .unwrap();

        let cells: Vec<&str> = output
            .lines()
            .skip(1)
            .map(|l| l.split('|').nth(5).unwrap())
            .collect();
        assert_eq!(cells, vec!["1", "1.3", "0.6", ""]);
    }

    #[test]
    fn test_awkward_title_round_trips() {
        let title = "pipe | quote \" and\nnewline";
        let output = render(&[row(title, &[], Some(1.0))]).unwrap();

        // One header line plus one (escaped, possibly multi-line) record;
        // split the record off the known header.
        let record = output
            .strip_prefix(&(HEADERS.join(DELIMITER) + "\n"))
            .unwrap()
            .trim_end_matches('\n');
        let fields = parse_line(record);
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[3], title);
    }

    #[test]
    fn test_labels_column_is_lossless_json() {
        let labels = ["3 (High Risk)", "weird|label", "has \"quotes\""];
        let output = render(&[row("t", &labels, Some(1.0))]).unwrap();

        let record = output.lines().nth(1).unwrap();
        let fields = parse_line(record);
        let parsed: Vec<String> = serde_json::from_str(&fields[8]).unwrap();
        assert_eq!(parsed, labels);
    }

    #[test]
    fn test_spreadsheet_filename() {
        let ts = Local.with_ymd_and_hms(2022, 12, 4, 10, 1, 59).unwrap();
        assert_eq!(
            spreadsheet_filename("code-423n4/2022-11-stakehouse-findings", ts),
            "2022-11-stakehouse-findings--04-12-2022--10-01-59.csv"
        );
    }
}
