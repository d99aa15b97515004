pub mod extract;
pub mod schema;
pub mod strategies;
pub mod summary;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use taxview::core::{read_report_json, Report, ReportError, YearlyEstimate};

/// Read a report (JSON) from a file, or stdin with "-"
pub fn read_report(path: &Path) -> Result<Report, ReportError> {
    let report = if path.as_os_str() == "-" {
        read_from_stdin()?
    } else {
        let file = File::open(path)?;
        read_report_json(BufReader::new(file))?
    };
    log::info!(
        "Loaded {} tax entries, {} strategies",
        report.taxes.len(),
        report.strategies.len()
    );
    Ok(report)
}

fn read_from_stdin() -> Result<Report, ReportError> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    read_report_json(io::Cursor::new(buffer))
}

/// Read estimate settings from a JSON file, defaults when no file is given
pub fn read_estimate(path: Option<&Path>) -> Result<YearlyEstimate, ReportError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| ReportError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;
            let estimate = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                ReportError::ConfigJson {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            log::info!("Loaded estimate settings from {}", path.display());
            Ok(estimate)
        }
        None => Ok(YearlyEstimate::default()),
    }
}
