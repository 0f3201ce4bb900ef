//! Recorded CSV reader.
//!
//! The first record is the header (`Mat,CV_32F,3,4`); every following record
//! holds a time stamp and the flat frame values (`12ms,0.1,0.2,...`).

use super::{Header, Recording};
use crate::error::{RdplotError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a recording from a CSV file.
pub fn read_recording(path: &Path) -> Result<Recording> {
    let file = File::open(path).map_err(|e| RdplotError::file_open(path.to_path_buf(), e))?;
    let recording = Recording::from_reader(file)?;
    tracing::debug!(
        path = %path.display(),
        steps = recording.steps(),
        extents = ?recording.header.extents,
        "loaded recording"
    );
    Ok(recording)
}

impl Recording {
    /// Read a recording from any CSV source.
    pub fn from_reader(rdr: impl Read) -> Result<Self> {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            // Frames and header have different lengths
            .flexible(true)
            .from_reader(rdr);

        let mut records = rdr.into_records();

        let header_record = records.next().ok_or(RdplotError::MissingHeader)??;
        let header_line = line_of(&header_record, 1);
        let header = Header::from_fields(header_record.iter().filter(|f| !f.is_empty()), header_line)?;
        let expected = header.frame_len();

        let mut times_ms = Vec::new();
        let mut frames = Vec::new();

        for record in records {
            let record = record?;
            let line = line_of(&record, times_ms.len() + 2);

            // Trailing separators leave empty fields behind
            let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
            let Some((time, values)) = fields.split_first() else {
                continue;
            };

            let time = parse_time_ms(time)
                .ok_or_else(|| RdplotError::parse(line, 1, format!("invalid time stamp '{}'", time)))?;

            if values.len() != expected {
                return Err(RdplotError::ShapeMismatch {
                    extents: header.extents.clone(),
                    expected,
                    actual: values.len(),
                    line: Some(line),
                });
            }

            let frame = values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    v.parse::<f64>()
                        .map_err(|e| RdplotError::parse(line, i + 2, format!("'{}': {}", v, e)))
                })
                .collect::<Result<Vec<_>>>()?;

            times_ms.push(time);
            frames.push(frame);
        }

        Recording::new(header, times_ms, frames)
    }
}

fn line_of(record: &csv::StringRecord, fallback: usize) -> usize {
    record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or(fallback)
}

/// Parse a time stamp with optional `ms` or `s` unit into milliseconds.
fn parse_time_ms(token: &str) -> Option<f64> {
    let token = token.trim();
    let (number, scale) = if let Some(v) = token.strip_suffix("ms") {
        (v, 1.0)
    } else if let Some(v) = token.strip_suffix('s') {
        (v, 1000.0)
    } else {
        (token, 1.0)
    };
    number.trim().parse::<f64>().ok().map(|v| v * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_parsing() {
        let rec = Recording::from_reader(
            "Mat,CV_32F,2,3\n\
             10ms,1,2,3,4,5,6\n\
             20ms,6,5,4,3,2,1\n"
                .as_bytes(),
        )
        .unwrap();
        assert_eq!(rec.header.extents, vec![2, 3]);
        assert_eq!(rec.steps(), 2);
        assert_eq!(rec.times_ms, vec![10.0, 20.0]);
        assert_eq!(rec.frame(1).unwrap(), &[6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn skips_empty_lines_and_trailing_separators() {
        let rec = Recording::from_reader("Mat,CV_32F,2\n\n0.5 s, 1.0, 2.0,\n\n".as_bytes()).unwrap();
        assert_eq!(rec.steps(), 1);
        assert_eq!(rec.times_ms, vec![500.0]);
        assert_eq!(rec.frame(0).unwrap(), &[1.0, 2.0]);
    }

    #[test]
    fn scalar_recording() {
        let rec = Recording::from_reader("Mat,CV_64F\n1ms,0.25\n2ms,0.5\n".as_bytes()).unwrap();
        assert_eq!(rec.ndim(), 0);
        assert_eq!(rec.scalar_series(), vec![0.25, 0.5]);
    }

    #[test]
    fn wrong_value_count() {
        let err = Recording::from_reader("Mat,CV_32F,2,2\n1ms,1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            RdplotError::ShapeMismatch {
                expected: 4,
                actual: 3,
                line: Some(2),
                ..
            }
        ));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn overflowing_header_is_rejected() {
        let input = format!("Mat,CV_32F,{},4\n1ms,1\n", usize::MAX / 2);
        let err = Recording::from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(err, RdplotError::Parse { line: 1, .. }));
    }

    #[test]
    fn bad_number_reports_position() {
        let err = Recording::from_reader("Mat,CV_32F,2\n1ms,1,oops\n".as_bytes()).unwrap_err();
        assert!(matches!(err, RdplotError::Parse { line: 2, column: 3, .. }));
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = Recording::from_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, RdplotError::MissingHeader));
    }

    #[test]
    fn time_units() {
        assert_eq!(parse_time_ms("12.5ms"), Some(12.5));
        assert_eq!(parse_time_ms("2 s"), Some(2000.0));
        assert_eq!(parse_time_ms("7"), Some(7.0));
        assert_eq!(parse_time_ms("soon"), None);
    }
}
