//! JSON I/O handling for CLI
//!
//! - Input: one JSON record on stdin, or a JSON array file for batches
//! - Output: one JSON object per command on stdout
//! - UTF-8 only

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};
use crate::student::StudentRecord;

/// Read a single record from a reader
pub fn read_record<R: Read>(mut reader: R) -> CliResult<StudentRecord> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }

    let record = serde_json::from_str(&input)?;
    Ok(record)
}

/// Read a JSON array of records from a file
pub fn read_records(path: &Path) -> CliResult<Vec<StudentRecord>> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io_error(format!("Failed to read '{}': {}", path.display(), e)))?;

    serde_json::from_str(&content).map_err(|e| {
        CliError::invalid_input(format!("'{}' is not a record array: {}", path.display(), e))
    })
}

/// Write records to a file as a pretty-printed JSON array
pub fn write_records(path: &Path, records: &[StudentRecord]) -> CliResult<()> {
    let mut content = serde_json::to_string_pretty(records)?;
    content.push('\n');
    fs::write(path, content)
        .map_err(|e| CliError::io_error(format!("Failed to write '{}': {}", path.display(), e)))
}

/// Write a success response
pub fn write_response<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

/// Write an error response
pub fn write_error<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_read_record_multiline() {
        let input = "{\n  \"role\": \"student\",\n  \"className\": \"Class 2\"\n}\n";
        let record = read_record(input.as_bytes()).unwrap();
        assert_eq!(record.class_name.as_deref(), Some("Class 2"));
    }

    #[test]
    fn test_read_record_empty() {
        let err = read_record("  \n".as_bytes()).unwrap_err();
        assert_eq!(err.code_str(), "PROMO_CLI_INVALID_INPUT");
    }

    #[test]
    fn test_read_record_not_object() {
        let err = read_record("42".as_bytes()).unwrap_err();
        assert_eq!(err.code_str(), "PROMO_CLI_INVALID_INPUT");
    }

    #[test]
    fn test_write_response_shape() {
        let mut out = Vec::new();
        write_response(&mut out, json!({ "promoted": true })).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["data"]["promoted"], true);
    }

    #[test]
    fn test_write_error_shape() {
        let mut out = Vec::new();
        write_error(&mut out, "PROMO_CLI_IO_ERROR", "boom").unwrap();

        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["code"], "PROMO_CLI_IO_ERROR");
        assert_eq!(parsed["message"], "boom");
    }

    #[test]
    fn test_records_file_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("students.json");
        let records = vec![StudentRecord::student("CBSE", "Class 1")];

        write_records(&path, &records).unwrap();
        assert_eq!(read_records(&path).unwrap(), records);
    }

    #[test]
    fn test_read_records_rejects_object() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("students.json");
        fs::write(&path, r#"{ "role": "student" }"#).unwrap();

        let err = read_records(&path).unwrap_err();
        assert_eq!(err.code_str(), "PROMO_CLI_INVALID_INPUT");
    }
}
