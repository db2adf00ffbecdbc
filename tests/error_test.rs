//! Error case tests
//!
//! Each user-visible failure mode surfaces as the right error kind with a
//! non-empty message.

use curp_organizer::error::OrganizerError;
use curp_organizer::{archive, ingest, scanner};
use std::path::Path;
use tempfile::tempdir;

/// Scanning a folder that does not exist
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, OrganizerError::FolderNotFound(_)));
}

/// Extracting a payload that is not a zip archive
#[test]
fn test_extract_non_zip_payload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("documentos.zip");
    std::fs::write(&path, b"no soy un zip").unwrap();

    let err = archive::extract(&path, &dir.path().join("out")).unwrap_err();
    assert!(matches!(err, OrganizerError::Extraction(_)));
}

/// A rar upload is rejected up front, not half-extracted
#[test]
fn test_extract_rar_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("documentos.rar");
    std::fs::write(&path, b"Rar!\x1a\x07\x00").unwrap();

    let err = archive::extract(&path, &dir.path().join("out")).unwrap_err();
    assert!(matches!(err, OrganizerError::UnsupportedArchive(_)));
}

/// Reading a spreadsheet that is not there
#[test]
fn test_ingest_missing_file() {
    let err = ingest::read_identifiers(Path::new("/nonexistent/lista.xlsx"), "CURP").unwrap_err();
    assert!(matches!(err, OrganizerError::FileNotFound(_)));
}

/// Display output of every error kind is a usable message
#[test]
fn test_error_display() {
    let errors = vec![
        OrganizerError::Config("error de prueba".to_string()),
        OrganizerError::FileNotFound("lista.xlsx".to_string()),
        OrganizerError::FolderNotFound("/ruta/carpeta".to_string()),
        OrganizerError::MissingColumn {
            column: "CURP".to_string(),
            available: "Nombre, Matricula".to_string(),
        },
        OrganizerError::Spreadsheet("archivo dañado".to_string()),
        OrganizerError::EmptySpreadsheet("lista.xlsx".to_string()),
        OrganizerError::Extraction("zip dañado".to_string()),
        OrganizerError::UnsupportedArchive("rar".to_string()),
        OrganizerError::ExcelReport("sin permisos".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "mensaje vacío: {:?}", err);
    }
}

/// The missing-column message tells the user what the file does contain
#[test]
fn test_missing_column_message_lists_available() {
    let err = OrganizerError::MissingColumn {
        column: "CURP".to_string(),
        available: "Nombre, Matricula".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("CURP"));
    assert!(display.contains("Matricula"));
}
