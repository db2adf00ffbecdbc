use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganizerError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("Carpeta no encontrada: {0}")]
    FolderNotFound(String),

    #[error("La columna esperada '{column}' no se encontró en el Excel. Columnas disponibles: {available}")]
    MissingColumn { column: String, available: String },

    #[error("No se pudo leer el archivo Excel: {0}")]
    Spreadsheet(String),

    #[error("El archivo Excel no tiene filas: {0}")]
    EmptySpreadsheet(String),

    #[error("Error al extraer el archivo comprimido: {0}")]
    Extraction(String),

    #[error("Formato de archivo no soportado: '{0}'. Solo se aceptan archivos ZIP")]
    UnsupportedArchive(String),

    #[error("Error al generar el reporte Excel: {0}")]
    ExcelReport(String),

    #[error("Error de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error de ZIP: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrganizerError>;
