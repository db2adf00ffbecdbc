use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "curp-organizer")]
#[command(about = "Organizador de documentos por CURP", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Mostrar detalle adicional
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Proceso completo: extraer el ZIP, buscar las CURP y reempaquetar
    Run {
        /// Archivo Excel con la columna de CURP (xls/xlsx)
        #[arg(short, long)]
        excel: PathBuf,

        /// Archivo ZIP con los documentos
        #[arg(short, long)]
        archive: PathBuf,

        /// Archivo ZIP de salida (por defecto: documentos_filtrados_curp.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Nombre de la columna de CURP (por defecto el de la configuración)
        #[arg(short, long)]
        column: Option<String>,

        /// Guardar además el reporte de coincidencias en esta ruta
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Formato del reporte (json/excel/both)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },

    /// Buscar las CURP en una carpeta ya descomprimida
    Match {
        /// Carpeta con los documentos
        #[arg(required = true)]
        folder: PathBuf,

        /// Archivo Excel con la columna de CURP (xls/xlsx)
        #[arg(short, long)]
        excel: PathBuf,

        /// Carpeta destino para los archivos encontrados
        #[arg(short, long)]
        dest: Option<PathBuf>,

        /// Nombre de la columna de CURP (por defecto el de la configuración)
        #[arg(short, long)]
        column: Option<String>,

        /// Ruta del reporte JSON (por defecto: <carpeta>/reporte_curp.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generar Excel/JSON a partir de un reporte guardado
    Export {
        /// Reporte JSON de entrada
        #[arg(required = true)]
        input: PathBuf,

        /// Formato de salida (json/excel/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,

        /// Archivo o carpeta de salida
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Mostrar o editar la configuración
    Config {
        /// Cambiar el nombre de la columna de CURP
        #[arg(long)]
        set_column: Option<String>,

        /// Cambiar el nombre del ZIP de salida
        #[arg(long)]
        set_archive_name: Option<String>,

        /// Mostrar la configuración
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Formato desconocido: {}. Use json, excel o both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
