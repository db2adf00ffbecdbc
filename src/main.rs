use clap::Parser;
use curp_organizer::{archive, cli, config, export, ingest, matcher, normalizer, scanner, staging};

use cli::{Cli, Commands};
use config::Config;
use indicatif::ProgressBar;
use matcher::MatchReport;
use normalizer::IdentifierSet;
use std::path::{Path, PathBuf};

fn main() {
    // Top-level catch: anything unanticipated still comes out as a readable
    // message instead of a panic.
    if let Err(e) = run() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run {
            excel,
            archive: archive_path,
            output,
            column,
            report,
            format,
        } => {
            println!("📦 curp-organizer — organización de documentos por CURP\n");

            let column = column.unwrap_or_else(|| config.curp_column.clone());
            let staging = staging::Staging::new()?;

            // 1. Extract the uploaded archive into the scratch space
            println!("[1/4] Extrayendo el archivo comprimido...");
            let entry_count = archive::extract(&archive_path, staging.extracted_dir())?;
            println!("✔ {} archivos extraídos\n", entry_count);

            // 2. Read the identifier column
            println!("[2/4] Leyendo la lista de CURP...");
            let raw = ingest::read_identifiers(&excel, &column)?;
            let identifiers = normalizer::normalize(&raw);
            println!("✔ {} CURP cargadas\n", identifiers.len());

            let malformed = identifiers.malformed();
            if !malformed.is_empty() {
                println!(
                    "⚠ {} valores sin forma de CURP (se usan de todos modos)",
                    malformed.len()
                );
                if cli.verbose {
                    for value in &malformed {
                        println!("  - {}", value);
                    }
                }
                println!();
            }

            // 3. Match and copy
            println!("[3/4] Buscando y copiando coincidencias...");
            let match_report =
                run_matching(&identifiers, staging.extracted_dir(), staging.matched_dir())?;
            println!("✔ {} coincidencias\n", match_report.match_count());

            print_report(&match_report);

            if match_report.match_count() == 0 {
                println!(
                    "\n⚠ No se encontró ningún archivo con las CURP especificadas. \
                     No se generó el ZIP de salida."
                );
                return Ok(());
            }

            // 4. Repackage the matches
            println!("\n[4/4] Generando el archivo de descarga...");
            let names = match_report.matched_names();
            let bytes = archive::package(&names, staging.matched_dir())?;
            let output_path = output.unwrap_or_else(|| PathBuf::from(&config.output_archive_name));
            std::fs::write(&output_path, bytes)?;
            println!("✔ Archivo generado: {}", output_path.display());

            if let Some(report_path) = report {
                let written = export::export_report(&match_report, &format, &report_path)?;
                for path in written {
                    println!("✔ Reporte guardado: {}", path.display());
                }
            }

            println!(
                "\n✅ Proceso terminado. Se encontraron {} archivos.",
                match_report.match_count()
            );
        }

        Commands::Match {
            folder,
            excel,
            dest,
            column,
            output,
        } => {
            println!("🔍 curp-organizer — búsqueda en carpeta\n");

            let column = column.unwrap_or_else(|| config.curp_column.clone());
            let dest = dest.unwrap_or_else(|| sibling_dir(&folder, "_encontrados"));

            println!("[1/2] Leyendo la lista de CURP...");
            let raw = ingest::read_identifiers(&excel, &column)?;
            let identifiers = normalizer::normalize(&raw);
            println!("✔ {} CURP cargadas\n", identifiers.len());

            println!("[2/2] Buscando en {}...", folder.display());
            let match_report = run_matching(&identifiers, &folder, &dest)?;
            println!("✔ {} coincidencias\n", match_report.match_count());

            print_report(&match_report);

            let report_path = output.unwrap_or_else(|| folder.join("reporte_curp.json"));
            export::write_json(&match_report, &report_path)?;
            println!("\n✔ Reporte guardado: {}", report_path.display());

            if match_report.match_count() == 0 {
                println!("⚠ No se encontró ningún archivo con las CURP especificadas.");
            } else {
                println!("✅ Archivos copiados a {}", dest.display());
            }
        }

        Commands::Export {
            input,
            format,
            output,
        } => {
            println!("📄 curp-organizer — exportar reporte\n");

            let match_report = export::load_report(&input)?;
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            let written = export::export_report(&match_report, &format, &output_dir)?;
            for path in written {
                println!("✔ Reporte guardado: {}", path.display());
            }

            println!("\n✅ Exportación terminada");
        }

        Commands::Config {
            set_column,
            set_archive_name,
            show,
        } => {
            let mut config = config;

            if let Some(column) = set_column {
                config.set_column(column)?;
                println!("✔ Columna de CURP actualizada");
            }

            if let Some(name) = set_archive_name {
                config.set_archive_name(name)?;
                println!("✔ Nombre del ZIP de salida actualizado");
            }

            if show {
                println!("Configuración:");
                println!("  Columna de CURP: {}", config.curp_column);
                println!("  ZIP de salida: {}", config.output_archive_name);
            }
        }
    }

    Ok(())
}

/// Matching pass with a progress bar over the scanned files.
fn run_matching(
    identifiers: &IdentifierSet,
    source: &Path,
    dest: &Path,
) -> anyhow::Result<MatchReport> {
    let total = scanner::scan_folder(source)?.len() as u64;
    let pb = ProgressBar::new(total);

    let report = matcher::match_and_copy_with(identifiers, source, dest, |entry| {
        pb.set_message(entry.file_name.clone());
        pb.inc(1);
    })?;

    pb.finish_and_clear();
    Ok(report)
}

fn print_report(report: &MatchReport) {
    if !report.matches.is_empty() {
        println!(
            "Archivos encontrados ({} de {} revisados):",
            report.match_count(),
            report.scanned
        );
        println!("  {:<52} {}", "ARCHIVO", "CURP");
        for matched in &report.matches {
            println!("  {:<52} {}", matched.file_name, matched.identifier);
        }
    }

    for failure in &report.copy_failures {
        println!(
            "  ❌ Error al procesar {}: {}",
            failure.file_name, failure.reason
        );
    }
}

fn sibling_dir(folder: &Path, suffix: &str) -> PathBuf {
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "resultado".to_string());
    folder.with_file_name(format!("{}{}", name, suffix))
}
