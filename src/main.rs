use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use intima::acts::{base_period_for_act, ACT_BASE_PERIODS};
use intima::area::detect_area;
use intima::config::Settings;
use intima::deadline::{compute_deadline, format_deadline, parse_issuance_date};
use intima::parser::parse_intimations;
use intima::task::{
    is_protective_measure, split_existing, split_protective_measures, to_task_entry, TaskEntry,
};
use intima::Intimation;

#[derive(Parser)]
#[command(name = "intima", about = "PJe intimation parser and defender deadline calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one or more exported intimation lists
    Parse {
        /// Text files copied from the PJe notification panel
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compute the defender deadline for an issuance date
    Deadline {
        /// Issuance date (DD/MM/YYYY)
        date: String,
        /// Statutory period in days, before doubling
        #[arg(short, long, conflicts_with = "act", required_unless_present = "act")]
        days: Option<u32>,
        /// Act type whose statutory period applies (see `acts`)
        #[arg(short, long)]
        act: Option<String>,
    },
    /// List act types and their statutory periods
    Acts,
    /// Parse an export and emit case entries for the dashboard
    Import {
        file: PathBuf,
        /// Practice area (default: detected from the text, then configured default)
        #[arg(short, long)]
        area: Option<String>,
        /// JSON file with entries already registered
        #[arg(short, long)]
        existing: Option<PathBuf>,
        /// Emit protective-measure (MPU) cases under their own key
        #[arg(long)]
        separate_mpu: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { files, json } => {
            let parsed = parse_files(&files)?;
            let all: Vec<&Intimation> = parsed.iter().flat_map(|(_, recs)| recs).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
                return Ok(());
            }
            for (path, recs) in &parsed {
                if recs.is_empty() {
                    println!("{}: no intimations found", path.display());
                }
            }
            print_table(&all);
            Ok(())
        }
        Commands::Deadline { date, days, act } => {
            // clap guarantees exactly one of the two.
            let base = match days {
                Some(days) => days,
                None => {
                    let act = act.unwrap_or_default();
                    base_period_for_act(&act)
                        .with_context(|| format!("unknown act type {act:?}; run `intima acts`"))?
                }
            };
            let end = compute_deadline(parse_issuance_date(&date)?, base)?;
            println!("{}", format_deadline(end));
            Ok(())
        }
        Commands::Acts => {
            println!("{:<34} | {:>4}", "Act", "Days");
            println!("{}", "-".repeat(41));
            for (name, days) in ACT_BASE_PERIODS {
                let shown = if *days == 0 { "-".to_string() } else { days.to_string() };
                println!("{:<34} | {:>4}", name, shown);
            }
            Ok(())
        }
        Commands::Import { file, area, existing, separate_mpu } => {
            let settings = Settings::load()?;
            let text = read_export(&file)?;
            let intimations = parse_intimations(&text);
            let detected = detect_area(&text);
            let area = area
                .or_else(|| detected.as_ref().map(|m| m.area.to_string()))
                .unwrap_or_else(|| settings.defaults.area.clone());
            info!(file = %file.display(), %area, found = intimations.len(), "import");

            let existing = match existing {
                Some(path) => load_entries(&path)?,
                None => Vec::new(),
            };
            let found = intimations.len();
            let split = split_existing(intimations, &existing);

            eprint!("{}", import_summary(found, &split, &area, detected.map(|m| m.court)));
            let entries = |list: &[Intimation]| -> Vec<TaskEntry> {
                list.iter().map(|i| to_task_entry(i, &area, &settings.defaults)).collect()
            };
            let out = if separate_mpu {
                let measures = split_protective_measures(split.fresh);
                serde_json::json!({
                    "general": entries(&measures.general),
                    "protective": entries(&measures.protective),
                })
            } else {
                serde_json::to_value(entries(&split.fresh))?
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn read_export(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_entries(path: &Path) -> anyhow::Result<Vec<TaskEntry>> {
    let raw = read_export(path)?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a list of entries", path.display()))
}

/// Exports are independent, so they are parsed in parallel.
fn parse_files(files: &[PathBuf]) -> anyhow::Result<Vec<(PathBuf, Vec<Intimation>)>> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
            .progress_chars("#>-"),
    );
    if files.len() < 2 {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let parsed = files
        .par_iter()
        .map(|path| -> anyhow::Result<(PathBuf, Vec<Intimation>)> {
            let text = read_export(path)?;
            let intimations = parse_intimations(&text);
            pb.inc(1);
            Ok((path.clone(), intimations))
        })
        .collect::<anyhow::Result<Vec<_>>>();

    pb.finish_and_clear();
    parsed
}

fn print_table(rows: &[&Intimation]) {
    if rows.is_empty() {
        println!("No intimations found. Check that the whole notification list was copied.");
        return;
    }
    println!(
        "{:>3} | {:<32} | {:<25} | {:<10} | {:<12} | {:>9}",
        "#", "Recipient", "Case", "Issued", "Document", "Id"
    );
    println!("{}", "-".repeat(107));
    for (i, r) in rows.iter().enumerate() {
        println!(
            "{:>3} | {:<32} | {:<25} | {:<10} | {:<12} | {:>9}",
            i + 1,
            truncate(&r.recipient_name, 32),
            r.case_number,
            r.issuance_date,
            truncate(r.document_type.as_deref().unwrap_or("-"), 12),
            r.document_id.as_deref().unwrap_or("-"),
        );
    }
    println!("\n{} intimations", rows.len());
}

fn import_summary(
    found: usize,
    split: &intima::task::ImportSplit,
    area: &str,
    court: Option<&str>,
) -> String {
    if found == 0 {
        return "No intimations found in the text.\nCheck that it was copied from the PJe notification panel.\n"
            .to_string();
    }
    let mut out = format!("Area: {area}\n");
    if let Some(court) = court {
        out += &format!("Court: {court}\n");
    }
    out += &format!("Found: {found}\nNew: {}\n", split.fresh.len());
    let protective = split.fresh.iter().filter(|i| is_protective_measure(i)).count();
    if protective > 0 {
        out += &format!("Protective measures (MPU): {protective}\n");
    }
    if split.duplicates.is_empty() {
        out += "No duplicates.\n";
    } else {
        out += &format!("Already registered: {}\n", split.duplicates.len());
        for (i, d) in split.duplicates.iter().enumerate() {
            out += &format!("  {}. {} - {}\n", i + 1, d.recipient_name, d.case_number);
        }
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intima::task::ImportSplit;

    #[test]
    fn deadline_needs_exactly_one_period_source() {
        assert!(Cli::try_parse_from(["intima", "deadline", "21/01/2026"]).is_err());
        assert!(Cli::try_parse_from(["intima", "deadline", "21/01/2026", "-d", "5", "-a", "RESE"]).is_err());
        let cli = Cli::try_parse_from(["intima", "deadline", "21/01/2026", "--act", "RESE"]).unwrap();
        assert!(matches!(cli.command, Commands::Deadline { days: None, act: Some(_), .. }));
    }

    #[test]
    fn summary_counts_protective_measures() {
        let text = "ANA PAULA SOUZA\n\
            Expedição eletrônica (02/02/2026)\n\
            MPUMPCrim 8005252-02.2026.8.05.0039 Maus Tratos\n\
            JOSE CARLOS LIMA\n\
            Expedição eletrônica (02/02/2026)\n\
            APOrd 8011331-31.2025.8.05.0039 Ameaça\n";
        let fresh = parse_intimations(text);
        let split = ImportSplit { fresh, duplicates: Vec::new() };
        let summary = import_summary(2, &split, "Criminal", None);
        assert!(summary.contains("New: 2\n"));
        assert!(summary.contains("Protective measures (MPU): 1\n"));
    }
}
