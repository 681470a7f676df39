//! # Steelcheck CLI
//!
//! Runs beam strength checks from JSON job files and lists the load
//! combinations and W-shapes the engine knows about.
//!
//! ```text
//! steel_cli check demos/warehouse_beam.json
//! steel_cli check job.json --json --output report.json
//! steel_cli combos --code asce --method asd
//! steel_cli sections --search W14
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};

use steel_core::config::ActionsCode;
use steel_core::errors::CalcResult;
use steel_core::file_io::{load_job, save_report};
use steel_core::loads::{combinations, DesignMethod, LoadCase};
use steel_core::materials::{builtin_common_shapes, SectionDb};
use steel_core::workflow::run_design;
use steel_core::DesignReport;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a beam described by a JSON job file
    Check {
        /// Path to the job file
        job: PathBuf,

        /// Load W-shapes from an AISC shapes CSV instead of the built-in table
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Also save the JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the load combinations for a code and design method
    Combos {
        #[arg(long, value_enum, default_value_t = CodeArg::Asce)]
        code: CodeArg,

        #[arg(long, value_enum, default_value_t = MethodArg::Lrfd)]
        method: MethodArg,
    },

    /// List the available W-shapes
    Sections {
        /// Only list labels starting with this prefix
        #[arg(short, long)]
        search: Option<String>,

        /// Load W-shapes from an AISC shapes CSV instead of the built-in table
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CodeArg {
    /// ASCE 7-22
    Asce,
    /// NTC-CDMX-2023 (Acciones)
    Ntc,
}

impl From<CodeArg> for ActionsCode {
    fn from(arg: CodeArg) -> Self {
        match arg {
            CodeArg::Asce => ActionsCode::Asce7_22,
            CodeArg::Ntc => ActionsCode::NtcAcciones2023,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Lrfd,
    Asd,
}

impl From<MethodArg> for DesignMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Lrfd => DesignMethod::Lrfd,
            MethodArg::Asd => DesignMethod::Asd,
        }
    }
}

impl Cli {
    /// Returns `false` when a checked beam does not pass
    fn run(self) -> CalcResult<bool> {
        setup_logging(self.verbose);

        match self.command {
            Command::Check { job, csv, json, output } => {
                let db = section_db(csv)?;
                let job = load_job(&job)?;
                let report = run_design(&job, &db)?;

                if let Some(path) = output {
                    save_report(&report, &path)?;
                    debug!("Report written to {}", path.display());
                }

                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print_report(&report);
                }

                Ok(report.passes())
            }
            Command::Combos { code, method } => {
                for combo in combinations(code.into(), method.into())? {
                    println!("{}", combo);
                }
                println!();
                for case in LoadCase::ALL {
                    println!("  {:<3} {}", case.code(), case.description());
                }
                Ok(true)
            }
            Command::Sections { search, csv } => {
                let db = section_db(csv)?;
                let shapes = db.search(search.as_deref().unwrap_or(""));
                for shape in &shapes {
                    println!("{}", shape);
                }
                println!("{} shapes", shapes.len());
                Ok(true)
            }
        }
    }
}

fn section_db(csv: Option<PathBuf>) -> CalcResult<SectionDb> {
    match csv {
        Some(path) => SectionDb::load_from_csv(path),
        None => Ok(builtin_common_shapes()),
    }
}

/// RUST_LOG wins over the -v flags when set
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Report metadata block; blank fields are left out
fn report_header(report: &DesignReport) -> String {
    let meta = &report.meta;
    let issued = format!("{} (rev. {})", meta.issued, meta.revision);

    [
        ("Project No.", meta.project_id.as_str()),
        ("Title", meta.title.as_str()),
        ("Element", meta.element.as_str()),
        ("Location", meta.location.as_str()),
        ("Client", meta.client.as_str()),
        ("Basis", report.basis.as_str()),
        ("Issued", issued.as_str()),
        ("Engineer", meta.engineer.as_str()),
        ("Reviewer", meta.reviewer.as_str()),
    ]
    .iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(name, value)| format!("{:<12} {}\n", format!("{}:", name), value))
    .collect()
}

fn print_report(report: &DesignReport) {
    let units = &report.units;
    let force = units.force.symbol();
    let moment = units.moment.symbol();

    println!("═══════════════════════════════════════");
    println!("  STEEL BEAM CHECK - {}", report.meta.project_name);
    println!("═══════════════════════════════════════");
    println!();
    print!("{}", report_header(report));
    println!();
    print!("{}", report.beam);
    println!();
    println!("Combinations:");
    for combo in &report.combinations {
        println!(
            "  {:<8} {:<28} |V| = {:>9.2} {}   |M| = {:>9.2} {}",
            combo.name, combo.equation, combo.shear_max_abs, force, combo.moment_max_abs, moment
        );
    }
    println!();
    println!("Demand:");
    println!("  Mu = {:.2} {} ({})", report.envelope.mu, moment, report.envelope.moment_combination);
    println!("  Vu = {:.2} {} ({})", report.envelope.vu, force, report.envelope.shear_combination);
    println!();
    println!("Capacity Checks:");
    println!(
        "  Flexure: {:.3} ({:.2}/{:.2} {}) {}",
        report.flexure.ratio, report.flexure.required, report.flexure.available, moment, report.flexure.status
    );
    println!(
        "  Shear:   {:.3} ({:.2}/{:.2} {}) {}",
        report.shear.ratio, report.shear.required, report.shear.available, force, report.shear.status
    );
    println!();
    println!("Bracing (h0 = {:.4} {}):", report.h0, units.length.symbol());
    println!(
        "  Beam lateral:   Vbr = {:.2} {}, βbr = {:.2} {}",
        report.lateral_bracing.strength,
        force,
        report.lateral_bracing.stiffness,
        units.stiffness_symbol()
    );
    println!(
        "  Beam torsional: Mbr = {:.2} {}, βT = {}",
        report.torsional_bracing.moment_strength, moment, report.torsional_bracing.stiffness
    );
    if let Some(column) = &report.column_bracing {
        println!(
            "  Column:         Vbr = {:.2} {}, βbr = {:.2} {}",
            column.strength,
            force,
            column.stiffness,
            units.stiffness_symbol()
        );
    }
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {} (governing ratio {:.3})",
        if report.passes() { "PASS" } else { "FAIL" },
        report.governing_ratio()
    );
    println!("═══════════════════════════════════════");
}

fn main() -> ExitCode {
    match Cli::parse().run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
