//! # Timberfire CLI
//!
//! Sizes or verifies timber beams and columns for standard fire exposure.
//!
//! ```text
//! timberfire beam --span 4 --line 2
//! timberfire column --length 3 --axial 50 --width 200 --height 200 --sides 8
//! timberfire batch problem.json
//! timberfire screen --inertia 5e7 --mode intersection
//! ```
//!
//! Results print as a report, or as JSON with `--json`. Logs go to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use timberfire_core::calculations::{BeamLoad, MemberCheck, MemberLoad, SupportCondition};
use timberfire_core::materials::{SectionCatalog, WoodType};
use timberfire_core::problem::{BasisInput, BatchReport, SizingProblem};
use timberfire_core::screening::{combine, inertia_pattern, CombineMode};
use timberfire_core::selector::{select, DesignBasis, MemberInput, MemberOutcome, VerificationResult};
use timberfire_core::{CalcError, CalcResult, GlobalSettings};

#[derive(Parser)]
#[command(name = "timberfire")]
#[command(about = "Timber member sizing for standard fire exposure", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (TOML) with default inputs
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Size or verify a beam in bending
    Beam {
        /// Span (m)
        #[arg(long)]
        span: f64,

        /// Line load (kN/m)
        #[arg(long, conflicts_with = "point", required_unless_present = "point")]
        line: Option<f64>,

        /// Point load at mid-span, or at the free end of a cantilever (kN)
        #[arg(long)]
        point: Option<f64>,

        /// Support condition: 1 pinned-pinned, 2 fixed-free, 3 fixed-pinned, 4 fixed-fixed
        #[arg(long)]
        support: Option<u8>,

        #[command(flatten)]
        basis: BasisArgs,
    },

    /// Size or verify a column for buckling
    Column {
        /// Member length (m)
        #[arg(long)]
        length: f64,

        /// Axial load (kN)
        #[arg(long)]
        axial: f64,

        /// Support condition: 1 pinned-pinned, 2 fixed-free, 3 fixed-pinned, 4 fixed-fixed
        #[arg(long)]
        support: Option<u8>,

        #[command(flatten)]
        basis: BasisArgs,
    },

    /// Size every member of a JSON problem file
    Batch {
        /// Problem file
        file: PathBuf,
    },

    /// List catalog sections whose gross inertia exceeds a requirement
    Screen {
        /// Required moment of inertia (mm⁴)
        #[arg(long)]
        inertia: f64,

        /// Catalog to screen (sawn, planed, glulam)
        #[arg(long, default_value = "sawn")]
        wood_type: String,

        /// Keep sections adequate about either axis (union) or both (intersection)
        #[arg(long, value_enum, default_value_t = ModeArg::Union)]
        mode: ModeArg,
    },
}

/// Material, exposure and section options shared by `beam` and `column`
#[derive(Args)]
struct BasisArgs {
    /// Strength class (C14, C18, C24, C30, GL24h, GL28h, GL32h)
    #[arg(long)]
    strength_class: Option<String>,

    /// Species group (conifer, laminated, hardwood, plywood)
    #[arg(long)]
    species: Option<String>,

    /// Catalog to search (sawn, planed, glulam)
    #[arg(long)]
    wood_type: Option<String>,

    /// Verify this width (mm) instead of searching; needs --height
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Verify this height (mm) instead of searching; needs --width
    #[arg(long, requires = "width")]
    height: Option<f64>,

    /// Fire exposure time (min)
    #[arg(long)]
    minutes: Option<f64>,

    /// Exposed sides code 1-8 (above 8 means all sides)
    #[arg(long)]
    sides: Option<f64>,

    /// Design method (rcs, sr)
    #[arg(long)]
    method: Option<String>,
}

impl BasisArgs {
    fn to_input(&self) -> BasisInput {
        BasisInput {
            strength_class: self.strength_class.clone(),
            species: self.species.clone(),
            wood_type: self.wood_type.clone(),
            width_mm: self.width,
            height_mm: self.height,
            exposure_minutes: self.minutes,
            exposed_sides: self.sides,
            method: self.method.clone(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Union,
    Intersection,
}

impl From<ModeArg> for CombineMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Union => CombineMode::Union,
            ModeArg::Intersection => CombineMode::Intersection,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    timberfire_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            report_error(&e, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CalcResult<ExitCode> {
    let settings = GlobalSettings::load_or_default(cli.config.as_deref())?;
    tracing::debug!("Settings: {:?}", settings);

    match &cli.command {
        Commands::Beam {
            span,
            line,
            point,
            support,
            basis,
        } => {
            let load = match (line, point) {
                (Some(q), _) => BeamLoad::Line { kn_per_m: *q },
                (None, Some(p)) => BeamLoad::Point { kn: *p },
                (None, None) => {
                    return Err(CalcError::invalid_input("load", "none", "Give --line or --point"));
                }
            };
            let member = MemberInput::span(
                "beam",
                *span,
                MemberLoad::Beam {
                    support: Some(resolve_support(*support, &settings)?),
                    load,
                },
            );
            cmd_single(&member, basis, &settings, cli.json)
        }
        Commands::Column {
            length,
            axial,
            support,
            basis,
        } => {
            let member = MemberInput::span(
                "column",
                *length,
                MemberLoad::Column {
                    support: Some(resolve_support(*support, &settings)?),
                    axial_kn: *axial,
                },
            );
            cmd_single(&member, basis, &settings, cli.json)
        }
        Commands::Batch { file } => cmd_batch(file, &settings, cli.json),
        Commands::Screen { inertia, wood_type, mode } => {
            cmd_screen(*inertia, wood_type, (*mode).into(), &settings, cli.json)
        }
    }
}

fn resolve_support(code: Option<u8>, settings: &GlobalSettings) -> CalcResult<SupportCondition> {
    match code {
        Some(c) => SupportCondition::from_code(c),
        None => Ok(settings.defaults.support),
    }
}

fn cmd_single(member: &MemberInput, args: &BasisArgs, settings: &GlobalSettings, json: bool) -> CalcResult<ExitCode> {
    let basis = args.to_input().resolve(&settings.defaults)?;
    let catalog = basis.catalog(settings.sort_catalogs_by_area)?;
    let result = select(member, &catalog, &basis)?;

    if json {
        print_json(&result)?;
    } else {
        print_result(&result, &basis, &member.load);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_batch(file: &Path, settings: &GlobalSettings, json: bool) -> CalcResult<ExitCode> {
    let problem = SizingProblem::load_from(file)?;
    let report = problem.solve(settings)?;

    if json {
        print_json(&report)?;
    } else {
        print_batch(&report);
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct ScreenedSection {
    width_mm: f64,
    height_mm: f64,
    strong_axis: bool,
    weak_axis: bool,
}

fn cmd_screen(
    required_mm4: f64,
    wood_type: &str,
    mode: CombineMode,
    settings: &GlobalSettings,
    json: bool,
) -> CalcResult<ExitCode> {
    if !(required_mm4 > 0.0) {
        return Err(CalcError::invalid_input(
            "inertia",
            required_mm4.to_string(),
            "Required inertia must be positive",
        ));
    }
    let wood_type = WoodType::from_str_flexible(wood_type)?;
    let catalog = SectionCatalog::standard(wood_type, settings.sort_catalogs_by_area);

    let (strong, weak) = inertia_pattern(required_mm4, &catalog.entries);
    let keep = combine(&strong, &weak, mode)?;

    let rows: Vec<ScreenedSection> = catalog
        .iter()
        .zip(keep.iter().zip(strong.iter().zip(weak.iter())))
        .filter(|(_, (keep, _))| **keep)
        .map(|(c, (_, (&s, &w)))| ScreenedSection {
            width_mm: c.width_mm,
            height_mm: c.height_mm,
            strong_axis: s,
            weak_axis: w,
        })
        .collect();

    if json {
        print_json(&rows)?;
    } else {
        println!("{} of {} {} sections pass:", rows.len(), catalog.len(), wood_type);
        for row in &rows {
            println!(
                "  {:>5} x {:<5}  strong {}  weak {}",
                row.width_mm,
                row.height_mm,
                status_icon(row.strong_axis),
                status_icon(row.weak_axis)
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Output
// ============================================================================

fn print_json<T: Serialize>(value: &T) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CalcError::invalid_input("output", "json", e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn print_result(result: &VerificationResult, basis: &DesignBasis, load: &MemberLoad) {
    let residual = &result.residual;
    println!("═══════════════════════════════════════");
    println!("  FIRE DESIGN RESULT ({})", load.kind().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();
    println!("Basis:");
    println!("  Material: {} ({})", basis.strength_class, basis.species);
    println!(
        "  Fire:     {} min, exposed {}, {}",
        basis.exposure.minutes, basis.exposure.sides, basis.method
    );
    println!("  Support:  {}", load.support());
    println!();
    println!("Section:");
    println!("  Selected: {} x {} mm", result.width_mm, result.height_mm);
    println!(
        "  Residual: {:.1} x {:.1} mm (char depth {:.1} mm)",
        residual.width_mm, residual.height_mm, residual.char_depth_mm
    );
    println!();
    match &result.check {
        MemberCheck::Beam(b) => {
            println!("Bending:");
            println!("  M_max = {:.2} kN·m", b.max_moment_knm);
            println!(
                "  σ_m   = {:.2} / {:.2} MPa {}",
                b.bending_stress_mpa,
                b.design_strength_mpa,
                status_icon(b.passes())
            );
            println!("  M_Rd  = {:.2} kN·m", b.moment_capacity_knm);
            println!("  Allowable load: {:.2} {}", b.allowable_load, beam_load_unit(load));
        }
        MemberCheck::Column(c) => {
            println!("Buckling:");
            println!("  λ = {:.1}, λrel = {:.3}, kc = {:.3}", c.slenderness, c.relative_slenderness, c.buckling_factor);
            println!(
                "  N = {:.2} kN vs F = {:.2} kN {}",
                c.capacity_kn,
                c.axial_load_kn,
                status_icon(c.passes())
            );
        }
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  UTILIZATION: {:.1}%", result.utilization_percent);
    println!("═══════════════════════════════════════");
}

fn print_batch(report: &BatchReport) {
    println!("Sized {} of {} member(s)", report.sized, report.results.len());
    for outcome in &report.results {
        match outcome {
            MemberOutcome::Sized(r) => println!(
                "  {:<12} {:>5} x {:<5} {:>6.1}%  {}",
                r.label,
                r.width_mm,
                r.height_mm,
                r.utilization_percent,
                status_icon(true)
            ),
            MemberOutcome::Failed { label, error } => {
                println!("  {:<12} {}  {}", label, status_icon(false), error)
            }
        }
    }
}

fn report_error(error: &CalcError, json: bool) {
    eprintln!("Error: {}", error);
    if json {
        if let Ok(text) = serde_json::to_string_pretty(error) {
            println!("{}", text);
        }
    }
}

fn beam_load_unit(load: &MemberLoad) -> &'static str {
    match load {
        MemberLoad::Beam { load, .. } => load.unit(),
        MemberLoad::Column { .. } => "kN",
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
