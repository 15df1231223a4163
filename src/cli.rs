//! CLI interface for kilnlog.
//!
//! Each subcommand is non-interactive: arguments in, readable output out.
//! Mutating commands load the store, apply one state transition, and save
//! the whole store back — last write wins, matching the single-user model.
//!
//! Commands split by entity:
//!
//! - `kilnlog firing log|list` — the firing history.
//! - `kilnlog zone show|set|suggest|apply` — per-zone offsets.
//! - `kilnlog hardware show|set` — wear tracking.
//! - `kilnlog program new|list`, `stats`, `cones`, `export`, `import`.

mod format;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use jiff::{Timestamp, Zoned, civil::Date};
use uuid::Uuid;

use crate::advisor;
use crate::config::Config;
use crate::model::{
    Cone, ComponentKind, FiringProgram, FiringRecord, FiringType, LoadDensity, Zone, ZoneResults,
};
use crate::state::{ComponentUpdate, KilnState};
use crate::stats;
use crate::storage::Storage;

use format::{
    format_component, format_firing, format_offsets, format_program, format_suggestion,
    format_zone_results, maintenance_note,
};

/// kilnlog — log firings, track wear, and tune zone offsets.
#[derive(Debug, Parser)]
#[command(name = "kilnlog", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: tuning offsets from results
  1. kilnlog firing log --result "hot cone 6"
     → records the firing and advances hardware wear counts
  2. kilnlog zone suggest
     → suggested offsets from the last 5 firings
  3. kilnlog zone apply
     → adopt the suggestions as the current offsets

Describe results in cone terms: "hot cone 6", "cone 7", "perfect cone 6".
The suggestion engine only reads results that mention a cone."#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log firings and review the history.
    Firing {
        #[command(subcommand)]
        command: FiringCommand,
    },

    /// Show, set, and tune per-zone offsets.
    Zone {
        #[command(subcommand)]
        command: ZoneCommand,
    },

    /// Track wear on elements, thermocouples, and relays.
    Hardware {
        #[command(subcommand)]
        command: HardwareCommand,
    },

    /// Manage saved firing programs.
    Program {
        #[command(subcommand)]
        command: ProgramCommand,
    },

    /// Aggregated statistics over the firing history.
    Stats,

    /// Print the cone→temperature reference table.
    Cones,

    /// Write the full store to a single JSON document.
    Export {
        /// Output path. Defaults to `kiln-data-<date>.json`.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Replace the store with a previously exported document.
    Import {
        /// Path to an export document.
        path: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum FiringCommand {
    /// Record a firing. Current zone offsets are snapshotted into the
    /// record, and every hardware component's wear count advances by one.
    Log(LogFiringArgs),

    /// List logged firings, newest first.
    List {
        /// Maximum number to show.
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Debug, Args)]
pub struct LogFiringArgs {
    /// What the witness cone or controller showed, e.g. "hot cone 6".
    #[arg(long)]
    pub result: String,

    /// Target cone, e.g. 6 or 04. Defaults to the configured cone.
    #[arg(long)]
    pub cone: Option<Cone>,

    /// Top-zone result (falls back to --result when omitted).
    #[arg(long)]
    pub top: Option<String>,

    /// Middle-zone result.
    #[arg(long)]
    pub middle: Option<String>,

    /// Bottom-zone result.
    #[arg(long)]
    pub bottom: Option<String>,

    /// Kind of firing.
    #[arg(long, value_enum, default_value_t = FiringKindArg::Glaze)]
    pub kind: FiringKindArg,

    /// Clay body in the load.
    #[arg(long)]
    pub clay: Option<String>,

    /// Glaze used.
    #[arg(long)]
    pub glaze: Option<String>,

    /// How full the kiln was.
    #[arg(long, value_enum, default_value_t = LoadArg::Full)]
    pub load: LoadArg,

    /// Freeform observations.
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ZoneCommand {
    /// Show current offsets.
    Show,

    /// Set one zone's offset, in °F within 0..=100.
    Set { zone: Zone, offset: i32 },

    /// Suggest offsets from the recent firing history.
    Suggest,

    /// Apply suggested offsets (one zone, or all three).
    Apply {
        /// Only apply this zone's suggestion.
        #[arg(long)]
        zone: Option<Zone>,
    },
}

#[derive(Debug, Subcommand)]
pub enum HardwareCommand {
    /// Show wear, health status, and maintenance alerts.
    Show,

    /// Update one component's install date, firing count, or rated life.
    Set {
        /// Component: elements, thermocouples, or relays.
        component: ComponentKind,

        /// Install date (YYYY-MM-DD).
        #[arg(long)]
        installed: Option<Date>,

        /// Lifetime firing count.
        #[arg(long)]
        count: Option<u32>,

        /// Rated life in firings.
        #[arg(long)]
        max_life: Option<u32>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProgramCommand {
    /// Save a firing program.
    New {
        /// Program name, e.g. "Cone 6 Slow Glaze".
        name: String,

        #[arg(long, value_enum, default_value_t = FiringKindArg::Glaze)]
        kind: FiringKindArg,

        /// Peak temperature, °F.
        #[arg(long, default_value_t = 2165)]
        target_temp: u32,

        /// Ramp rate, °F per hour.
        #[arg(long, default_value_t = 150)]
        ramp: u32,

        /// Hold at peak, minutes.
        #[arg(long, default_value_t = 10)]
        hold: u32,

        /// Recommended clay body.
        #[arg(long)]
        clay: Option<String>,

        /// Freeform notes.
        #[arg(long)]
        notes: Option<String>,
    },

    /// List saved programs, newest first.
    List,
}

/// CLI-facing firing kind, mapped to the domain `FiringType`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FiringKindArg {
    Bisque,
    Glaze,
    Test,
}

impl FiringKindArg {
    fn to_domain(self) -> FiringType {
        match self {
            Self::Bisque => FiringType::Bisque,
            Self::Glaze => FiringType::Glaze,
            Self::Test => FiringType::Test,
        }
    }
}

/// CLI-facing load density, mapped to the domain `LoadDensity`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LoadArg {
    Full,
    Partial,
    Test,
}

impl LoadArg {
    fn to_domain(self) -> LoadDensity {
        match self {
            Self::Full => LoadDensity::Full,
            Self::Partial => LoadDensity::Partial,
            Self::Test => LoadDensity::Test,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Firing { command } => match command {
            FiringCommand::Log(args) => cmd_firing_log(config, storage, &args),
            FiringCommand::List { limit } => cmd_firing_list(storage, limit),
        },
        Command::Zone { command } => match command {
            ZoneCommand::Show => cmd_zone_show(storage),
            ZoneCommand::Set { zone, offset } => cmd_zone_set(storage, zone, offset),
            ZoneCommand::Suggest => cmd_zone_suggest(storage),
            ZoneCommand::Apply { zone } => cmd_zone_apply(storage, zone),
        },
        Command::Hardware { command } => match command {
            HardwareCommand::Show => cmd_hardware_show(storage),
            HardwareCommand::Set {
                component,
                installed,
                count,
                max_life,
            } => cmd_hardware_set(storage, component, installed, count, max_life),
        },
        Command::Program { command } => match command {
            ProgramCommand::New {
                name,
                kind,
                target_temp,
                ramp,
                hold,
                clay,
                notes,
            } => cmd_program_new(storage, &name, kind, target_temp, ramp, hold, clay, notes),
            ProgramCommand::List => cmd_program_list(storage),
        },
        Command::Stats => cmd_stats(storage),
        Command::Cones => cmd_cones(),
        Command::Export { out } => cmd_export(storage, out),
        Command::Import { path } => cmd_import(storage, &path),
    }
}

fn cmd_firing_log(config: &Config, storage: &Storage, args: &LogFiringArgs) -> Result<(), String> {
    let overall = args.result.trim();
    if overall.is_empty() {
        return Err("overall result is required — describe what the witness cone showed".into());
    }

    let state = load(storage)?;
    let record = FiringRecord {
        id: Uuid::new_v4(),
        target_cone: args.cone.unwrap_or(config.default_cone),
        overall_result: overall.to_string(),
        zone_results: ZoneResults {
            top: clean(args.top.as_deref()),
            middle: clean(args.middle.as_deref()),
            bottom: clean(args.bottom.as_deref()),
        },
        offsets_at_firing: state.zone_offsets,
        firing_type: args.kind.to_domain(),
        clay_body: clean(args.clay.as_deref()),
        glaze: clean(args.glaze.as_deref()),
        load_density: args.load.to_domain(),
        notes: clean(args.notes.as_deref()),
        logged_at: Timestamp::now(),
    };

    let id = record.id;
    let target = record.target_cone;
    let offsets = record.offsets_at_firing;
    let state = state.log_firing(record);
    save(storage, &state)?;

    println!("{id}");
    eprintln!(
        "Logged firing #{} (target cone {target}, {})",
        state.firings.len(),
        format_offsets(offsets),
    );
    Ok(())
}

fn cmd_firing_list(storage: &Storage, limit: usize) -> Result<(), String> {
    let state = load(storage)?;

    if state.firings.is_empty() {
        println!("No firings logged yet");
        return Ok(());
    }

    for firing in state.firings.iter().rev().take(limit) {
        println!("{}", format_firing(firing));
        if let Some(zones) = format_zone_results(&firing.zone_results) {
            println!("          {zones}");
        }
        if let Some(notes) = &firing.notes {
            println!("          note: {notes}");
        }
    }

    Ok(())
}

fn cmd_zone_show(storage: &Storage) -> Result<(), String> {
    let state = load(storage)?;
    for zone in Zone::ALL {
        println!("{:<7} {}°F", zone.name(), state.zone_offsets.get(zone));
    }
    Ok(())
}

fn cmd_zone_set(storage: &Storage, zone: Zone, offset: i32) -> Result<(), String> {
    if !(0..=100).contains(&offset) {
        return Err(format!("offset {offset} out of range (0..=100)"));
    }

    let state = load(storage)?.set_offset(zone, offset);
    save(storage, &state)?;

    eprintln!("{} offset set to {offset}°F", zone.name());
    Ok(())
}

fn cmd_zone_suggest(storage: &Storage) -> Result<(), String> {
    let state = load(storage)?;

    let Some(suggested) = advisor::suggest_offsets(&state.firings, state.zone_offsets) else {
        println!("No firings logged yet — not enough data to suggest offsets");
        return Ok(());
    };

    for zone in Zone::ALL {
        println!(
            "{}",
            format_suggestion(zone, state.zone_offsets.get(zone), suggested.get(zone))
        );
    }

    let window = state.firings.len().min(advisor::RECENT_WINDOW);
    println!();
    println!("Based on the last {window} firing(s):");
    for firing in state.firings.iter().rev().take(window) {
        println!("  {}", format_firing(firing));
    }
    Ok(())
}

fn cmd_zone_apply(storage: &Storage, zone: Option<Zone>) -> Result<(), String> {
    let state = load(storage)?;

    let Some(suggested) = advisor::suggest_offsets(&state.firings, state.zone_offsets) else {
        return Err("no firings logged yet — nothing to apply".into());
    };

    let offsets = match zone {
        Some(zone) => state.zone_offsets.with_zone(zone, suggested.get(zone)),
        None => suggested,
    };

    let state = state.apply_suggestions(offsets);
    save(storage, &state)?;

    eprintln!("Offsets now {}", format_offsets(state.zone_offsets));
    Ok(())
}

fn cmd_hardware_show(storage: &Storage) -> Result<(), String> {
    let state = load(storage)?;

    let mut alerts = Vec::new();
    for kind in ComponentKind::ALL {
        let component = state.hardware.get(kind);
        let health =
            advisor::classify_health(component).map_err(|e| format!("{}: {e}", kind.name()))?;
        println!("{}", format_component(kind, component, health));
        if let Some(note) = maintenance_note(health.status) {
            alerts.push(format!("{}: {note}", kind.name()));
        }
    }

    if alerts.is_empty() {
        println!("All hardware within normal wear");
    } else {
        println!("Alerts:");
        for alert in alerts {
            println!("  {alert}");
        }
    }
    Ok(())
}

fn cmd_hardware_set(
    storage: &Storage,
    component: ComponentKind,
    installed: Option<Date>,
    count: Option<u32>,
    max_life: Option<u32>,
) -> Result<(), String> {
    if installed.is_none() && count.is_none() && max_life.is_none() {
        return Err("nothing to set — pass --installed, --count, or --max-life".into());
    }
    if max_life == Some(0) {
        return Err("max life must be at least 1 firing".into());
    }

    let state = load(storage)?.update_component(
        component,
        ComponentUpdate {
            installed,
            firing_count: count,
            max_life,
        },
    );
    save(storage, &state)?;

    let updated = state.hardware.get(component);
    eprintln!(
        "{}: {}/{} firings",
        component.name(),
        updated.firing_count,
        updated.max_life
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_program_new(
    storage: &Storage,
    name: &str,
    kind: FiringKindArg,
    target_temp: u32,
    ramp: u32,
    hold: u32,
    clay: Option<String>,
    notes: Option<String>,
) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("program name is required".into());
    }

    let program = FiringProgram {
        id: Uuid::new_v4(),
        name: name.to_string(),
        kind: kind.to_domain(),
        target_temp_f: target_temp,
        ramp_rate_f_per_hr: ramp,
        hold_minutes: hold,
        clay_body: clean(clay.as_deref()),
        notes: clean(notes.as_deref()),
        created_at: Timestamp::now(),
    };

    let id = program.id;
    let state = load(storage)?.add_program(program);
    save(storage, &state)?;

    println!("{id}");
    eprintln!("Saved program '{name}'");
    Ok(())
}

fn cmd_program_list(storage: &Storage) -> Result<(), String> {
    let state = load(storage)?;

    if state.programs.is_empty() {
        println!("No programs saved yet");
        return Ok(());
    }

    for program in state.programs.iter().rev() {
        println!("{}", format_program(program));
    }
    Ok(())
}

fn cmd_stats(storage: &Storage) -> Result<(), String> {
    let state = load(storage)?;

    if state.firings.is_empty() {
        println!("No firing data yet");
        return Ok(());
    }

    println!("Total firings:   {}", state.firings.len());
    println!("Success rate:    {}%", stats::success_rate(&state.firings));
    if let Some(average) = stats::average_middle_offset(&state.firings) {
        println!("Average offset:  {average}°F (middle zone)");
    }
    if let Some(clay) = stats::top_clay_body(&state.firings) {
        println!("Top clay:        {clay}");
    }

    println!("By type:");
    for (kind, count, percent) in stats::firing_type_distribution(&state.firings) {
        println!("  {:<7} {count} ({percent}%)", kind.name());
    }
    Ok(())
}

fn cmd_cones() -> Result<(), String> {
    for cone in Cone::ALL {
        println!("cone {:>2}  {}°F", cone.label(), cone.temperature_f());
    }
    Ok(())
}

fn cmd_export(storage: &Storage, out: Option<PathBuf>) -> Result<(), String> {
    let state = load(storage)?;
    let doc = state.to_export(Timestamp::now());

    let path = out
        .unwrap_or_else(|| PathBuf::from(format!("kiln-data-{}.json", Zoned::now().date())));

    Storage::write_export(&path, &doc)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;

    eprintln!(
        "Exported {} firings, {} programs → {}",
        doc.firings.len(),
        doc.programs.len(),
        path.display()
    );
    Ok(())
}

fn cmd_import(storage: &Storage, path: &std::path::Path) -> Result<(), String> {
    let doc = Storage::read_export(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

    let state = KilnState::from_export(doc);
    save(storage, &state)?;

    eprintln!(
        "Imported {} firings, {} programs",
        state.firings.len(),
        state.programs.len()
    );
    Ok(())
}

fn load(storage: &Storage) -> Result<KilnState, String> {
    storage.load().map_err(|e| format!("failed to load store: {e}"))
}

fn save(storage: &Storage, state: &KilnState) -> Result<(), String> {
    storage
        .save(state)
        .map_err(|e| format!("failed to save store: {e}"))
}

/// Trims an optional text argument, dropping it entirely when blank.
fn clean(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}
