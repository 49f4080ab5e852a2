//! padsched CLI - Pad Dispatch Schedule Builder
//!
//! Command-line interface for reading roster workbooks and rendering
//! per-day pad schedules.

mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use padsched_core::DaySchedule;
use padsched_parser::{load_roster_file, schedule_for_day, Roster};
use padsched_render::{FontConfig, LayoutConfig, RenderConfig, ScheduleRenderer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::report::{no_routes_message, GroupsReport};

#[derive(Parser)]
#[command(name = "padsched")]
#[command(author, version, about = "Pad dispatch schedule builder", long_about = None)]
struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the day keys found in a roster workbook
    Days {
        /// Roster workbook (.xlsx, .xls, .xlsb, .ods)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the shift groups for one day
    Groups {
        /// Roster workbook
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Day key (defaults to the first day column)
        #[arg(short, long)]
        day: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Render the schedule image for one day
    Render {
        /// Roster workbook
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Day key (defaults to the first day column)
        #[arg(short, long)]
        day: Option<String>,

        /// Launcher name shown in the header
        #[arg(short, long, default_value = "")]
        launcher: String,

        /// Output PNG path (defaults to schedule_<day>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML file overriding layout, palette and fonts
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory containing DejaVuSans.ttf and DejaVuSans-Bold.ttf
        #[arg(long, env = "PADSCHED_FONT_DIR")]
        font_dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Days { file } => cmd_days(&file),
        Commands::Groups { file, day, format } => cmd_groups(&file, day, format),
        Commands::Render {
            file,
            day,
            launcher,
            output,
            config,
            font_dir,
        } => cmd_render(&file, day, launcher, output, config, font_dir),
    }
}

/// `RUST_LOG` wins; otherwise verbosity picks the level
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load(file: &Path) -> Result<Roster> {
    let roster = load_roster_file(file).with_context(|| format!("Failed to read roster {}", file.display()))?;
    info!(sheet = %roster.sheet, days = roster.days.len(), rows = roster.rows.len(), "loaded roster");
    Ok(roster)
}

/// Explicit day, or the first day key in the sheet
fn resolve_day(roster: &Roster, day: Option<String>) -> Result<String> {
    if let Some(day) = day {
        return Ok(day);
    }
    match roster.day_keys().first() {
        Some(key) => Ok((*key).to_string()),
        None => bail!("No day columns found in sheet '{}'", roster.sheet),
    }
}

/// Suggested file name in the working directory; separators in the day key become `_`
fn default_output_path(schedule: &DaySchedule) -> PathBuf {
    PathBuf::from(schedule.file_name().replace(['/', '\\'], "_"))
}

fn cmd_days(file: &Path) -> Result<()> {
    let roster = load(file)?;
    println!("Sheet: {}", roster.sheet);
    for key in roster.day_keys() {
        println!("{}", key);
    }
    Ok(())
}

fn cmd_groups(file: &Path, day: Option<String>, format: OutputFormat) -> Result<()> {
    let roster = load(file)?;
    let day = resolve_day(&roster, day)?;
    let groups = schedule_for_day(&roster, &day);
    if groups.is_empty() {
        eprintln!("{}", no_routes_message(&day));
    }

    let report = GroupsReport::new(&roster.sheet, &day, &groups, &LayoutConfig::default());
    match format {
        OutputFormat::Text if groups.is_empty() => {}
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn cmd_render(
    file: &Path,
    day: Option<String>,
    launcher: String,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    font_dir: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config {
        Some(path) => RenderConfig::from_file(&path)?,
        None => RenderConfig::default(),
    };
    if let Some(dir) = font_dir {
        let located = FontConfig::in_dir(dir);
        config.fonts.regular = located.regular;
        config.fonts.bold = located.bold;
    }

    let roster = load(file)?;
    let day = resolve_day(&roster, day)?;
    let groups = schedule_for_day(&roster, &day);
    let schedule = DaySchedule::new(day, launcher, groups);
    if schedule.is_empty() {
        eprintln!("{}", no_routes_message(&schedule.day_key));
        return Ok(());
    }

    let renderer = ScheduleRenderer::new(&config);
    let path = output.unwrap_or_else(|| default_output_path(&schedule));
    renderer
        .render_to_file(&schedule, &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "Schedule for {}: {} groups, {} drivers -> {}",
        schedule.day_key,
        schedule.groups.len(),
        schedule.total_rows(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use padsched_core::{RawGrid, Sheet, Workbook};
    use padsched_parser::roster_from_workbook;

    fn roster(rows: &[&[&str]]) -> Roster {
        let wb = Workbook::new(vec![Sheet::new("Rostered", RawGrid::from_strings(rows))]);
        roster_from_workbook(&wb).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resolve_day_defaults_to_first_key() {
        let r = roster(&[&["Associate Name", "Tue, 6/3", "Wed, 6/4"]]);
        assert_eq!(resolve_day(&r, None).unwrap(), "Tue");
        assert_eq!(resolve_day(&r, Some("Wed".into())).unwrap(), "Wed");
    }

    #[test]
    fn resolve_day_without_day_columns_fails() {
        let r = roster(&[&["Associate Name", "Notes"]]);
        let err = resolve_day(&r, None).unwrap_err();
        assert!(err.to_string().contains("No day columns"));
    }

    #[test]
    fn default_output_path_replaces_separators() {
        let path = |day: &str| default_output_path(&DaySchedule::new(day, "", vec![]));
        assert_eq!(path("Mon"), PathBuf::from("schedule_Mon.png"));
        assert_eq!(path("Mon 6/2"), PathBuf::from("schedule_Mon 6_2.png"));
        assert_eq!(path(r"Tue 6\3"), PathBuf::from("schedule_Tue 6_3.png"));
    }

    #[test]
    fn render_args_parse() {
        let cli = Cli::try_parse_from([
            "padsched", "render", "roster.xlsx", "--day", "Mon", "--launcher", "Dana", "-o", "out.png",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                day, launcher, output, ..
            } => {
                assert_eq!(day.as_deref(), Some("Mon"));
                assert_eq!(launcher, "Dana");
                assert_eq!(output, Some(PathBuf::from("out.png")));
            }
            _ => panic!("expected render"),
        }
    }
}
