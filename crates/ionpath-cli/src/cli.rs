use clap::{Args, Parser, Subcommand, ValueEnum};
use ionpath::engine::pathways::PathwayStrategy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Luna Zhang",
    version,
    about = "ionpath CLI - A command-line interface for bond-valence site-energy (BVSE) analysis and conduction-pathway screening of solid-state electrolyte candidates.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Screen candidate materials for ionic conductivity using BVSE analysis.
    Screen(ScreenArgs),
    /// Show the effective bond-valence parameter table.
    Params(ParamsArgs),
}

/// Arguments for the `screen` subcommand.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    // --- Core Arguments ---
    /// Input structure files (JSON), or directories to scan for them.
    #[arg(short, long, required = true, value_name = "PATH", num_args(1..))]
    pub input: Vec<PathBuf>,

    /// Path for the JSON results file. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write a human-readable Markdown report to this path.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pathway extraction strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::Grid)]
    pub strategy: StrategyArg,

    // --- Parameter Overrides ---
    /// Merge bond-valence parameters from a TOML file over the built-in table.
    #[arg(long, value_name = "PATH")]
    pub params_toml: Option<PathBuf>,

    /// Merge bond-valence parameters from a CSV file over the built-in table.
    #[arg(long, value_name = "PATH")]
    pub params_csv: Option<PathBuf>,

    /// Fail on cation-anion pairs missing from the parameter table
    /// instead of skipping them.
    #[arg(long)]
    pub strict_params: bool,

    // --- Scan Overrides ---
    /// Override the grid resolution (points per axis) from the config file.
    #[arg(long, value_name = "INT")]
    pub grid_resolution: Option<usize>,

    /// Override the open-cell energy threshold in eV.
    #[arg(long, value_name = "FLOAT")]
    pub energy_threshold: Option<f64>,

    /// Override the neighbor cutoff radius in Angstrom.
    #[arg(long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Override the mobile ion species (element symbol).
    #[arg(long, value_name = "SYMBOL")]
    pub mobile_species: Option<String>,

    /// Override the counter ion species (element symbol).
    #[arg(long, value_name = "SYMBOL")]
    pub counter_species: Option<String>,

    /// Override the temperature in Kelvin for the conductivity estimate.
    #[arg(long, value_name = "FLOAT")]
    pub temperature: Option<f64>,

    // --- Screening Overrides ---
    /// Override the maximum activation energy (eV) a material may have to qualify.
    #[arg(long, value_name = "FLOAT")]
    pub ea_max: Option<f64>,

    /// Override the minimum conductivity (S/cm) a material must reach to qualify.
    #[arg(long, value_name = "FLOAT")]
    pub sigma_min: Option<f64>,
}

/// Arguments for the `params` subcommand.
#[derive(Args, Debug)]
pub struct ParamsArgs {
    /// Merge bond-valence parameters from a TOML file over the built-in table.
    #[arg(long, value_name = "PATH")]
    pub params_toml: Option<PathBuf>,

    /// Merge bond-valence parameters from a CSV file over the built-in table.
    #[arg(long, value_name = "PATH")]
    pub params_csv: Option<PathBuf>,
}

/// Pathway strategies as exposed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Percolate straight grid channels through the energy field.
    Grid,
    /// Enumerate discrete hops between neighboring mobile-ion sites.
    SiteHop,
}

impl From<StrategyArg> for PathwayStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Grid => PathwayStrategy::Grid,
            StrategyArg::SiteHop => PathwayStrategy::SiteHop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn screen_subcommand_parses_minimal_arguments() {
        let cli = Cli::parse_from(["ionpath", "screen", "--input", "materials.json"]);
        match cli.command {
            Commands::Screen(args) => {
                assert_eq!(args.input, vec![PathBuf::from("materials.json")]);
                assert_eq!(args.strategy, StrategyArg::Grid);
                assert!(args.output.is_none());
                assert!(!args.strict_params);
            }
            _ => panic!("expected screen subcommand"),
        }
    }

    #[test]
    fn screen_subcommand_accepts_overrides() {
        let cli = Cli::parse_from([
            "ionpath",
            "screen",
            "-i",
            "a.json",
            "b.json",
            "--strategy",
            "site-hop",
            "--grid-resolution",
            "32",
            "--ea-max",
            "0.25",
            "-j",
            "4",
        ]);
        assert_eq!(cli.threads, Some(4));
        match cli.command {
            Commands::Screen(args) => {
                assert_eq!(args.input.len(), 2);
                assert_eq!(args.strategy, StrategyArg::SiteHop);
                assert_eq!(args.grid_resolution, Some(32));
                assert_eq!(args.ea_max, Some(0.25));
            }
            _ => panic!("expected screen subcommand"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["ionpath", "-q", "-v", "params"]);
        assert!(result.is_err());
    }
}
