//! Command line definitions for maglookup

use clap::{Parser, Subcommand, ValueEnum};
use geomag::FieldKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "maglookup")]
#[command(about = "Look up magnetic declination, inclination and field strength")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML table file to use instead of the compiled-in tables
    #[arg(long, global = true)]
    pub tables: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sample the field at a position
    Lookup(LookupArgs),

    /// Print the raw table of one quantity
    Grid(GridArgs),

    /// Write the active tables to a TOML file
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Latitude in degrees, [-90, 90]
    #[arg(allow_negative_numbers = true)]
    pub lat: f32,

    /// Longitude in degrees, [-180, 180]
    #[arg(allow_negative_numbers = true)]
    pub lon: f32,

    /// Only print this quantity
    #[arg(long, value_enum)]
    pub field: Option<FieldArg>,

    /// Fail instead of printing 0 for positions outside the valid range
    #[arg(long)]
    pub strict: bool,

    /// Also print the field vector in the North-East-Down frame
    #[arg(long)]
    pub vector: bool,
}

#[derive(Parser)]
pub struct GridArgs {
    /// Quantity to print
    #[arg(long, value_enum, default_value = "declination")]
    pub field: FieldArg,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Destination file
    pub output: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    #[value(alias = "decl")]
    Declination,
    #[value(alias = "incl")]
    Inclination,
    Strength,
}

impl From<FieldArg> for FieldKind {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Declination => FieldKind::Declination,
            FieldArg::Inclination => FieldKind::Inclination,
            FieldArg::Strength => FieldKind::Strength,
        }
    }
}
