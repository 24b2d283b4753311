pub mod cli;

use crate::cli::{Cli, Commands, ExportArgs, GridArgs, LookupArgs};
use anyhow::Context;
use geomag::{FieldKind, MagneticModel};
use log::info;
use std::io::Write;

/// Execute a parsed command, writing its report to `out`
pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let loaded;
    let model = match &cli.tables {
        Some(path) => {
            loaded = MagneticModel::load_from_file(path)
                .with_context(|| format!("failed to load tables from {}", path.display()))?;
            info!("Using tables from {}", path.display());
            &loaded
        }
        None => MagneticModel::reference(),
    };

    match cli.command {
        Commands::Lookup(args) => lookup(model, &args, out),
        Commands::Grid(args) => print_grid(model, &args, out),
        Commands::Export(args) => export(model, &args),
    }
}

fn lookup(model: &MagneticModel, args: &LookupArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let kinds = match args.field {
        Some(field) => vec![FieldKind::from(field)],
        None => FieldKind::ALL.to_vec(),
    };

    for kind in kinds {
        let value = if args.strict {
            model
                .try_sample(kind, args.lat, args.lon)
                .with_context(|| format!("cannot look up {}", kind))?
        } else {
            model.sample(kind, args.lat, args.lon)
        };
        writeln!(out, "{}", format_value(kind, value))?;
    }

    if args.vector {
        let ned = model.field_at(args.lat, args.lon).to_ned_vector();
        writeln!(out, "ned: [{:.3}, {:.3}, {:.3}] cT", ned.x, ned.y, ned.z)?;
    }
    Ok(())
}

fn print_grid(model: &MagneticModel, args: &GridArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let grid = model.grid(args.field.into());
    let config = grid.config();

    write!(out, "{:>6}", "lat")?;
    for col in 0..grid.lon_bands() {
        write!(out, "{:>5}", config.col_lon(col))?;
    }
    writeln!(out)?;

    // North at the top
    let rows: Vec<&[i16]> = grid.rows().collect();
    for (row, values) in rows.iter().enumerate().rev() {
        write!(out, "{:>6}", config.row_lat(row))?;
        for value in values.iter() {
            write!(out, "{:>5}", value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn export(model: &MagneticModel, args: &ExportArgs) -> anyhow::Result<()> {
    model
        .save_to_file(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("Wrote tables to {}", args.output.display());
    Ok(())
}

fn format_value(kind: FieldKind, value: f32) -> String {
    format!("{}: {:.2} {}", kind, value, kind.unit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rstest::rstest;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_lookup_prints_all_fields() {
        let output = run_args(&["maglookup", "lookup", "0", "0"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "declination: -14.00 deg");
        assert!(lines[1].starts_with("inclination: "));
        assert!(lines[2].starts_with("strength: ") && lines[2].ends_with(" cT"));
    }

    #[rstest]
    #[case("decl", "declination: ")]
    #[case("inclination", "inclination: ")]
    #[case("strength", "strength: ")]
    fn test_lookup_single_field(#[case] field: &str, #[case] prefix: &str) {
        let output = run_args(&["maglookup", "lookup", "10", "20", "--field", field]).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with(prefix), "output was {}", output);
    }

    #[test]
    fn test_lookup_accepts_negative_coordinates() {
        let output = run_args(&["maglookup", "lookup", "-33.9", "-70.6"]).unwrap();
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_out_of_range_prints_zero_unless_strict() {
        let output = run_args(&["maglookup", "lookup", "95", "0", "--field", "strength"]).unwrap();
        assert_eq!(output.trim(), "strength: 0.00 cT");

        let result = run_args(&["maglookup", "lookup", "95", "0", "--strict"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_lookup_vector() {
        let output = run_args(&["maglookup", "lookup", "45", "45", "--vector"]).unwrap();
        assert!(output.lines().any(|line| line.starts_with("ned: [")));
    }

    #[test]
    fn test_grid_prints_north_first() {
        let output = run_args(&["maglookup", "grid", "--field", "decl"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        // Header plus one line per latitude row
        assert_eq!(lines.len(), 14);
        assert!(lines[1].trim_start().starts_with("60"));
        assert!(lines[13].trim_start().starts_with("-60"));
    }

    #[test]
    fn test_export_then_load() {
        let file_name = format!("maglookup-export-{}.toml", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        let path_str = path.to_str().unwrap();

        run_args(&["maglookup", "export", path_str]).unwrap();
        let output = run_args(&["maglookup", "--tables", path_str, "lookup", "0", "0"]).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(output.starts_with("declination: -14.00 deg"));
    }

    #[test]
    fn test_missing_tables_file_fails() {
        let result = run_args(&[
            "maglookup",
            "--tables",
            "/nonexistent/tables.toml",
            "lookup",
            "0",
            "0",
        ]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("failed to load tables"));
    }
}
