use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use storeshots::{FontPaths, GeneratorConfig, ShotKind, HEIGHT, WIDTH};

/// Generate the ClearVue App Store screenshots
#[derive(Parser, Debug)]
#[command(name = "storeshots", version, about)]
struct Args {
    /// Directory to write the PNG files into (defaults to the current
    /// directory, not the directory holding the binary)
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Proportional font file
    #[arg(long)]
    font: Option<PathBuf>,

    /// Monospace font file
    #[arg(long)]
    mono_font: Option<PathBuf>,

    /// Rounded font file
    #[arg(long)]
    rounded_font: Option<PathBuf>,

    /// Fail instead of substituting installed fonts for missing files
    #[arg(long)]
    no_system_fallback: bool,

    /// Only build these screenshots (results, camera, touch, landing, display)
    #[arg(long = "only", value_name = "NAME")]
    only: Vec<ShotKind>,

    /// Write a JSON report of the generated files
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> (GeneratorConfig, Option<PathBuf>) {
        let defaults = FontPaths::default();
        let fonts = FontPaths {
            sans: self.font.unwrap_or(defaults.sans),
            mono: self.mono_font.unwrap_or(defaults.mono),
            rounded: self.rounded_font.unwrap_or(defaults.rounded),
        };
        let config = GeneratorConfig {
            output_dir: self.out_dir,
            fonts,
            system_fallback: !self.no_system_fallback,
            only: self.only,
        };
        (config, self.report)
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let (config, report_path) = args.into_config();
    let total = config.selected().len();

    println!("Generating App Store screenshots ({}x{})...", WIDTH, HEIGHT);
    println!("Output: {}/", config.output_dir.display());
    println!();

    let report = storeshots::generate(&config, |shot| println!("Created {}", shot.file_name))
        .context("screenshot generation failed")?;

    if let Some(path) = report_path {
        report
            .write_json(&path)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    println!();
    println!("Done! {} screenshots generated.", total);
    Ok(())
}

const DEFAULT_LOG_FILTER: &str = "info";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("storeshots: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn out_dir_help_names_the_default() {
        let cmd = Args::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "out_dir")
            .unwrap();
        let help = arg.get_long_help().or(arg.get_help()).unwrap().to_string();
        assert!(help.contains("current directory"), "{help}");
        let args = Args::try_parse_from(["storeshots"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("."));
    }

    #[test]
    fn logs_at_info_by_default() {
        assert_eq!(DEFAULT_LOG_FILTER, "info");
    }
}
