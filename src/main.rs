use anyhow::{Context, Result};
use clap::Parser;
use jbuild::{BuildConfig, BuildRunner, SystemLauncher, config};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Compile every source file under the source root, then run the entry point
#[derive(Parser, Debug)]
#[command(name = "jbuild", version, about)]
struct Cli {
    /// Directory to build in; other paths are relative to it
    #[arg(short = 'C', long, default_value = ".")]
    project_dir: PathBuf,

    /// Directory searched recursively for sources
    #[arg(long, default_value = config::DEFAULT_SOURCE_ROOT)]
    source_root: PathBuf,

    /// Directory compiled artifacts are written to
    #[arg(short = 'd', long, default_value = config::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// File name suffix that marks a source file
    #[arg(long, default_value = config::DEFAULT_EXTENSION)]
    extension: String,

    /// Compiler executable
    #[arg(long, default_value = config::DEFAULT_COMPILER)]
    compiler: String,

    /// Search path passed to the compiler
    #[arg(long, default_value = config::DEFAULT_CLASSPATH)]
    classpath: String,

    /// Launcher executable for the compiled program
    #[arg(long, default_value = config::DEFAULT_RUNNER)]
    runner: String,

    /// Fully qualified entry point to run
    #[arg(long, default_value = config::DEFAULT_ENTRY_POINT)]
    entry_point: String,

    /// Pass sources to the compiler in directory-listing order
    #[arg(long)]
    unsorted: bool,

    /// Print the planned commands as JSON instead of running them
    #[arg(long)]
    dry_run: bool,

    /// Log every command and pipeline stage
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn build_config(&self) -> BuildConfig {
        BuildConfig::new()
            .with_project_dir(&self.project_dir)
            .with_source_root(&self.source_root)
            .with_output_dir(&self.output_dir)
            .with_extension(&self.extension)
            .with_compiler(&self.compiler)
            .with_compile_classpath(&self.classpath)
            .with_runner(&self.runner)
            .with_entry_point(&self.entry_point)
            .with_sorted_sources(!self.unsorted)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Warn,
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut runner = BuildRunner::new(cli.build_config(), SystemLauncher);

    if cli.dry_run {
        let plan = runner.plan()?;
        let json = serde_json::to_string_pretty(&plan).context("Failed to serialize build plan")?;
        println!("{}", json);
        return Ok(());
    }

    let report = runner.run()?;
    log::info!("Build finished ({} sources)", report.sources);
    Ok(())
}
