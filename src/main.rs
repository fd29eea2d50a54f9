use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use grunt_bridge::{load_config_from_file, BuildConfig, BuildOrchestrator, SystemRunner};
use std::path::PathBuf;

fn main() {
    let matches = Command::new("grunt-bridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs the npm/grunt toolchain and stages its output for packaging")
        .arg(
            Arg::new("config")
                .help("JSON configuration file (gruntPath/outputDir/copyTo/autoUpdate)")
                .short('c')
                .long("config")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("grunt_path")
                .help("Working directory of the frontend project")
                .long("grunt-path")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output_dir")
                .help("Directory produced by the build, used as the copy source")
                .long("output-dir")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("copy_to")
                .help("Destination directory the build output is staged into")
                .long("copy-to")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no_update")
                .help("Skip the dependency install/update steps before the build")
                .long("no-update")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .help("Enable debug logging")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(e) = grunt_bridge::logging::init(level) {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Err(e) = run(&matches) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_config_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => BuildConfig::default(),
    };

    // CLI flags override file values.
    if let Some(path) = matches.get_one::<PathBuf>("grunt_path") {
        config.grunt_path = Some(path.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("output_dir") {
        config.output_dir = Some(path.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("copy_to") {
        config.copy_to = Some(path.clone());
    }
    if matches.get_flag("no_update") {
        config.auto_update = false;
    }

    let orchestrator = BuildOrchestrator::new(config, SystemRunner);
    orchestrator.run().context("Frontend build failed")?;
    Ok(())
}
