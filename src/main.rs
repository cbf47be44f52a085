//! ------------------------------------------------
//! asmd-jar: Jarzynski average of ASMD work files
//! ------------------------------------------------
use anyhow::Context;
use clap::{CommandFactory, Parser};

use asmd_jarzynski::cli::Cli;
use asmd_jarzynski::pipeline;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // no arguments at all: show the full help rather than a terse usage error
    if std::env::args_os().len() == 1 {
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    let cli = Cli::parse();
    let config = cli
        .into_config()
        .context("unable to collect the ASMD work files")?;
    let report = pipeline::run(&config).with_context(|| {
        format!(
            "Jarzynski analysis of {} work files failed",
            config.work_files.len()
        )
    })?;

    println!(
        "The trajectory closest to the Jarzynski Average is: {}",
        report.representative.display()
    );
    Ok(())
}
