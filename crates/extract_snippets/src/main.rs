// crates/extract_snippets/src/main.rs

use std::io;
use std::process;

use anyhow::Result;
use extract_snippets::config::{build_cli, RunConfig};
use extract_snippets::run;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = RunConfig::from_matches(&matches);

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if config.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();
    log::debug!("{config:?}");

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = run(&config, &mut stdout.lock(), &mut stderr.lock())?;

    if config.strict && summary.diagnostics > 0 {
        eprintln!(
            "Error: {} marker diagnostic(s) reported in strict mode.",
            summary.diagnostics
        );
        process::exit(1);
    }
    Ok(())
}
