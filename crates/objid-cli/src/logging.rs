use tracing::Level;

/// Environment variable that overrides the level chosen by `-v`/`-q`.
const LOG_ENV: &str = "OBJID_LOG";

/// Install the stderr subscriber.
pub fn init(verbose: u8, quiet: bool) {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<Level>().ok())
        .unwrap_or_else(|| level_for(verbose, quiet));

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
