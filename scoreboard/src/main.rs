use clap::Parser;
use log::*;
#[cfg(debug_assertions)]
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::{
    append::rolling_file::{
        RollingFileAppender,
        policy::compound::{
            CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
        },
    },
    config::{Appender, Config as LogConfig, Logger, Root},
    encode::pattern::PatternEncoder,
};
use std::{io, path::PathBuf};
use tokio::io::BufReader;

use scoreboard::{
    APP_NAME,
    config::{Config, OutputFormat},
    input::HELP_TEXT,
    renderer::{JsonRenderer, TextRenderer},
    session::Session,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(long, short, action(clap::ArgAction::Count))]
    /// Increase the log verbosity
    verbose: u8,

    #[clap(long)]
    /// Print effects as JSON lines, regardless of the config file
    json: bool,

    #[clap(long)]
    /// Directory within which log files will be placed, default is platform dependent
    log_location: Option<PathBuf>,

    #[clap(long, default_value = "5000000")]
    /// Max size in bytes that a log file is allowed to reach before being rolled over
    log_max_file_size: u64,

    #[clap(long, default_value = "3")]
    /// Number of archived logs to keep
    num_old_logs: u32,
}

fn init_logging(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let log_base_path = match &args.log_location {
        Some(path) => path.clone(),
        None => {
            let mut path = directories::BaseDirs::new()
                .ok_or("Could not find a directory to store logs")?
                .data_local_dir()
                .to_path_buf();
            path.push("scoreboard-logs");
            path
        }
    };
    let mut log_path = log_base_path.clone();
    let mut archived_log_path = log_base_path;
    log_path.push(format!("{APP_NAME}-log.txt"));
    archived_log_path.push(format!("{APP_NAME}-log-{{}}.txt.gz"));

    // Only log to the console in debug mode, and keep stdout for the board itself
    #[cfg(debug_assertions)]
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{d} {h({l:5})} {M}] {m}{n}")))
        .build();

    // Setup the file log roller
    let roller = FixedWindowRoller::builder().build(
        archived_log_path
            .to_str()
            .ok_or("Log path is not valid unicode")?,
        args.num_old_logs,
    )?;
    let file_policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(args.log_max_file_size)),
        Box::new(roller),
    );
    let file_appender = RollingFileAppender::builder()
        .append(true)
        .encoder(Box::new(PatternEncoder::new("[{d} {l:5} {M}] {m}{n}")))
        .build(&log_path, Box::new(file_policy))?;

    // Setup the logging from all locations to use `LevelFilter::Error`
    let root = Root::builder().appender("file_appender");
    #[cfg(debug_assertions)]
    let root = root.appender("console");
    let root = root.build(LevelFilter::Error);

    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("file_appender", Box::new(file_appender)));

    #[cfg(debug_assertions)]
    let log_config = log_config.appender(Appender::builder().build("console", Box::new(console)));

    let log_config = log_config
        .logger(Logger::builder().build(APP_NAME, log_level)) // Setup the logging from the scoreboard to use `log_level`
        .build(root)?;

    log4rs::init_config(log_config)?;
    log_panics::init();

    info!("Logging to {}", log_path.display());
    Ok(())
}

fn load_config() -> Config {
    match confy::get_configuration_file_path(APP_NAME, None) {
        Ok(path) => info!("Reading config file from {path:?}"),
        Err(e) => warn!("Could not locate config file: {e}"),
    }

    match confy::load(APP_NAME, None) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file, overwriting with default. Error: {e}");
            let config = Config::default();
            if let Err(e) = confy::store(APP_NAME, None, &config) {
                error!("Failed to write default config file: {e}");
            }
            config
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    init_logging(&args)?;

    let mut config = load_config();
    if args.json {
        config.output = OutputFormat::Json;
    }
    info!(
        "Starting {APP_NAME}: {} vs {}, {} output",
        config.teams.home.name, config.teams.away.name, config.output
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let input = BufReader::new(tokio::io::stdin());
    runtime.block_on(async {
        match config.output {
            OutputFormat::Text => {
                eprintln!("{HELP_TEXT}");
                let sink = TextRenderer::new(io::stdout(), config);
                Session::new(sink).run(input).await.map(drop)
            }
            OutputFormat::Json => {
                let sink = JsonRenderer::new(io::stdout());
                Session::new(sink).run(input).await.map(drop)
            }
        }
    })?;

    // Don't wait on the blocking stdin read
    runtime.shutdown_background();
    info!("Exiting");
    Ok(())
}
