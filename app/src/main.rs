use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use common::{config::Config, error::VizError};
use eyre::Result;
use tracing::error;
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

mod run;

#[derive(Parser)]
struct Cli {
    /// Optional YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Measurement table to visualize
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Directory the chart artifacts are written to
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// Overall title of the scaling figure
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short, long)]
    log: Vec<String>,
}

fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();
    let file_appender = tracing_appender::rolling::never(".", "log.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let mut env_filter = EnvFilter::new(format!("bench_viz={log_level}"));
    for directive in &args.log {
        env_filter = env_filter.add_directive(directive.parse()?);
    }
    for module in ["common", "plots"] {
        if !args.log.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .with(layer().with_writer(non_blocking))
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(input) = args.input {
        config.input = input;
    }
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }
    if let Some(title) = args.title {
        config.title = title;
    }

    if let Err(err) = run::run(&config) {
        error!("{err:#?}");
        match err {
            VizError::InputNotFound(path) => {
                eprintln!("Error: {} not found.", path.display());
                eprintln!("Run the benchmark program first to produce the measurement table.");
            }
            other => eprintln!("Error visualizing performance data: {other}"),
        }
        exit(1);
    }

    Ok(())
}
