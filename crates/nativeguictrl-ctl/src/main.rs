mod commands;

use clap::{Parser, Subcommand};
use commands::EXIT_FAILURE;
use nativeguictrl_stub::StubConfig;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "nativeguictrl-ctl",
    version,
    about = "Drive a running nativeguictrl stub over D-Bus"
)]
struct Cli {
    /// D-Bus address of the HMI bus (defaults to $NATIVEGUICTRL_ADDRESS, then
    /// unix:path=/tmp/dbus_hmi_socket).
    #[arg(long, global = true)]
    address: Option<String>,

    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Call SetRequiredSurfaces and print the returned flag.
    Surfaces {
        /// Surface list as the head unit sends it.
        surfaces: String,
        /// Fade operation code.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        fade: i16,
    },
    /// Call Quit, ending the stub's run loop.
    Quit,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("NATIVEGUICTRL_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let mut config = StubConfig::from_env();
    if let Some(address) = cli.address.as_deref() {
        config = config.with_address(address);
    }

    let result = commands::connect(&config).and_then(|proxy| match cli.command {
        Commands::Surfaces { surfaces, fade } => {
            commands::surfaces::run(&proxy, &surfaces, fade, cli.json)
        }
        Commands::Quit => commands::quit::run(&proxy, cli.json),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
