//! windspeak CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use windspeak::output::{format_timestamp, write_phrase};
use windspeak::{compile, speak, Config, OutputFormat, Reading, StationClient, Voice};

/// Spoken wind reports from pre-recorded clips
#[derive(Parser)]
#[command(name = "windspeak")]
#[command(about = "Speak WindWiz wind readings using pre-recorded audio clips", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a station's latest reading and write it as a WAV file
    Speak {
        /// Station id (use `stations` to list them)
        #[arg(short, long)]
        station: Option<String>,

        /// Output WAV file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Voice to use
        #[arg(short = 'V', long)]
        voice: Option<String>,

        /// API root URL
        #[arg(short, long)]
        url: Option<String>,
    },

    /// List available stations
    Stations {
        /// API root URL
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Write a WAV file for explicit values, without the station API
    Say {
        /// Wind direction in degrees
        #[arg(short, long, allow_negative_numbers = true)]
        direction: f64,

        /// Wind speed in m/s
        #[arg(short, long, allow_negative_numbers = true)]
        speed: f64,

        /// Output WAV file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Voice to use
        #[arg(short = 'V', long)]
        voice: Option<String>,
    },

    /// Print the clips that would be played, without touching audio
    Tokens {
        /// Wind direction in degrees
        #[arg(short, long, allow_negative_numbers = true)]
        direction: f64,

        /// Wind speed in m/s
        #[arg(short, long, allow_negative_numbers = true)]
        speed: f64,

        /// Output format (text, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List installed voices
    Voices,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging - quiet by default, use -v for more
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = if let Some(ref config_path) = cli.config {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Speak {
            station,
            output,
            voice,
            url,
        } => {
            if let Some(url) = url {
                config.station.api_url = url;
            }
            if let Some(station) = station {
                config.station.station = Some(station);
            }
            apply_voice_overrides(&mut config, output, voice);
            speak_station(config)
        }
        Commands::Stations { url } => {
            if let Some(url) = url {
                config.station.api_url = url;
            }
            list_stations(config)
        }
        Commands::Say {
            direction,
            speed,
            output,
            voice,
        } => {
            apply_voice_overrides(&mut config, output, voice);
            speak_reading(&config, Reading::new(direction, speed))
        }
        Commands::Tokens {
            direction,
            speed,
            format,
        } => {
            if let Some(format) = format {
                config.output.format = format.parse::<OutputFormat>()?;
            }
            print_tokens(&config, Reading::new(direction, speed))
        }
        Commands::Voices => list_voices(&config),
    }
}

fn apply_voice_overrides(config: &mut Config, output: Option<PathBuf>, voice: Option<String>) {
    if let Some(output) = output {
        config.output.path = output;
    }
    if let Some(voice) = voice {
        config.voice.name = voice;
    }
}

/// Fetch the latest reading of the configured station and speak it
fn speak_station(config: Config) -> Result<()> {
    let station = config
        .station
        .station
        .clone()
        .context("No station specified (use -s, or `stations` to list them)")?;

    let client = StationClient::new(config.station.clone());
    let reading = client
        .latest_reading(&station)
        .with_context(|| format!("Failed to fetch reading for station {}", station))?;

    speak_reading(&config, reading)
}

/// Compile a reading and assemble it into the configured output file
fn speak_reading(config: &Config, reading: Reading) -> Result<()> {
    let voice = Voice::open(&config.voice.voices_dir, &config.voice.name)
        .context("Failed to open voice")?;

    let report = speak(&reading, &voice, &config.output.path).with_context(|| {
        format!("Failed to write {}", config.output.path.display())
    })?;

    info!(
        "Spoke {:.1} deg / {:.1} m/s with voice '{}'",
        reading.wind_direction,
        reading.wind_speed,
        voice.name()
    );
    println!(
        "{} ({} clips, {})",
        config.output.path.display(),
        report.clips,
        format_timestamp(report.duration())
    );

    Ok(())
}

/// List station ids from the index, one per line
fn list_stations(config: Config) -> Result<()> {
    let client = StationClient::new(config.station);
    let stations = client
        .list_stations()
        .with_context(|| format!("Failed to fetch station index from {}", client.api_url()))?;

    for station in stations {
        println!("{}", station.id);
    }

    Ok(())
}

/// Print the compiled phrase for a reading
fn print_tokens(config: &Config, reading: Reading) -> Result<()> {
    let phrase = compile(&reading).context("Reading cannot be spoken")?;
    let mut stdout = std::io::stdout().lock();
    write_phrase(&mut stdout, config.output.format, &reading, &phrase)?;
    Ok(())
}

/// List voices installed in the voices directory
fn list_voices(config: &Config) -> Result<()> {
    let dir = &config.voice.voices_dir;
    let voices = Voice::available(dir)
        .with_context(|| format!("Failed to read voices directory {}", dir.display()))?;

    if voices.is_empty() {
        println!("No voices found in {}", dir.display());
    } else {
        for name in voices {
            println!("{}", name);
        }
    }

    Ok(())
}
