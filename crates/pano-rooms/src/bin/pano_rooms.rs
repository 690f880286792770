use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use pano_rooms::{estimate_room_from_json, RoomParams, RoomResponse};

/// Estimate room dimensions from a layout model's `uv` point payload.
#[derive(Parser, Debug)]
#[command(name = "pano-rooms", version, about)]
struct Cli {
    /// Path to the layout JSON file (an object with a `uv` key).
    layout: PathBuf,

    /// Camera height above the floor, in meters.
    #[arg(long, default_value_t = RoomParams::default().camera_height)]
    camera_height: f64,

    /// Floor-to-ceiling height, in meters.
    #[arg(long, default_value_t = RoomParams::default().ceiling_height)]
    ceiling_height: f64,

    /// Pretty-print the response JSON.
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = pano_rooms::core::init_with_level(level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let payload = std::fs::read_to_string(&cli.layout)?;
    let params = RoomParams {
        camera_height: cli.camera_height,
        ceiling_height: cli.ceiling_height,
    };

    let estimate = estimate_room_from_json(&payload, &params)?;
    let response = RoomResponse::from(estimate);

    let out = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{out}");
    Ok(())
}
