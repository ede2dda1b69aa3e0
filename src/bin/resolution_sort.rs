//! Scans an HTML page for written resolutions and prints them ranked.
//!
//! Usage: resolution_sort [FILE] [--base-url URL] [--scope SELECTOR]
//!                        [--sort KEY] [--asc] [--json]
//!
//! Reads stdin when no FILE is given. Set `RUST_LOG=debug` to see why
//! candidates were dropped.

use reso_sorter::{render, scan_bytes_with_options, Direction, Options, SortKey};
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};

const USAGE: &str =
    "Usage: resolution_sort [FILE] [--base-url URL] [--scope SELECTOR] [--sort KEY] [--asc] [--json]";

struct Args {
    input: Option<String>,
    options: Options,
    json: bool,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut parsed = Args {
        input: None,
        options: Options::default(),
        json: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base-url" => parsed.options.base_url = Some(args.next().ok_or("--base-url needs a value")?),
            "--scope" => parsed.options.scope = Some(args.next().ok_or("--scope needs a value")?),
            "--sort" => {
                let key = args.next().ok_or("--sort needs a value")?;
                parsed.options.initial_sort = key.parse::<SortKey>()?;
            }
            "--asc" => parsed.options.initial_direction = Direction::Ascending,
            "--json" => parsed.json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ if arg.starts_with("--") => return Err(format!("unknown flag {arg}\n{USAGE}").into()),
            _ => parsed.input = Some(arg),
        }
    }

    Ok(parsed)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = parse_args()?;

    let html = match &args.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let ranker = scan_bytes_with_options(&html, &args.options)?;
    log::info!("found {} resolutions", ranker.len());

    if args.json {
        println!("{}", render::render_json(ranker.records())?);
    } else {
        print!("{}", render::render_table(ranker.records()));
    }

    Ok(())
}
