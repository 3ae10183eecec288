use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "wad-maps", about = "List the playable maps in a WAD file")]
struct Args {
    /// Path to the WAD file
    file: PathBuf,

    /// Emit a JSON report instead of one name per line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    file: String,
    map_count: usize,
    maps: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let maps = wadmap::analyze_file(&args.file)?;

    if args.json {
        let report = Report {
            file: args.file.display().to_string(),
            map_count: maps.len(),
            maps,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if maps.is_empty() {
            eprintln!("no playable maps found in {}", args.file.display());
        }
        for name in &maps {
            println!("{name}");
        }
    }

    Ok(())
}
