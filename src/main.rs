//! # bsp_mapgen command line
//!
//! Thin wrapper around the generator: reads options from a JSON file and/or
//! flags, writes the exported map as JSON to a file or stdout, and can print
//! a text view of the ground layer to stderr.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use bsp_mapgen::{GenerationOptions, ProceduralGenerator};

#[derive(Parser, Debug)]
#[command(name = "bsp_mapgen", version, about = "Generate a seeded BSP room-and-corridor map")]
struct Args {
    /// JSON file with generation options; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    min_room: Option<u32>,

    #[arg(long)]
    max_room: Option<u32>,

    #[arg(long)]
    padding: Option<u32>,

    /// Probability of keeping each extra loop corridor (0.0 - 1.0)
    #[arg(long)]
    connectivity: Option<f64>,

    #[arg(long)]
    corridor_width: Option<u32>,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the map JSON (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the ground layer as text to stderr
    #[arg(long)]
    ascii: bool,
}

impl Args {
    fn options(&self) -> Result<GenerationOptions, Box<dyn Error>> {
        let mut options = match &self.config {
            Some(path) => GenerationOptions::from_json_str(&fs::read_to_string(path)?)?,
            None => GenerationOptions::default(),
        };
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = height;
        }
        if let Some(min_room) = self.min_room {
            options.min_room_size = min_room;
        }
        if let Some(max_room) = self.max_room {
            options.max_room_size = max_room;
        }
        if let Some(padding) = self.padding {
            options.padding = padding;
        }
        if let Some(connectivity) = self.connectivity {
            options.connectivity_factor = connectivity;
        }
        if let Some(corridor_width) = self.corridor_width {
            options.corridor_width = corridor_width;
        }
        if let Some(seed) = self.seed {
            options.seed = seed;
        }
        Ok(options)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    let args = Args::parse();

    let options = args.options()?;
    info!("Generating with {:?}", options);
    let mut generator = ProceduralGenerator::new(options);
    let map = generator.generate()?;

    if args.ascii {
        eprint!("{}", map.render_ascii());
    }

    let json = map.to_json_pretty()?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Wrote map to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
