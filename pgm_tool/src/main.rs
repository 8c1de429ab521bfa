mod args;

use std::process::ExitCode;

use args::Args;
use clap::Parser;
use lib_pgm::Image;
use log::{error, info};

fn main() -> ExitCode {
    if let Err(e) = lib_pgm::init_logging() {
        eprintln!("logging disabled: {}", e);
    }

    let args = Args::parse();
    let Ok(bins) = usize::try_from(args.bins) else {
        eprintln!("{} bins is more than this platform can hold", args.bins);
        return ExitCode::from(2);
    };

    let mut image = Image::new();
    if !image.fill_from_pgm(&args.input) {
        error!("Could not load {}", args.input.display());
        return ExitCode::FAILURE;
    }
    println!(
        "The image has {} rows and {} cols",
        image.rows(),
        image.cols()
    );

    match image.compute_histogram(bins) {
        Ok(histogram) => {
            for (bin, share) in histogram.iter().enumerate() {
                println!("bin {:>3}: {:.4}", bin, share);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    }

    if args.rescales() {
        if let Some(scale) = args.down {
            image.downscale(scale);
        }
        if let Some(scale) = args.up {
            image.upscale(scale);
        }
        info!(
            "Rescaled image is {} rows by {} cols",
            image.rows(),
            image.cols()
        );
        image.write_to_pgm(&args.out);
    }

    ExitCode::SUCCESS
}
