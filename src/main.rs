use std::{error::Error, fs, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use fitcode::{validate, BarcodeService, FitmentKey, RenderOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "fitcode", version, about = "Generate, validate and render fitment barcodes")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the barcode of a fitment
    Encode {
        #[arg(long)]
        category: String,
        #[arg(long)]
        make: u32,
        #[arg(long)]
        model: u32,
        #[arg(long)]
        submodel: u32,
        #[arg(long = "from")]
        year_from: i32,
        #[arg(long = "to")]
        year_to: i32,
    },
    /// Check the shape and check digit of a barcode
    Validate { code: String },
    /// Write a barcode as a PNG image
    Render {
        code: String,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = RenderOptions::default().width)]
        width: u32,
        #[arg(long, default_value_t = RenderOptions::default().height)]
        height: u32,
    },
}

fn init_logger(verbose: bool) {
    let default = if verbose { "fitcode=debug,info" } else { "fitcode=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut service = BarcodeService::new();

    match cli.command {
        Command::Encode { category, make, model, submodel, year_from, year_to } => {
            let key = FitmentKey::new(category, make, model, submodel, year_from, year_to);
            println!("{}", service.generate(&key)?);
        }
        Command::Validate { code } => {
            if !validate(&code) {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
            println!("valid");
        }
        Command::Render { code, output, width, height } => {
            service.renderer_mut().size(width, height);
            let bytes = service.generate_image(&code)?;
            fs::write(&output, &bytes)?;
            println!("Barcode {code} saved to: {}", output.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
