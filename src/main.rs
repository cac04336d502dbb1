use clap::Parser;
use placemat::{PipelineError, PlacematBuilder, PlacematConfig};
use std::env;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Generate the IBM product placemat as a PDF", long_about = None)]
struct Args {
    /// Where to write the PDF (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Paper size name, e.g. A3 or Letter (overrides the config file)
    #[arg(long)]
    page_size: Option<String>,

    /// Print the default configuration as JSON and exit
    #[arg(long, default_value_t = false)]
    print_default_config: bool,

    /// Log layout details
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if env::var("RUST_LOG").is_err() {
        let filter = if args.verbose { "placemat=debug" } else { "placemat=info" };
        unsafe {
            env::set_var("RUST_LOG", filter);
        }
    }
    env_logger::init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), PipelineError> {
    if args.print_default_config {
        println!("{}", PlacematConfig::default().to_json_pretty()?);
        return Ok(());
    }

    let mut builder = PlacematBuilder::new();
    if let Some(config) = &args.config {
        builder = builder.with_config_file(config)?;
    }
    if let Some(output) = args.output {
        builder = builder.with_output(output);
    }
    if let Some(size) = &args.page_size {
        builder = builder.with_page_size(size)?;
    }

    let pipeline = builder.build()?;
    let path = pipeline.generate_to_file()?;
    println!("PDF Generated: {}", path.display());
    Ok(())
}
