use anyhow::Result;
use biotope_lib::app::{App, ShutdownManager};
use biotope_lib::model::config::AppConfig;
use biotope_lib::model::init_logging;
use biotope_lib::ui::{CellStyle, Tui};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Seed for reproducible runs (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Epochs to simulate in headless mode
    #[arg(long, default_value_t = 1000)]
    epochs: u64,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load_from(&args.config)?;
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }
    let mut app = App::new(config)?;

    match args.mode {
        Mode::Headless => {
            println!("Running {} epochs in HEADLESS mode...", args.epochs);
            let census = app.run_headless(args.epochs);
            for (cell, count) in census.iter() {
                println!("{:>8} '{}': {}", format!("{cell:?}"), cell.symbol(), count);
            }
        }
        Mode::Standard => {
            ShutdownManager::new().install()?;
            let mut tui = Tui::new();
            tui.init()?;

            let res = tokio::task::block_in_place(|| app.run(&mut tui));

            tui.exit()?;
            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}
