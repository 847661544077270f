//! Cricket feature extraction CLI
//!
//! Batch-flattens a directory of ball-by-ball scorecards into a CSV table.

use clap::{Parser, Subcommand};
use cricket::{Config, Result};

#[derive(Parser)]
#[command(name = "cricket")]
#[command(about = "Flatten ball-by-ball cricket scorecards into CSV training data", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory of match JSON files and write the feature table
    Extract {
        /// Directory of match records (defaults to config)
        dir: Option<String>,
        /// Output CSV path (defaults to config)
        #[arg(short, long)]
        output: Option<String>,
        /// Include second-innings and overs-bowled columns
        #[arg(long)]
        extended: bool,
    },
    /// Extract a single match file and print its header and row
    Row {
        /// Path to one match JSON file
        file: String,
        /// Include second-innings and overs-bowled columns
        #[arg(long)]
        extended: bool,
    },
    /// Initialize a new project with default config
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let result = match cli.command {
        Commands::Extract {
            dir,
            output,
            extended,
        } => commands::extract(&config, dir, output, extended),
        Commands::Row { file, extended } => commands::row(&config, &file, extended),
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use cricket::data::{export, scanner};
    use cricket::features::FeatureShape;

    fn shape_for(config: &Config, extended: bool) -> FeatureShape {
        if extended {
            FeatureShape::Extended
        } else {
            config.export.shape
        }
    }

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        std::fs::create_dir_all(&config.data.matches_dir)?;
        println!("Created {}/ directory", config.data.matches_dir);

        println!("\nNext steps:");
        println!("  1. Edit {} to customize settings", config_path);
        println!(
            "  2. Drop per-match JSON scorecards into {}/",
            config.data.matches_dir
        );
        println!("  3. Run 'cricket extract' to build the feature table");

        Ok(())
    }

    pub fn extract(
        config: &Config,
        dir: Option<String>,
        output: Option<String>,
        extended: bool,
    ) -> Result<()> {
        let dir = dir.unwrap_or_else(|| config.data.matches_dir.clone());
        let output = output.unwrap_or_else(|| config.data.output_path.clone());
        let shape = shape_for(config, extended);

        println!("Scanning {}...", dir);
        let report = scanner::scan_directory(&dir)?;

        export::write_table(&output, shape, &report.rows)?;

        println!(
            "\nProcessing complete! Processed {} files ({} skipped)",
            report.processed(),
            report.failures.len()
        );
        for failure in &report.failures {
            println!("  skipped {}: {}", failure.path.display(), failure.reason);
        }
        println!("Results saved to {}", output);

        Ok(())
    }

    pub fn row(config: &Config, file: &str, extended: bool) -> Result<()> {
        let shape = shape_for(config, extended);
        let record = scanner::extract_file(std::path::Path::new(file))?;
        print!("{}", export::render_table(shape, &[record])?);
        Ok(())
    }
}
