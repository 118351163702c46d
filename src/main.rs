use clap::{Parser, Subcommand};
use std::path::PathBuf;

use craftminer_art::config::{DEFAULT_BOLD_FONT, DEFAULT_REGULAR_FONT};
use craftminer_art::{FontPaths, Generator, GeneratorConfig, banner_set, placeholder_set};

#[derive(Parser)]
#[command(name = "craftminer-art")]
#[command(about = "Generate the CraftMiner website's placeholder and banner images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory the images are written to
    #[arg(long, value_name = "DIR", default_value = "images")]
    output_dir: PathBuf,

    /// TrueType font used for titles
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BOLD_FONT)]
    bold_font: PathBuf,

    /// TrueType font used for the logo subtitle
    #[arg(long, value_name = "PATH", default_value = DEFAULT_REGULAR_FONT)]
    regular_font: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save every intermediate layer to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// News, events and update banners, the admin avatar and the logo
    Placeholders,
    /// Full-size and small CraftMiner banners
    Banner,
    /// Both sets
    All,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = GeneratorConfig::new(args.output_dir)
        .with_fonts(FontPaths {
            bold: args.bold_font,
            regular: args.regular_font,
        });

    if let Some(debug_dir) = args.debug_out {
        config = config.with_debug(debug_dir)?;
    }

    let generator = Generator::new(config);
    match args.command.unwrap_or(Command::All) {
        Command::Placeholders => {
            generator.run(&placeholder_set())?;
        }
        Command::Banner => {
            generator.run(&banner_set())?;
        }
        Command::All => {
            generator.run(&placeholder_set())?;
            generator.run(&banner_set())?;
        }
    }

    Ok(())
}
