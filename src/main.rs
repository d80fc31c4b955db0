use clap::{Parser, Subcommand};
use pagewright::config::{self, DEFAULT_CONFIG_FILE};
use pagewright::context::{BuildContext, Overrides};
use pagewright::markup::CommonMark;
use pagewright::{output, pipeline};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pagewright")]
#[command(about = "Static site generator for a folder of markdown posts")]
#[command(long_about = "\
Static site generator for a folder of markdown posts

Each post is a YAML header and a markdown body separated by a line of ten
equals signs:

  title: Hello World
  author: Ada
  order: 10
  ==========
  # Hello

  Markdown body...

Posts are listed by `order`, highest first. The output contains one page
per post (named after its title) and paginated listing pages:

  dist/
  ├── index.html          # Listing page 1
  ├── page/2.html         # Listing pages 2..N
  └── hello-world.html    # One page per post

Run 'pagewright gen-config' to print a documented pagewright.toml.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = defaults)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Source directory (overrides config)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Documents per listing page (overrides config)
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site into the output directory
    Build,
    /// Parse and paginate without writing anything
    Check {
        /// Print the page models as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Print a stock pagewright.toml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Error messages already embed their causes.
    if let Err(error) = run(&cli) {
        eprintln!("error: {error}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    match &cli.command {
        Command::Build => {
            let ctx = resolve_context(cli)?;
            println!("==> Building {}", ctx.source_dir.display());
            let report = pipeline::build(&ctx, &CommonMark::new())?;
            output::print_build_output(&report);
        }
        Command::Check { json } => {
            let ctx = resolve_context(cli)?;
            let site = pipeline::plan(&ctx, &CommonMark::new())?;
            if *json {
                let models = serde_json::json!({
                    "listings": site.listings,
                    "documents": site.document_models,
                });
                println!("{}", serde_json::to_string_pretty(&models)?);
            } else {
                println!("==> Checking {}", ctx.source_dir.display());
                output::print_check_output(&site);
                println!("==> Content is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "pagewright=warn",
        1 => "pagewright=debug",
        _ => "pagewright=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file and fold in command-line overrides.
fn resolve_context(cli: &Cli) -> Result<BuildContext, config::ConfigError> {
    let site_config = config::load_config(&cli.config)?;
    let base_dir = cli
        .config
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let overrides = Overrides {
        source_dir: cli.source.clone(),
        output_dir: cli.output.clone(),
        page_size: cli.page_size,
    };
    BuildContext::from_config(&site_config, base_dir, overrides)
}
