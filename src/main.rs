use anyhow::Result;
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use pubgrid::config::{find_config_file, get_config, load_config, AppConfig, HttpConfig};
use pubgrid::explorer::{Explorer, TableView};
use pubgrid::models::{FetchStatus, PublicationField};
use pubgrid::sources::RemoteCsvSource;
use pubgrid::ui;
use pubgrid::utils::HttpClient;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// pubgrid - Explore a live CSV publication feed from the terminal
#[derive(Parser, Debug)]
#[command(name = "pubgrid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch, search, sort, and paginate a CSV publication feed", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Feed URL (overrides configuration)
    #[arg(long, short)]
    url: Option<String>,

    /// Records per page (overrides configuration)
    #[arg(long)]
    page_size: Option<usize>,

    /// Case-insensitive search term matched against every column
    #[arg(long, short)]
    search: Option<String>,

    /// Column to sort by
    #[arg(long, value_enum)]
    sort: Option<SortColumn>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Page to show (1-based; out-of-range values are clamped)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Request timeout in seconds (overrides configuration)
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// Show all environment variables
    #[arg(long)]
    env: bool,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

/// Sortable columns
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SortColumn {
    /// Published date column
    Date,
    /// Title column
    Title,
    /// Authors column
    Authors,
    /// Journal column
    Journal,
    /// Organization column
    Organization,
    /// PDF URL column
    Url,
}

impl SortColumn {
    fn field(self) -> PublicationField {
        match self {
            SortColumn::Date => PublicationField::PublishedDate,
            SortColumn::Title => PublicationField::Title,
            SortColumn::Authors => PublicationField::Authors,
            SortColumn::Journal => PublicationField::Journal,
            SortColumn::Organization => PublicationField::Organization,
            SortColumn::Url => PublicationField::PdfUrl,
        }
    }
}

/// Print all available environment variables
fn print_env_vars() {
    println!("pubgrid - Environment Variables");
    println!();
    println!("Configuration:");
    println!("  PUBGRID_URL                 Feed URL to fetch (default: the demo publications feed)");
    println!("  PUBGRID_PAGE_SIZE           Records per page (default: 10)");
    println!();
    println!("Other Settings:");
    println!("  RUST_LOG                    Rust logging level (e.g., debug, info, warn, error)");
    println!();
    println!("Example:");
    println!("  export PUBGRID_URL=\"https://example.com/feed.csv\"");
    println!("  export PUBGRID_PAGE_SIZE=\"25\"");
    std::process::exit(0);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show environment variables and exit if requested
    if cli.env {
        print_env_vars();
    }

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("pubgrid={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        get_config()?
    };

    // Command-line flags override whatever the config resolved to
    let url = cli.url.clone().unwrap_or_else(|| config.url.clone());
    let page_size = cli.page_size.unwrap_or(config.page_size);
    let timeout = cli.timeout.unwrap_or(config.http.timeout_secs);

    if cli.dump_config {
        let effective = AppConfig {
            url,
            page_size,
            http: HttpConfig {
                timeout_secs: timeout,
                ..config.http
            },
        };
        println!("{}", effective.to_toml()?);
        return Ok(());
    }

    // Catch malformed URLs before a request goes out
    if let Err(err) = url::Url::parse(&url) {
        anyhow::bail!("invalid feed URL {:?}: {}", url, err);
    }

    let user_agent = config.http.user_agent.clone().unwrap_or_else(|| {
        concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
    });
    let client = HttpClient::with_timeouts(
        &user_agent,
        Duration::from_secs(timeout),
        Duration::from_secs(config.http.connect_timeout_secs),
    );
    let source = Arc::new(RemoteCsvSource::with_client(client, url.as_str()));
    let mut explorer = Explorer::new(source, page_size);

    if let Some(term) = &cli.search {
        explorer.set_search_term(term.clone());
    }
    if let Some(column) = cli.sort {
        explorer.request_sort(column.field());
        if cli.desc {
            // A second request on the same column flips it to descending
            explorer.request_sort(column.field());
        }
    }
    explorer.set_current_page(cli.page);

    let spinner = (!cli.quiet && ui::is_terminal()).then(|| ui::Spinner::new("Fetching data..."));

    let status = explorer.load().await;

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    if status == FetchStatus::Error {
        eprintln!("{}", "Failed to load data. Please try again later.".red());
        std::process::exit(1);
    }

    let view = explorer.view().clone();
    output_view(&view, cli.output);

    Ok(())
}

fn output_view(view: &TableView, format: OutputFormat) {
    let actual_format = if format == OutputFormat::Auto {
        if ui::is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        format
    };

    match actual_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(view).unwrap());
        }
        OutputFormat::Plain => {
            for record in &view.page_records {
                println!(
                    "{} - {} ({})",
                    record.title, record.authors, record.published_date
                );
                if !record.journal.is_empty() {
                    println!("  Journal: {}", record.journal);
                }
                if !record.organization.is_empty() {
                    println!("  Organization: {}", record.organization);
                }
                if !record.pdf_url.is_empty() {
                    println!("  PDF: {}", record.pdf_url);
                }
                println!();
            }
            if let Some(line) = ui::status_line(view) {
                println!("{}", line);
            }
        }
        OutputFormat::Table => {
            if view.page_records.is_empty() {
                println!("{}", ui::NO_RESULTS.yellow());
            } else {
                println!("{}", ui::publication_table(view));
            }
            if let Some(line) = ui::status_line(view) {
                println!("{}", line.dimmed());
            }
            if let Some(strip) = ui::pagination_strip(view) {
                println!("{}", strip.cyan());
            }
        }
        OutputFormat::Auto => unreachable!(),
    }
}
