use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use course_glossary::config::{find_config_file, get_config, load_config, Config};
use course_glossary::glossary::{ScrollLocation, ScrollTarget, TermListDeriver};
use course_glossary::links::LinkBuilder;
use course_glossary::models::{DisplayRange, TermPage, ViewState};
use course_glossary::sources::{FileTermSource, HttpTermSource, TermSource};
use course_glossary::store::{ApplyOutcome, TermStore};
use course_glossary::ui;
use course_glossary::utils::{is_terminal, term_table_columns, terminal_width, truncate_at_word};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Course Glossary - Browse the key terms of a course
#[derive(Parser, Debug)]
#[command(name = "course-glossary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search, filter and page through the key terms of a course", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
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
    /// Expanded text with links
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one page of a course glossary
    #[command(alias = "s")]
    Show {
        /// Course id (e.g. "course-v1:Org+CS101+2024")
        course_id: String,

        /// Only show terms whose name or definition contains this text
        #[arg(long, short)]
        search: Option<String>,

        /// Only show terms taught in this module (repeatable)
        #[arg(long = "module", short)]
        modules: Vec<String>,

        /// Page to show (defaults to 1, or the page holding --scroll-to)
        #[arg(long, short)]
        page: Option<usize>,

        /// Terms per page (overrides the config file)
        #[arg(long)]
        page_size: Option<usize>,

        /// Read terms from a JSON file instead of the key terms API
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Expand this term and jump to its page
        #[arg(long, conflicts_with = "url")]
        scroll_to: Option<String>,

        /// Page URL whose `scrollTo` parameter selects the term to expand
        #[arg(long)]
        url: Option<String>,

        /// Expand every term on the page
        #[arg(long)]
        expand_all: bool,

        /// Ignore module filters for this run
        #[arg(long)]
        no_module_filter: bool,
    },

    /// List the modules terms can be filtered by
    #[command(alias = "m")]
    Modules {
        /// Course id
        course_id: String,

        /// Read terms from a JSON file instead of the key terms API
        #[arg(long, short)]
        input: Option<PathBuf>,
    },

    /// Print the effective configuration, or write a default config file
    Config {
        /// Write a default configuration file to this path
        #[arg(long)]
        init: Option<PathBuf>,
    },
}

/// JSON shape of `show`
#[derive(Serialize)]
struct GlossaryOutput<'a> {
    course_id: &'a str,
    view: &'a ViewState,
    display: DisplayRange,
    #[serde(flatten)]
    page: &'a TermPage<'a>,
    module_options: Vec<String>,
    scroll_to: Option<ScrollLocation>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(find_config_file);
    let mut config = match &config_path {
        Some(path) => load_config(path)?,
        None => get_config()?,
    };
    if let Some(timeout) = cli.timeout {
        config.service.timeout_secs = timeout;
    }

    init_tracing(&cli, &config);
    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    match cli.command {
        Some(Commands::Show {
            course_id,
            search,
            modules,
            page,
            page_size,
            input,
            scroll_to,
            url,
            expand_all,
            no_module_filter,
        }) => {
            let source = make_source(&config, input)?;
            let mut store = TermStore::new();
            if let ApplyOutcome::Failed = store.load(source.as_ref(), &course_id).await {
                if !cli.quiet {
                    eprintln!("Could not load key terms for {}", course_id);
                }
            }
            let terms = store.terms();

            let deriver = TermListDeriver::new()
                .module_filter_enabled(config.glossary.module_filter_enabled && !no_module_filter);

            let mut view = ViewState::new(page_size.unwrap_or(config.glossary.page_size));
            if let Some(query) = search {
                view.set_search_query(query);
            }
            for module in &modules {
                view.filter_modules.insert(module.clone());
            }

            let target = match (scroll_to, url) {
                (Some(name), _) => Some(ScrollTarget::new(name)),
                (None, Some(url)) => ScrollTarget::from_url(&url),
                (None, None) => None,
            };
            let location = target
                .as_ref()
                .and_then(|t| t.locate(&deriver, terms, &view));
            if target.is_some() && location.is_none() {
                tracing::warn!("Scroll target is not in the filtered term list");
            }

            view.set_selected_page(page.or(location.map(|l| l.page)).unwrap_or(1));

            let page = deriver.derive(terms, &view);
            let links = LinkBuilder::new(&config.links, &course_id);

            match resolve_format(cli.output) {
                OutputFormat::Json => {
                    let output = GlossaryOutput {
                        course_id: &course_id,
                        view: &view,
                        display: page.display_range(),
                        page: &page,
                        module_options: deriver.module_options(terms),
                        scroll_to: location,
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Table => {
                    print_table(&page);
                    ui::print_summary(&page, &view, deriver.is_module_filter_enabled());
                    ui::print_pagination(&page);
                }
                _ => {
                    ui::print_section(&format!("Glossary: {}", course_id));
                    ui::print_summary(&page, &view, deriver.is_module_filter_enabled());
                    println!();
                    ui::print_page(&page, &links, target.as_ref(), expand_all);
                    ui::print_pagination(&page);
                }
            }
        }

        Some(Commands::Modules { course_id, input }) => {
            let source = make_source(&config, input)?;
            let mut store = TermStore::new();
            store.load(source.as_ref(), &course_id).await;

            let deriver =
                TermListDeriver::new().module_filter_enabled(config.glossary.module_filter_enabled);
            let options = deriver.module_options(store.terms());

            match resolve_format(cli.output) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&options)?),
                _ => ui::print_module_options(&options, &ViewState::default()),
            }
        }

        Some(Commands::Config { init }) => match init {
            Some(path) => {
                Config::default().save_file(&path)?;
                if !cli.quiet {
                    eprintln!("Wrote default configuration to {}", path.display());
                }
            }
            None => print!("{}", config.to_toml()?),
        },

        None => {
            println!("course-glossary {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Commands:");
            println!("  show <course>     - Show a page of the course glossary");
            println!("  modules <course>  - List modules available as filters");
            println!("  config            - Print or initialize configuration");
        }
    }

    Ok(())
}

fn init_tracing(cli: &Cli, config: &Config) {
    let level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let level = if cli.quiet { "error" } else { level };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("course_glossary={}", level)),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format.as_deref() == Some("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn make_source(config: &Config, input: Option<PathBuf>) -> Result<Box<dyn TermSource>> {
    Ok(match input {
        Some(path) => Box::new(FileTermSource::new(path)),
        None => Box::new(HttpTermSource::new(&config.service)?),
    })
}

fn resolve_format(format: OutputFormat) -> OutputFormat {
    if format != OutputFormat::Auto {
        return format;
    }
    if is_terminal() {
        OutputFormat::Table
    } else {
        OutputFormat::Json
    }
}

fn print_table(page: &TermPage<'_>) {
    if page.is_empty_result() {
        println!("No Terms to Display...");
        return;
    }
    println!("{}", term_table(page));
}

fn term_table(page: &TermPage<'_>) -> comfy_table::Table {
    use comfy_table::{Attribute, Cell, Table};

    let (_, term_width, definition_width, modules_width) = term_table_columns(terminal_width());
    let first = page.display_range().first;

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["#", "Term", "Definition", "Modules"]);

    for (i, term) in page.terms.iter().enumerate() {
        let definition = term
            .definitions
            .first()
            .map(|d| d.description.as_str())
            .unwrap_or_default();
        let modules = term.module_names().into_iter().collect::<Vec<_>>().join(", ");

        table.add_row(vec![
            Cell::new(first + i),
            Cell::new(truncate_at_word(&term.key_name, term_width)).add_attribute(Attribute::Bold),
            Cell::new(truncate_at_word(definition, definition_width)),
            Cell::new(truncate_at_word(&modules, modules_width)),
        ]);
    }
    table
}
