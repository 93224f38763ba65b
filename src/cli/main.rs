use anyhow::Context;
use book_directory::{
    catalog::Catalog,
    config::Config,
    models::{BookRecord, FacetField, FilterState, SortOption},
    AppError, BrowseEngine,
};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookdir")]
#[command(about = "Search and browse a book directory catalog", long_about = None, version)]
struct Cli {
    /// Normalized JSON catalog (defaults to catalog.path from configuration)
    #[arg(short, long, global = true, env = "BOOKDIR_CATALOG")]
    catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter the catalog
    Search {
        /// Free-text query; omit to browse everything
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,

        #[arg(long = "category")]
        categories: Vec<String>,

        #[arg(long = "topic")]
        topics: Vec<String>,

        #[arg(long = "player")]
        players: Vec<String>,

        #[arg(long = "team")]
        teams: Vec<String>,

        #[arg(long = "format")]
        formats: Vec<String>,

        /// Minimum rating; unrated books are excluded
        #[arg(long)]
        min_rating: Option<f64>,

        #[arg(long)]
        from_year: Option<i32>,

        #[arg(long)]
        to_year: Option<i32>,

        /// relevance, rating-desc, reviews-desc, newest or title-asc
        #[arg(short, long, default_value = "relevance")]
        sort: SortOption,

        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Also print facet counts for the matching books
        #[arg(long)]
        facets: bool,
    },

    /// Show one book
    Show {
        #[arg(value_name = "ID_OR_SLUG")]
        id: String,
    },

    /// Recommend books similar to one book
    Similar {
        #[arg(value_name = "ID_OR_SLUG")]
        id: String,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Facet counts over the whole catalog
    Facets {
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Filter option lists and the publication year range
    Options,
}

fn main() {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    init_tracing(&config);

    if let Err(err) = run(cli, config) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<AppError>()
            .map(AppError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("book_directory={}", config.observability.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.observability.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let path = cli.catalog.clone().unwrap_or_else(|| config.catalog.path.clone());
    let catalog = Catalog::from_path(&path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
    let engine = BrowseEngine::new(catalog, &config)?;

    match cli.command {
        Commands::Search {
            query,
            categories,
            topics,
            players,
            teams,
            formats,
            min_rating,
            from_year,
            to_year,
            sort,
            limit,
            facets,
        } => {
            let mut state = FilterState::new()
                .with_search(query)
                .with_categories(categories)
                .with_topics(topics)
                .with_players(players)
                .with_teams(teams)
                .with_formats(formats)
                .with_year_range(from_year, to_year);
            state.min_rating = min_rating;

            let response = engine.browse(&state, sort);
            let shown: Vec<&BookRecord> = response.books.iter().take(limit).copied().collect();

            if cli.json {
                let mut body = json!({
                    "total": response.total,
                    "catalogSize": response.catalog_size,
                    "tookMs": response.took_ms,
                    "books": shown,
                });
                if facets {
                    body["facets"] = serde_json::to_value(&response.facets)?;
                }
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!(
                    "{} of {} books ({} sort, {}ms)",
                    response.total,
                    response.catalog_size,
                    sort.label(),
                    response.took_ms
                );
                println!();
                print_books(&shown);
                if facets {
                    println!();
                    print_facets(&response.facets, 5);
                }
            }
        }

        Commands::Show { id } => {
            let book = engine
                .get(&id)
                .ok_or_else(|| AppError::NotFound(format!("Book '{}'", id)))?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(book)?);
            } else {
                print_book_detail(book);
            }
        }

        Commands::Similar { id, limit } => {
            let book = engine
                .get(&id)
                .ok_or_else(|| AppError::NotFound(format!("Book '{}'", id)))?;
            let similar = engine.similar(book, limit);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&similar)?);
            } else {
                println!("Similar to \"{}\":", book.title);
                println!();
                print_books(&similar);
            }
        }

        Commands::Facets { top } => {
            let facets = engine.catalog_facets();

            if cli.json {
                let body: serde_json::Map<String, serde_json::Value> = FacetField::iter()
                    .map(|field| -> serde_json::Result<(String, serde_json::Value)> {
                        let values = serde_json::to_value(facets.top(field, top))?;
                        Ok((field.to_string(), values))
                    })
                    .collect::<serde_json::Result<_>>()?;
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                print_facets(&facets, top);
            }
        }

        Commands::Options => {
            let options = engine.filter_options();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                println!("Categories: {}", options.categories.join(", "));
                println!("Topics:     {}", options.topics.join(", "));
                println!("Players:    {}", options.players.join(", "));
                println!("Teams:      {}", options.teams.join(", "));
                println!("Formats:    {}", options.formats.join(", "));
                println!("Years:      {}-{}", options.year_range.0, options.year_range.1);
            }
        }
    }

    Ok(())
}

fn print_books(books: &[&BookRecord]) {
    if books.is_empty() {
        println!("  (no books)");
        return;
    }

    for (i, book) in books.iter().enumerate() {
        let rating = book
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        let year = book
            .publication_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:>3}. {} by {} [{}] rating {} ({} reviews) {}",
            i + 1,
            book.title,
            book.author,
            book.category,
            rating,
            book.review_count_display,
            year
        );
    }
}

fn print_book_detail(book: &BookRecord) {
    println!("{}", book.title);
    println!("  by {}", book.author);
    println!("  id:        {} ({})", book.id, book.slug);
    println!("  category:  {}", book.category);
    if let Some(rating) = book.rating {
        println!("  rating:    {:.1} ({} reviews)", rating, book.review_count_display);
    }
    if let Some(year) = book.publication_year {
        println!("  published: {}", year);
    }
    for (label, values) in [
        ("topics", &book.topics),
        ("players", &book.players_mentioned),
        ("teams", &book.teams_mentioned),
        ("formats", &book.formats),
    ] {
        if !values.is_empty() {
            println!("  {:<10} {}", format!("{}:", label), values.join(", "));
        }
    }
    if !book.description.is_empty() {
        println!();
        println!("{}", book.description);
    }
}

fn print_facets(facets: &book_directory::FacetCounts, top: usize) {
    for field in FacetField::iter() {
        let counts = facets.top(field, top);
        if counts.is_empty() {
            continue;
        }

        println!("{}:", field);
        for entry in counts {
            println!("  {:>5}  {}", entry.count, entry.name);
        }
    }
}
