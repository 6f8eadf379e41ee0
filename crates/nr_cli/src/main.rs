use anyhow::bail;
use clap::Parser;
use nr_core::render::render_page;
use nr_core::{load_articles, source_from_location, AnchorNavigation, Article, Category, DisplayState};
use nr_web::ServerConfig;
use std::path::{Path, PathBuf};
use tracing::info;

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Addiction Intelligence Newsroom", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Load the articles once and write the rendered page
    Render {
        /// Site root (http/https) serving /data/news.json, or a path to a JSON file
        #[arg(long)]
        source: String,
        /// Output file. Writes to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve the page and the article API over HTTP
    Serve {
        /// Site root (http/https) serving /data/news.json, or a path to a JSON file
        #[arg(long)]
        source: String,
        /// JSON file to expose at /data/news.json
        #[arg(long)]
        data_file: Option<PathBuf>,
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
    /// Print articles, optionally only one category
    List {
        #[arg(long)]
        source: String,
        /// Category id, e.g. "도박 중독". Defaults to all.
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the category table
    Categories,
}

fn format_article_line(article: &Article) -> String {
    let icon = Category::find(&article.category).map(|c| c.icon).unwrap_or("❔");
    format!("{} [{}] {} ({}) - {}", icon, article.date, article.title, article.source, article.url)
}

async fn render(source: &str, out: Option<&Path>) -> anyhow::Result<()> {
    let source = source_from_location(source)?;
    let state = DisplayState::from_result(load_articles(source.as_ref()).await);
    let page = render_page(&state, &AnchorNavigation)?;

    match out {
        Some(path) => {
            tokio::fs::write(path, page).await?;
            info!("📄 Wrote page to {}", path.display());
        }
        None => print!("{}", page),
    }

    if let DisplayState::Error(message) = state {
        bail!(message);
    }
    Ok(())
}

async fn list(source: &str, category: Option<&str>) -> anyhow::Result<()> {
    let source = source_from_location(source)?;
    let articles = load_articles(source.as_ref()).await?;
    let store = nr_core::ArticleStore::new(articles);

    let selected = store.by_category(category.unwrap_or(nr_core::ALL_CATEGORY_ID));
    for article in &selected {
        println!("{}", format_article_line(article));
    }
    println!("Found {} articles", selected.len());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { source, out } => render(&source, out.as_deref()).await?,
        Commands::Serve { source, data_file, host, port } => {
            let config = ServerConfig { host, port, data_file };
            let source = source_from_location(&source)?;
            nr_web::serve(config, source).await?;
        }
        Commands::List { source, category } => list(&source, category.as_deref()).await?,
        Commands::Categories => {
            for category in Category::all() {
                println!("{} {} ({})", category.icon, category.name, category.id);
            }
        }
    }

    Ok(())
}
