use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feed_client::{DEFAULT_API_URL, FeedClient};
use feed_core::{DataStore, FeedError, FeedSource, SortDirection, ViewController};
use tracing::info;

mod browse;
mod logging;
mod render;
mod settings;

use browse::run_browse;
use logging::init_logging;
use render::{render_comments, render_page, render_users};
use settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "feed-cli", version, about = "CLI для просмотра ленты постов")]
struct Cli {
    /// Адрес API (по умолчанию FEED_API_URL или jsonplaceholder).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Страница постов с фильтрами.
    Posts {
        /// Подстрока заголовка (без учёта регистра).
        #[arg(long)]
        search: Option<String>,
        /// Идентификатор автора.
        #[arg(long)]
        user: Option<i64>,
        /// Сортировка по заголовку: asc или desc.
        #[arg(long)]
        sort: Option<SortDirection>,
        /// Номер страницы; больше последней — показывается последняя.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Список авторов.
    Users,
    /// Комментарии к посту.
    Comments {
        #[arg(long)]
        post_id: i64,
    },
    /// Интерактивный просмотр ленты.
    Browse,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;

    let api_url = resolve_api_url(cli.api_url, settings.api_url);
    info!(%api_url, "using API");
    let client = FeedClient::with_timeout(api_url, settings.http_timeout)
        .context("не удалось создать HTTP-клиент")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Posts {
            search,
            user,
            sort,
            page,
        } => {
            let store = load_store(&client).await?;
            let view = build_view(&store, search, user, sort, page);
            render_page(&mut out, &view, &store)?;
        }
        Command::Users => {
            let store = load_store(&client).await?;
            render_users(&mut out, &store)?;
        }
        Command::Comments { post_id } => {
            let comments = client
                .fetch_comments(post_id)
                .await
                .map_err(map_feed_error)?;
            render_comments(&mut out, &comments)?;
        }
        Command::Browse => {
            let store = load_store(&client).await?;
            let mut view = ViewController::new(store.posts().to_vec());
            let stdin = io::stdin();
            run_browse(&client, &store, &mut view, stdin.lock(), &mut out).await?;
        }
    }

    out.flush()?;
    Ok(())
}

async fn load_store(client: &FeedClient) -> Result<DataStore> {
    let store = DataStore::load(client).await.map_err(map_feed_error)?;
    info!(
        posts = store.posts().len(),
        users = store.users().len(),
        "feed loaded"
    );
    Ok(store)
}

/// Применяет ввод в том же порядке, что и страница: фильтры пересчитывают
/// список, затем листание до нужной страницы.
fn build_view(
    store: &DataStore,
    search: Option<String>,
    user: Option<i64>,
    sort: Option<SortDirection>,
    page: usize,
) -> ViewController {
    let mut view = ViewController::new(store.posts().to_vec());

    if let Some(search) = search {
        view.set_search_term(search);
    }
    if user.is_some() {
        view.select_user(user);
    }
    if let Some(sort) = sort {
        view.set_sort_direction(sort);
    }

    for _ in 1..page {
        if !view.go_to_next_page() {
            break;
        }
    }
    view
}

fn resolve_api_url(flag: Option<String>, env: Option<String>) -> String {
    let raw = flag
        .or(env)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    normalize_api_url(raw.trim().to_string())
}

fn normalize_api_url(url: String) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url;
    }

    format!("https://{url}")
}

fn map_feed_error(err: FeedError) -> anyhow::Error {
    let message = match err {
        FeedError::Network(message) => format!("API недоступен: {message}"),
        FeedError::Http { status: 404, .. } => "ресурс не найден".to_string(),
        FeedError::Http { status, message } => format!("ошибка API ({status}): {message}"),
        FeedError::Decode(message) => format!("неожиданный ответ API: {message}"),
    };
    anyhow::anyhow!(message)
}
