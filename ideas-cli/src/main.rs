use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use ideas_client::{
    ContentFetcher, FetchError, HttpFetcher, ListingController, ListingResult, MemoryQueryStore,
    PageQuery, PageSize, PagerState, PaginationToken, ParamUpdate, Post, QueryParams,
    QueryStateStore, SortOrder, format_published_date, navigate,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

mod logging;
mod settings;

use logging::init_logging;
use settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "ideas-cli", version, about = "CLI для просмотра ленты Ideas")]
struct Cli {
    /// Адрес content API (по умолчанию IDEAS_API_URL или публичный API).
    #[arg(long, global = true)]
    server: Option<String>,

    /// Подробнее логировать в stderr: `-v` отладка, `-vv` трассировка.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::Args)]
struct PageArgs {
    /// Номер страницы, начиная с 1.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,
    /// Размер страницы: 10, 20 или 50.
    #[arg(long, default_value = "10", value_parser = parse_size)]
    size: PageSize,
    /// Сортировка: newest, oldest, -published_at или published_at.
    #[arg(long, default_value = "newest", value_parser = parse_sort)]
    sort: SortOrder,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Показать одну страницу идей.
    List {
        #[command(flatten)]
        args: PageArgs,
        /// Вывести страницу в JSON.
        #[arg(long)]
        json: bool,
    },
    /// Интерактивный просмотр с навигацией по страницам.
    Browse {
        #[command(flatten)]
        args: PageArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseAction {
    Navigate(ParamUpdate),
    Reload,
    Help,
    Quit,
}

const BROWSE_HELP: &str = "\
Команды:
  n, next         следующая страница
  p, prev         предыдущая страница
  f, first        первая страница
  l, last         последняя страница
  <число>         перейти на страницу
  size <10|20|50> размер страницы
  sort <newest|oldest>
  r, reload       загрузить заново
  h, help         эта справка
  q, quit         выход";

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::from_env().context("не удалось прочитать настройки")?;
    init_logging(&settings.log_level, cli.verbose)?;

    let api_url = cli.server.unwrap_or_else(|| settings.api_url.clone());
    debug!(api_url = %api_url, "using content API");
    let fetcher = HttpFetcher::with_timeouts(api_url, settings.timeouts())
        .map_err(map_fetch_error)?;

    match cli.command {
        Command::List { args, json } => {
            let query = args.to_query();
            let listing = fetcher.fetch_page(&query).await.map_err(map_fetch_error)?;
            if json {
                let raw = serde_json::to_string_pretty(&listing)
                    .context("не удалось сериализовать ответ")?;
                println!("{raw}");
            } else {
                print_listing(&listing, &PagerState::new(&query, listing.total_count));
            }
        }
        Command::Browse { args } => {
            let store = MemoryQueryStore::new(args.to_params());
            browse(&fetcher, store).await?;
        }
    }

    Ok(())
}

impl PageArgs {
    fn to_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            size: self.size,
            sort: self.sort,
        }
    }

    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert(ideas_client::PAGE_KEY, self.page.to_string());
        params.insert(ideas_client::SIZE_KEY, self.size.to_string());
        params.insert(ideas_client::SORT_KEY, self.sort.as_str());
        params
    }
}

async fn browse<F, S>(fetcher: &F, mut store: S) -> Result<()>
where
    F: ContentFetcher + ?Sized,
    S: QueryStateStore,
{
    let mut controller = ListingController::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut reload = true;

    loop {
        if reload {
            let query = PageQuery::from_params(&store.read());
            controller.refresh(fetcher, query).await;
            if let Some(err) = controller.last_error() {
                eprintln!("Ошибка загрузки: {err}. Показаны последние загруженные данные.");
            }
            print_listing(controller.listing(), &controller.pager());
        }

        stdout
            .write_all(b"ideas> ")
            .await
            .context("не удалось вывести приглашение")?;
        stdout.flush().await.context("не удалось вывести приглашение")?;

        let Some(line) = lines
            .next_line()
            .await
            .context("не удалось прочитать команду")?
        else {
            return Ok(());
        };

        reload = false;
        match parse_browse_command(&line, &controller.pager()) {
            Ok(BrowseAction::Navigate(update)) => {
                navigate(&mut store, update);
                println!("?{}", store.read().to_query_string());
                reload = true;
            }
            Ok(BrowseAction::Reload) => reload = true,
            Ok(BrowseAction::Help) => println!("{BROWSE_HELP}"),
            Ok(BrowseAction::Quit) => return Ok(()),
            Err(message) => eprintln!("{message}"),
        }
    }
}

fn parse_browse_command(input: &str, pager: &PagerState) -> Result<BrowseAction, String> {
    let mut parts = input.split_whitespace();
    let Some(command) = parts.next() else {
        return Err("введите команду (h — справка)".to_string());
    };
    let argument = parts.next();

    let action = match (command.to_ascii_lowercase().as_str(), argument) {
        ("n" | "next", None) => pager
            .next_page()
            .map(|page| BrowseAction::Navigate(ParamUpdate::Page(page)))
            .ok_or_else(|| "это последняя страница".to_string())?,
        ("p" | "prev", None) => pager
            .prev_page()
            .map(|page| BrowseAction::Navigate(ParamUpdate::Page(page)))
            .ok_or_else(|| "это первая страница".to_string())?,
        ("f" | "first", None) if pager.can_go_back() => BrowseAction::Navigate(ParamUpdate::Page(1)),
        ("f" | "first", None) => return Err("это первая страница".to_string()),
        ("l" | "last", None) if pager.can_go_forward() => {
            BrowseAction::Navigate(ParamUpdate::Page(pager.last_page()))
        }
        ("l" | "last", None) => return Err("это последняя страница".to_string()),
        ("size", Some(value)) => ParamUpdate::parse(ideas_client::SIZE_KEY, value)
            .map(BrowseAction::Navigate)
            .ok_or_else(|| format!("недопустимый размер страницы: {value} (10, 20 или 50)"))?,
        ("sort", Some(value)) => ParamUpdate::parse(ideas_client::SORT_KEY, value)
            .map(BrowseAction::Navigate)
            .ok_or_else(|| format!("недопустимая сортировка: {value} (newest или oldest)"))?,
        ("r" | "reload", None) => BrowseAction::Reload,
        ("h" | "help" | "?", None) => BrowseAction::Help,
        ("q" | "quit" | "exit", None) => BrowseAction::Quit,
        (number, None) if number.chars().all(|c| c.is_ascii_digit()) => {
            ParamUpdate::parse(ideas_client::PAGE_KEY, number)
                .map(BrowseAction::Navigate)
                .ok_or_else(|| format!("недопустимый номер страницы: {number}"))?
        }
        _ => return Err(format!("неизвестная команда: {} (h — справка)", input.trim())),
    };

    if parts.next().is_some() {
        return Err(format!("лишние аргументы: {}", input.trim()));
    }
    Ok(action)
}

fn parse_size(raw: &str) -> Result<PageSize, String> {
    PageSize::parse(raw).ok_or_else(|| format!("размер страницы должен быть 10, 20 или 50, получено {raw}"))
}

fn parse_sort(raw: &str) -> Result<SortOrder, String> {
    SortOrder::parse(raw).ok_or_else(|| format!("сортировка должна быть newest или oldest, получено {raw}"))
}

fn map_fetch_error(err: FetchError) -> anyhow::Error {
    let message = match err {
        FetchError::Network(message) => format!("сетевая ошибка: {message}"),
        FetchError::Status { status, message } => format!("сервер ответил {status}: {message}"),
        FetchError::Decode(message) => format!("некорректный ответ API: {message}"),
        FetchError::InvalidEndpoint(message) => format!("некорректный адрес API: {message}"),
    };
    anyhow::anyhow!(message)
}

fn render_pager(pager: &PagerState) -> String {
    let mut parts = Vec::with_capacity(pager.tokens.len() + 4);
    let back = if pager.can_go_back() { "«  ‹" } else { "-  -" };
    parts.push(back.to_string());

    for token in &pager.tokens {
        match token {
            PaginationToken::Page(page) if pager.is_current(*page) => parts.push(format!("[{page}]")),
            token => parts.push(token.to_string()),
        }
    }

    let forward = if pager.can_go_forward() { "›  »" } else { "-  -" };
    parts.push(forward.to_string());
    parts.join(" ")
}

fn format_post(post: &Post) -> String {
    let date = format_published_date(post.published_at.as_ref());
    if date.is_empty() {
        format!("- [{}] {}", post.id, post.title)
    } else {
        format!("- [{}] {} ({date})", post.id, post.title)
    }
}

fn print_listing(listing: &ListingResult, pager: &PagerState) {
    println!("{}", pager.summary());
    for post in &listing.items {
        println!("{}", format_post(post));
    }
    println!("{}", render_pager(pager));
}
