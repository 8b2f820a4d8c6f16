// console/command_handler.rs

use crate::console::{render, Console};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text: homepage suggestion search (debounced).
    Search(String),
    Grid(String),
    Chip(String),
    /// Blog search text (debounced).
    Blog(String),
    BlogChip(String),
    Page(usize),
    Inject { category: String, limit: Option<usize> },
    Carousels,
    Refresh,
    Status,
    Help,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if !line.starts_with('/') {
        return Command::Search(line.to_string());
    }
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    match name {
        "/grid" => Command::Grid(rest.to_string()),
        "/chip" => Command::Chip(rest.to_string()),
        "/blog" => Command::Blog(rest.to_string()),
        "/blogchip" => Command::BlogChip(rest.to_string()),
        "/page" => match rest.parse() {
            Ok(n) => Command::Page(n),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "/inject" => {
            // Trailing number is the limit; everything before it is the category.
            match rest.rsplit_once(char::is_whitespace) {
                Some((category, limit)) if limit.parse::<usize>().is_ok() => Command::Inject {
                    category: category.trim().to_string(),
                    limit: limit.parse().ok(),
                },
                _ => Command::Inject {
                    category: rest.to_string(),
                    limit: None,
                },
            }
        }
        "/carousels" => Command::Carousels,
        "/refresh" => Command::Refresh,
        "/status" => Command::Status,
        "/help" => Command::Help,
        _ => Command::Unknown(line.to_string()),
    }
}

const HELP: &str = "📋 Available commands:\n\
    <text> — search products (homepage suggestions)\n\
    /grid <text> — search the all-products grid\n\
    /chip <category|all> — filter the grid by category\n\
    /blog <text> — search the blog index\n\
    /blogchip <category|all> — filter the blog by category\n\
    /page <n> — blog page\n\
    /inject <category> [limit] — products for an article block\n\
    /carousels — homepage carousels\n\
    /refresh — reload the sheet now\n\
    /status — loaded data summary";

/// Handles an immediate (non-debounced) command.
pub async fn handle_command(command: Command, console: &Console) {
    info!("Handling command: {:?}", command);
    match command {
        Command::Search(query) => console.show_suggestions(&query).await,
        Command::Blog(query) => console.show_blog_search(&query).await,
        Command::Grid(query) => {
            let results = console.grid().await.search(&query);
            println!("{}", render::products(&results));
        }
        Command::Chip(chip) => {
            let mut grid = console.grid().await;
            let results = grid.select_chip(&chip);
            println!("{}", render::chips(grid.active_chip(), &grid.chip_labels()));
            println!("{}", render::products(&results));
        }
        Command::BlogChip(chip) => {
            let mut blog = console.blog().await;
            let page = blog.select_chip(&chip);
            println!("{}", render::chips(blog.active_chip(), &blog.chip_labels()));
            println!("{}", render::blog_page(&page));
        }
        Command::Page(n) => {
            let page = console.blog().await.goto(n);
            println!("{}", render::blog_page(&page));
        }
        Command::Inject { category, limit } => {
            let limit = limit.unwrap_or(console.config.inject_limit);
            let items = console.home().await.inject(&category, limit);
            println!("{}", render::injected(&category, &items));
        }
        Command::Carousels => {
            println!("{}", render::carousels(&console.home().await.carousels()));
        }
        Command::Refresh => {
            info!("/refresh command received, triggering reload...");
            console.refresh_notify.notify_one();
            println!("🔄 Reload requested.");
        }
        Command::Status => {
            let state = console.state.lock().await;
            let uptime = console.start_time.elapsed();
            let stamp = |t: Option<chrono::DateTime<chrono::Utc>>| {
                t.map(|t| t.to_rfc3339()).unwrap_or_else(|| "never".into())
            };
            println!(
                "📊 {} products, {} posts | generation {} | sheet: {} | posts: {} | uptime {:02}:{:02}:{:02}",
                state.products().len(),
                state.posts().len(),
                state.generation(),
                stamp(state.products_loaded_at()),
                stamp(state.posts_loaded_at()),
                uptime.as_secs() / 3600,
                (uptime.as_secs() % 3600) / 60,
                uptime.as_secs() % 60
            );
        }
        Command::Help => println!("{HELP}"),
        Command::Unknown(text) => {
            println!("🤖 Unknown command {text:?}. Type /help for a list of commands.");
        }
    }
}
