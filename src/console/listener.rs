// console/listener.rs

use crate::console::command_handler::{handle_command, parse_command, Command};
use crate::console::Console;
use crate::debounce::Debouncer;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Reads stdin line by line. Search input goes through the debouncers so a burst
/// of keystrokes only runs the last query; everything else is handled at once.
pub async fn listen_for_commands(console: Arc<Console>) {
    let c = console.clone();
    let mut search = Debouncer::new(console.config.search_debounce(), move |q: String| {
        let c = c.clone();
        async move { c.show_suggestions(&q).await }
    });
    let c = console.clone();
    let mut blog_search = Debouncer::new(console.config.blog_debounce(), move |q: String| {
        let c = c.clone();
        async move { c.show_blog_search(&q).await }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match parse_command(&line) {
                Command::Search(query) => search.call(query),
                Command::Blog(query) => blog_search.call(query),
                command => handle_command(command, &console).await,
            },
            Ok(None) => {
                info!("stdin closed, console listener stopping.");
                break;
            }
            Err(e) => {
                warn!("stdin read error: {:?}", e);
                break;
            }
        }
    }
}
