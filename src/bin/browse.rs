// src/bin/browse.rs
//
// Terminal front end for the catalog API.

use product_discovery::infra::config;
use product_discovery::infra::logging::init_tracing;
use product_discovery::ui::state::{CATEGORIES, EXAMPLE_QUERIES};
use product_discovery::ui::{render, CatalogBrowser, HttpCatalogApi};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const HELP: &str = "\
Commands:
  ask <text>         ask the AI for matching products
  category <name>    browse one category (no name = all)
  all                show all products
  dismiss            close the error banner
  examples           show example questions
  help               show this help
  quit               exit
Anything else is sent as a question.";

enum Command<'a> {
    Ask(&'a str),
    Category(&'a str),
    All,
    Dismiss,
    Examples,
    Help,
    Quit,
    Nothing,
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((h, r)) => (h, r.trim()),
        None => (line, ""),
    };
    match head.to_lowercase().as_str() {
        "" => Command::Nothing,
        "ask" => Command::Ask(rest),
        "category" | "cat" => Command::Category(rest),
        "all" => Command::All,
        "dismiss" => Command::Dismiss,
        "examples" => Command::Examples,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Ask(line),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing("warn");

    let base_url = config::api_base_url();
    let mut ui = CatalogBrowser::new(HttpCatalogApi::new(base_url.clone()));
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("Connected to {}. Type `help` for commands.\n\n", base_url).as_bytes())
        .await?;
    ui.load_products("").await;
    stdout.write_all(render(ui.state()).as_bytes()).await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Command::Nothing => continue,
            Command::Quit => break,
            Command::Help => {
                stdout.write_all(format!("{}\n", HELP).as_bytes()).await?;
                continue;
            }
            Command::Examples => {
                let mut text = String::from("Try:\n");
                for example in EXAMPLE_QUERIES {
                    text.push_str(&format!("  ask {}\n", example));
                }
                stdout.write_all(text.as_bytes()).await?;
                continue;
            }
            Command::Ask(text) => {
                if !ui.ask(text).await {
                    stdout.write_all(b"Type a question after `ask`.\n").await?;
                    continue;
                }
            }
            Command::Category(name) => {
                let known = CATEGORIES.iter().find(|c| c.eq_ignore_ascii_case(name));
                ui.select_category(known.copied().unwrap_or(name)).await;
            }
            Command::All => ui.show_all().await,
            Command::Dismiss => ui.dismiss_error(),
        }

        stdout.write_all(render(ui.state()).as_bytes()).await?;
    }

    Ok(())
}
