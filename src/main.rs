// src/main.rs
use clap::{Arg, Command};
use env_logger::Env;
use okashi::console::StdUtils;
use okashi::{
    BrowserSurface, DetailLauncher, HostView, ListPresenter, ResultStore, RunOutcome,
    SearchClient, SearchConfig, SearchPipeline,
};
use std::process::{self, Command as ProcessCommand};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = "Ghost";

type Launcher = DetailLauncher<SystemBrowser>;

struct TerminalView {
    presenter: ListPresenter,
}

impl HostView for TerminalView {
    fn notify_data_changed(&self) {
        let rows = self.presenter.rows();
        println!();
        StdUtils::stdout(&format!("{} snacks found", rows.len()));
        StdUtils::print_rows(&rows);
    }
}

struct SystemBrowser {
    print_only: bool,
}

impl SystemBrowser {
    fn opener(uri: &str) -> ProcessCommand {
        match std::env::consts::OS {
            "macos" => {
                let mut cmd = ProcessCommand::new("open");
                cmd.arg(uri);
                cmd
            }
            "windows" => {
                let mut cmd = ProcessCommand::new("cmd");
                cmd.args(["/C", "start", "", uri]);
                cmd
            }
            _ => {
                let mut cmd = ProcessCommand::new("xdg-open");
                cmd.arg(uri);
                cmd
            }
        }
    }
}

impl BrowserSurface for SystemBrowser {
    fn open_external_link(&self, uri: &Url) {
        if self.print_only {
            StdUtils::stdout(&format!("Link: {}", uri));
            return;
        }

        match Self::opener(uri.as_str()).spawn() {
            Ok(_) => StdUtils::stdout(&format!("Opened {}", uri)),
            Err(e) => StdUtils::stderr(&format!("Failed to open {}: {}", uri, e)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum HostInput {
    Search(String),
    Select(usize),
    Quit,
    Empty,
}

fn parse_input(line: &str) -> HostInput {
    let line = line.trim();
    match line {
        "" => HostInput::Empty,
        "q" | "quit" | "exit" => HostInput::Quit,
        _ => match line.parse::<usize>() {
            Ok(index) => HostInput::Select(index),
            Err(_) => HostInput::Search(line.to_string()),
        },
    }
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let env = if matches.get_flag("debug") {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let config = build_config(&matches);
    let store = Arc::new(ResultStore::new());
    let view = Arc::new(TerminalView {
        presenter: ListPresenter::new(Arc::clone(&store)),
    });
    let pipeline = Arc::new(SearchPipeline::new(
        SearchClient::new(&config),
        &config,
        Arc::clone(&store),
        view,
    ));
    let launcher = DetailLauncher::new(
        Arc::clone(&store),
        SystemBrowser {
            print_only: matches.get_flag("no-browser"),
        },
    );

    if let Some(keyword) = matches.get_one::<String>("keyword") {
        let open = matches.get_one::<usize>("open").copied();
        handle_single_search(keyword, open, &pipeline, &launcher).await;
    } else {
        handle_interactive(&pipeline, &launcher).await;
    }
}

fn build_cli() -> Command {
    Command::new("okashi")
        .version(VERSION)
        .author(AUTHOR)
        .about("Snack catalog search")
        .arg(
            Arg::new("keyword")
                .short('k')
                .long("keyword")
                .value_name("TEXT")
                .help("Search once for TEXT and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("open")
                .short('O')
                .long("open")
                .value_name("INDEX")
                .help("Open the detail link of row INDEX after the search")
                .requires("keyword")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("endpoint")
                .short('e')
                .long("endpoint")
                .value_name("URL")
                .help("Catalog API endpoint")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .value_name("KEY")
                .help("Catalog API key")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("no-browser")
                .long("no-browser")
                .help("Print detail links instead of opening a browser")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Verbose logging (RUST_LOG takes precedence)")
                .action(clap::ArgAction::SetTrue),
        )
}

fn build_config(matches: &clap::ArgMatches) -> SearchConfig {
    let mut config = SearchConfig::new().with_user_agent("okashi", VERSION);

    if let Some(endpoint) = matches.get_one::<String>("endpoint") {
        config = config.with_endpoint(endpoint);
    }
    if let Some(api_key) = matches.get_one::<String>("api-key") {
        config = config.with_api_key(api_key);
    }

    config
}

fn select_row(index: usize, launcher: &Launcher, store: &ResultStore) {
    let count = store.count();
    if index >= count {
        StdUtils::stderr(&format!("No row {} ({} snacks listed)", index, count));
        return;
    }

    if let Err(e) = launcher.on_row_selected(index) {
        log::error!("row selection out of sync with store: {}", e);
    }
}

async fn handle_single_search(
    keyword: &str,
    open: Option<usize>,
    pipeline: &SearchPipeline<SearchClient>,
    launcher: &Launcher,
) {
    StdUtils::stdout(&format!("Searching snacks for {:?}", keyword));

    match pipeline.run(keyword).await {
        RunOutcome::Updated { .. } => {
            if let Some(index) = open {
                select_row(index, launcher, pipeline.store());
            }
        }
        RunOutcome::Failed(e) => {
            StdUtils::stderr(&format!("Search failed: {}", e));
            process::exit(1);
        }
        RunOutcome::Discarded => {}
    }
}

async fn handle_interactive(pipeline: &Arc<SearchPipeline<SearchClient>>, launcher: &Launcher) {
    StdUtils::stdout("Type a snack name to search, a row number to open it, q to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        StdUtils::prompt("keyword or row");

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                StdUtils::stderr(&format!("Failed to read input: {}", e));
                break;
            }
        };

        match parse_input(&line) {
            HostInput::Quit => break,
            HostInput::Empty => continue,
            HostInput::Select(index) => select_row(index, launcher, pipeline.store()),
            HostInput::Search(keyword) => {
                // Results are drawn by TerminalView when the run lands.
                pipeline.on_search_submitted(keyword);
            }
        }
    }
}
