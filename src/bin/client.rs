use movielist::{
    client::{
        HttpMovieApi, ViewState,
        command::{Command, HELP},
        view,
    },
    config::ClientConfig,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,movielist=info".to_string()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let http = reqwest::Client::builder().user_agent("movielist/0.1").build()?;
    let api = HttpMovieApi::new(http, config.api_url.clone());
    tracing::info!(api = %config.api_url, "connecting");

    let mut state = ViewState::new();
    state.load(&api).await;
    println!("{}", view::render(&state));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match Command::parse(&line) {
            Ok(cmd) => cmd,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match cmd {
            Command::Add(title) => {
                state.new_title = title;
                state.add(&api).await;
            }
            Command::Search(query) => {
                state.query = query;
                state.search();
            }
            Command::Filter(filter) => state.set_filter(filter),
            Command::Toggle(id) => state.toggle(&api, id).await,
            Command::Delete(id) => state.delete(&api, id).await,
            Command::Show(id) => {
                if !state.select(id) {
                    println!("no movie {id} in the current list");
                    continue;
                }
            }
            Command::Close => state.deselect(),
            Command::Reload => state.load(&api).await,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }

        println!("{}", view::render(&state));
    }

    Ok(())
}
