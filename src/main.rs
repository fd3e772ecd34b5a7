mod commands;
mod error;
mod models;
mod services;
mod utils;
mod view;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use commands::entry::Response;
use services::controller::{JournalController, Update};
use services::journal_api::{HttpJournalApi, JournalApi};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    utils::config::load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = utils::config::load_settings()?;
    let api = HttpJournalApi::new(&settings.backend_url)?;
    log::info!("Using journal backend at {}", api.base_url());

    match api.banner().await {
        Ok(message) => log::info!("Backend says: {}", message),
        Err(e) => log::warn!("Backend not reachable yet: {}", e),
    }

    let mut controller = JournalController::new(api, &settings);
    controller.load_entries();
    draw(&controller);
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match commands::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(command)) => match commands::entry::execute(&mut controller, command) {
                        Ok(Response::Quit) => break,
                        Ok(Response::Redraw) => draw(&controller),
                        Ok(Response::Message(message)) => println!("{}", message),
                        Err(e) => println!("⚠ {}", e),
                    },
                    Err(e) => println!("{}", e),
                }
                prompt();
            }
            Some(update) = controller.next_update() => {
                match update {
                    Update::Stale => continue,
                    Update::EntryFetched(id) => match controller.state().find_entry(&id) {
                        Some(entry) => print!("{}", view::render_entry_detail(entry)),
                        None => draw(&controller),
                    },
                    _ => draw(&controller),
                }
                prompt();
            }
        }
    }

    log::info!("Goodbye");
    Ok(())
}

fn draw<A: JournalApi>(controller: &JournalController<A>) {
    println!();
    print!("{}", view::render(controller.state()));
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
