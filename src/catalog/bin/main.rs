use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};
use bookshelf::catalog::controller::dispatch;
use bookshelf::catalog::factory::create_catalog_service_with;
use bookshelf::catalog::view::render;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::core::library::LibraryError;
use bookshelf::core::repository::RepositoryStore;
use bookshelf::gateway::memory::publisher::MemoryPublisher;
use bookshelf::items::factory::create_item_repository;
use bookshelf::utils::kv::setup_tracing;

// Reads one JSON action per line from stdin and answers on stdout. Whenever an action
// changed the catalog, a fresh view snapshot follows the response.

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    setup_tracing();

    let config = Configuration::session(DEV_MODE);
    let store = RepositoryStore::File;

    let publisher = MemoryPublisher::new();
    let catalog = create_catalog_service_with(&config, create_item_repository(&config, store),
                                              Box::new(publisher.clone()))?;
    let mut state = AppState::new(catalog);
    info!(path = %config.store_path.display(), items = state.catalog.items().len(), "catalog ready");

    let mut stdout = tokio::io::stdout();
    write_line(&mut stdout, &json!({"view": render(state.catalog.items())})).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<Value>(line.as_str()) {
            Ok(request) => match dispatch(&mut state, request) {
                Ok(res) => json!({"ok": true, "response": res}),
                Err((status, message)) => {
                    warn!(status = %status, message = message.as_str(), "action failed");
                    json!({"ok": false, "status": status, "message": message})
                }
            },
            Err(err) => json!({"ok": false, "status": "bad_request", "message": err.to_string()}),
        };
        write_line(&mut stdout, &response).await?;

        match publisher.drain() {
            Ok(events) if !events.is_empty() => {
                write_line(&mut stdout, &json!({"view": render(state.catalog.items())})).await?;
            }
            Ok(_) => {}
            Err(err) => error!("failed to drain events {}", err),
        }
    }
    Ok(())
}

async fn write_line(stdout: &mut tokio::io::Stdout, value: &Value) -> Result<(), LibraryError> {
    let mut line = serde_json::to_string(value)?;
    line.push('\n');
    stdout.write_all(line.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
