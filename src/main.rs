use paydesk::adapters::{FileSessionStorage, ReqwestHttpClient};
use paydesk::api::ApiGateway;
use paydesk::app::App;
use paydesk::cli::{parse_args, run_cli_command, CliCommand};
use paydesk::config::ClientConfig;
use paydesk::logging::init_logging;
use paydesk::services::Services;
use paydesk::session::SessionContext;
use paydesk::terminal::{setup_panic_hook, TerminalManager};
use paydesk::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Spinner and banner refresh rate.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());

    color_eyre::install()?;

    let runtime = tokio::runtime::Runtime::new()?;

    let mut config = ClientConfig::from_env();
    if let CliCommand::Run {
        api_url: Some(url),
    } = &command
    {
        config = config.with_api_url(url.clone());
    }

    if let Some(result) = runtime.block_on(run_cli_command(&command, &config)) {
        return result;
    }

    if let Err(e) = config.validate() {
        eprintln!("paydesk: {}", e);
        std::process::exit(2);
    }

    init_logging(&config)?;
    info!("Starting paydesk against {}", config.api_url);

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    runtime.block_on(async {
        let http = Arc::new(ReqwestHttpClient::new());
        let gateway = Arc::new(ApiGateway::new(http, config.api_url.clone()));
        let storage = Arc::new(FileSessionStorage::new(&config.data_dir));
        let session = SessionContext::new(storage, gateway.clone());
        session.init().await;

        let mut app = App::new(Services::new(gateway), session);
        app.start();

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;

        if let Err(e) = &result {
            error!("Event loop failed: {}", e);
        }
        info!("paydesk exited");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    // Owned here so select! can borrow it alongside `app`.
    let mut message_rx = app.message_rx.take();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
