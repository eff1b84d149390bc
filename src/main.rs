mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::AppConfig;
use controller::{AppController, SimulatedSubmitter};
use model::AppModel;
use view::{AnimationDriver, AppView, Snapshot};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== devagency-tui starting ===");

    let (config, config_warning) = AppConfig::load_or_default();
    let animation = view::driver_from_config(&config.animation);

    let model = Arc::new(Mutex::new(AppModel::new(&config.carousel)));
    if let Some(warning) = config_warning {
        model.lock().await.set_error(warning).await;
    }

    let submitter = Arc::new(SimulatedSubmitter::new(config.contact.submit_delay));
    let controller = AppController::new(model.clone(), config, submitter);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, &controller, animation.as_ref()).await;

    controller.shutdown().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("devagency-tui shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: &AppController,
    animation: &dyn AnimationDriver,
) -> io::Result<()> {
    loop {
        // Get current state
        let (snapshot, should_quit) = {
            let model_guard = model.lock().await;

            // Auto-clear old errors (after 5 seconds)
            model_guard.auto_clear_old_errors().await;

            let snapshot = Snapshot {
                ui_state: model_guard.get_ui_state().await,
                listings: model_guard.get_listings().await,
                carousel: model_guard.get_carousel().await,
                contact: model_guard.get_contact_form().await,
            };
            (snapshot, model_guard.should_quit().await)
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &snapshot, animation);
        })?;

        // Short poll keeps animations and autoplay visibly smooth
        if event::poll(Duration::from_millis(50))? {
            let handled = match event::read()? {
                Event::Key(key) => controller.handle_key_event(key).await,
                Event::Mouse(mouse) => controller.handle_mouse_event(mouse).await,
                _ => Ok(()),
            };
            if let Err(e) = handled {
                tracing::warn!(error = %e, "Input handling failed");
                model.lock().await.set_error(e.to_string()).await;
            }
        }
    }

    Ok(())
}
