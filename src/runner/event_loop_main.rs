use std::path::PathBuf;
use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;

use crate::api::DemoApi;
use crate::app::settings::Settings;
use crate::app::App;
use crate::input::{input_stream, is_press, InputEvent};
use crate::runner::demo_runner::Completion;
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, reset_raw_terminal, restore_terminal, Tui};
use crate::ui;

/// Run the terminal UI until the user quits.
///
/// `settings_path` is where a theme toggle gets written back to.
pub async fn run_app(
    settings: Settings,
    api: Arc<dyn DemoApi>,
    route: &str,
    settings_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    ui::apply_theme(&settings);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(settings, api, tx, route);
    app.settings_path = settings_path;

    // Leave raw mode before the default hook prints, or the message is lost.
    let prev = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        reset_raw_terminal();
        prev(info);
    }));

    let mut terminal = init_terminal()?;
    info!(route = %app.route, "terminal UI started");
    let result = event_loop(&mut terminal, &mut app, &mut rx).await;

    // Restore terminal state before exiting, even when the loop failed.
    restore_terminal(terminal)?;
    info!("terminal UI stopped");
    result
}

async fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut UnboundedReceiver<Completion>,
) -> anyhow::Result<()> {
    let mut events = input_stream();

    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Precompute page size for navigation handlers.
        let page_size = (terminal.size()?.height as usize).saturating_sub(6);

        tokio::select! {
            ev = events.next() => match ev {
                Some(InputEvent::Key(key)) if is_press(&key) => {
                    if handlers::handle_key(app, key, page_size)? {
                        break;
                    }
                }
                Some(_) => { /* resize and others: redraw on next loop */ }
                None => break,
            },
            Some(completion) = rx.recv() => {
                app.apply_completion(completion);
            }
        }
    }
    Ok(())
}
