use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::location::SimulatedGps;
use crate::state::{AppIntent, AppStore};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Everything the UI needs injected at startup.
pub struct Runtime {
    pub store: Arc<AppStore>,
    pub catalog: Arc<Catalog>,
    pub config: Config,
    pub gps: SimulatedGps,
    /// Initial reachability, from the launch environment.
    pub start_offline: bool,
}

/// Run the UI loop until quit. Blocks the calling thread; async collaborators
/// run on their own tokio runtime and feed completions back through the
/// event channel.
pub fn run(runtime: Runtime) -> std::io::Result<()> {
    let tokio_runtime = tokio::runtime::Runtime::new()?;
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(runtime.config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(
        Arc::clone(&runtime.store),
        runtime.catalog,
        runtime.config,
        events.sender(),
        tokio_runtime.handle().clone(),
        runtime.gps,
    );

    if runtime.start_offline {
        runtime.store.dispatch(AppIntent::SetOffline(true));
    }
    // One automatic fix attempt per launch, matching the mobile app's
    // on-mount behavior. No-op until onboarding is complete.
    app.request_startup_location();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Resize) => {
                terminal.autoresize()?;
            }
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
