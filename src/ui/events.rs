use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::auth::AuthError;
use crate::state::{Screen, UserProfile};

/// Events feeding the UI loop: terminal input, the tick, and the completion
/// callbacks of the app's few asynchronous collaborators. Each async
/// completion performs its state transition(s) in the loop, never in the
/// task that produced it.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
    /// Edge-triggered reachability signal ("became reachable" / "became
    /// unreachable").
    Connectivity { online: bool },
    /// A geolocation attempt settled; the permission/location transitions
    /// are already applied.
    LocationSettled,
    /// The mock auth flow finished.
    AuthComplete(Result<UserProfile, AuthError>),
    /// A mock form submission finished. Tagged with the originating screen
    /// so a completion that outlives its screen is discarded.
    SubmitComplete { screen: Screen, reference: String },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread: polls the terminal, forwards key presses and
    /// resizes, and emits a tick at `tick_rate`. The thread exits when the
    /// receiver is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(_, _)) => {
                            if event_tx.send(AppEvent::Resize).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!("terminal event read failed: {err}");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("terminal event poll failed: {err}");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Cloneable sender for async tasks to post their completions.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
