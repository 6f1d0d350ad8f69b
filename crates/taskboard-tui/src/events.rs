use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, MouseEvent};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    /// Spawns the input pump. `tick_rate` paces [`Event::Tick`], which
    /// drives the drag timers.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut last_tick = Instant::now();
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(POLL_INTERVAL) => {
                        while event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            let forwarded = match event::read() {
                                Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                                Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                                Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                                Ok(_) => None,
                                Err(e) => {
                                    tracing::warn!("Failed to read terminal event: {}", e);
                                    None
                                }
                            };
                            if let Some(event) = forwarded {
                                if tx.send(event).is_err() {
                                    return;
                                }
                            }
                        }
                        if last_tick.elapsed() >= tick_rate {
                            last_tick = Instant::now();
                            if tx.send(Event::Tick).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self { rx, shutdown_tx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

pub fn should_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}
