use std::{
    io,
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread::{Builder, JoinHandle},
    time::Duration,
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game::input::Key;

/// How long to wait for a terminal event before checking whether to stop.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Starts a thread that forwards game keys to `key_tx`. It stops once `done_rx` receives or
/// disconnects, or once nobody is listening on `key_tx`.
pub fn spawn(key_tx: Sender<Key>, done_rx: Receiver<()>) -> io::Result<JoinHandle<()>> {
    Builder::new()
        .name("key_listener".to_owned())
        .spawn(move || listen(key_tx, done_rx))
}

fn listen(key_tx: Sender<Key>, done_rx: Receiver<()>) {
    log::debug!("key listener started");
    loop {
        if let Ok(_) | Err(TryRecvError::Disconnected) = done_rx.try_recv() {
            break;
        }
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                log::error!("failed to poll terminal events: {err}");
                break;
            }
        }
        let key_event = match event::read() {
            Ok(Event::Key(key_event)) => key_event,
            Ok(_) => continue,
            Err(err) => {
                log::error!("failed to read terminal event: {err}");
                break;
            }
        };
        if let Some(key) = map_key_event(key_event) {
            log::trace!("key pressed: {key:?}");
            if key_tx.send(key).is_err() {
                break;
            }
        }
    }
    log::debug!("key listener stopped");
}

/// Maps a terminal key press onto a game key. Releases, repeats and unbound keys map to `None`.
pub fn map_key_event(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    if key_event.modifiers == KeyModifiers::CONTROL && key_event.code == KeyCode::Char('c') {
        return Some(Key::Quit);
    }
    if key_event.modifiers != KeyModifiers::NONE {
        return None;
    }
    match key_event.code {
        KeyCode::Char('q') => Some(Key::Quit),
        KeyCode::Char('w') => Some(Key::Player1Up),
        KeyCode::Char('s') => Some(Key::Player1Down),
        KeyCode::Up => Some(Key::Player2Up),
        KeyCode::Down => Some(Key::Player2Down),
        KeyCode::Char('p') => Some(Key::Pause),
        _ => None,
    }
}
