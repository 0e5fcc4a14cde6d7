use std::sync::mpsc::{Receiver, TryRecvError};

use crate::{game_object::GameObject, session::Session};

/// Keys the game reacts to. Terminal adapters map their own key events onto these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Quit,
    Player1Up,
    Player1Down,
    Player2Up,
    Player2Down,
    Pause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Takes the next pending key without waiting. A disconnected channel reads as no key.
pub fn read_key(key_rx: &Receiver<Key>) -> Option<Key> {
    match key_rx.try_recv() {
        Ok(key) => Some(key),
        Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
    }
}

/// Applies a key to the session. Paddle moves that would leave the screen are ignored.
pub fn handle_key(session: &mut Session, key: Option<Key>) -> Control {
    let screen_height = session.screen_height;
    match key {
        Some(Key::Quit) => return Control::Quit,
        Some(Key::Player1Up) => move_up(&mut session.player1_paddle),
        Some(Key::Player1Down) => move_down(&mut session.player1_paddle, screen_height),
        Some(Key::Player2Up) => move_up(&mut session.player2_paddle),
        Some(Key::Player2Down) => move_down(&mut session.player2_paddle, screen_height),
        Some(Key::Pause) => session.toggle_pause(),
        None => {}
    }
    Control::Continue
}

fn move_up(paddle: &mut GameObject) {
    if paddle.row > 0 {
        paddle.row -= 1;
    }
}

fn move_down(paddle: &mut GameObject, screen_height: i32) {
    if paddle.row + paddle.height < screen_height {
        paddle.row += 1;
    }
}
