use std::{io, sync::mpsc::Receiver, thread::sleep, time::Duration};

use crate::{
    input::{handle_key, read_key, Control, Key},
    screen::{print, print_string_centered, Screen},
    session::{Session, Winner},
};

pub const TICK: Duration = Duration::from_millis(75);
pub const GAME_OVER_HOLD: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    GameOver(Winner),
}

/// Runs a match on `screen`, reading at most one key per tick from `key_rx`.
pub struct GameLoop<'a, S: Screen> {
    screen: &'a mut S,
    session: Session,
    key_rx: Receiver<Key>,
    tick: Duration,
    game_over_hold: Duration,
}

impl<'a, S: Screen> GameLoop<'a, S> {
    pub fn new(screen: &'a mut S, key_rx: Receiver<Key>) -> Self {
        let (width, height) = screen.size();
        log::info!("starting game on a {width}x{height} screen");
        Self {
            screen,
            session: Session::new(width as i32, height as i32),
            key_rx,
            tick: TICK,
            game_over_hold: GAME_OVER_HOLD,
        }
    }

    pub fn with_timing(mut self, tick: Duration, game_over_hold: Duration) -> Self {
        self.tick = tick;
        self.game_over_hold = game_over_hold;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Plays until a key quits the game or the ball leaves the screen. On game over the result
    /// is shown over the last frame and held before returning.
    pub fn run(&mut self) -> io::Result<Outcome> {
        let winner = loop {
            if let Some(winner) = self.session.winner() {
                break winner;
            }
            if let Control::Quit = self.tick()? {
                log::info!("quit by player");
                return Ok(Outcome::Quit);
            }
            sleep(self.tick);
        };
        log::info!("game over, {winner} wins");
        self.draw_game_over(winner)?;
        sleep(self.game_over_hold);
        Ok(Outcome::GameOver(winner))
    }

    /// One iteration without the trailing sleep: input, then update and draw unless paused.
    pub fn tick(&mut self) -> io::Result<Control> {
        let (width, height) = self.screen.size();
        self.session.resize(width as i32, height as i32);
        if let Control::Quit = handle_key(&mut self.session, read_key(&self.key_rx)) {
            return Ok(Control::Quit);
        }
        if !self.session.paused {
            self.session.update();
            self.draw_state()?;
        }
        Ok(Control::Continue)
    }

    fn draw_state(&mut self) -> io::Result<()> {
        self.screen.clear();
        for obj in self.session.objects() {
            print(
                &mut *self.screen,
                obj.row,
                obj.col,
                obj.width,
                obj.height,
                obj.symbol,
            );
        }
        self.screen.show()
    }

    fn draw_game_over(&mut self, winner: Winner) -> io::Result<()> {
        let (width, height) = self.screen.size();
        let (row, col) = (height as i32 / 2, width as i32 / 2);
        print_string_centered(&mut *self.screen, row - 1, col, "Game Over!");
        print_string_centered(&mut *self.screen, row, col, &format!("{winner} win......"));
        self.screen.show()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc::channel, time::Duration};

    use crate::{
        assert_position,
        game_loop::{GameLoop, Outcome},
        game_object::{BALL_SYMBOL, PADDLE_SYMBOL},
        input::{Control, Key},
        screen::test_screen::TestScreen,
        session::Winner,
    };

    const NO_WAIT: Duration = Duration::ZERO;

    #[test]
    fn tick_draws_all_objects() {
        let mut screen = TestScreen::new(80, 24);
        let (_key_tx, key_rx) = channel();
        let mut game = GameLoop::new(&mut screen, key_rx);
        assert_eq!(game.tick().unwrap(), Control::Continue);
        drop(game);
        assert_eq!(screen.frames.len(), 1);
        assert_eq!(screen.cell(13, 41), BALL_SYMBOL);
        for row in 10..14 {
            assert_eq!(screen.cell(row, 0), PADDLE_SYMBOL);
            assert_eq!(screen.cell(row, 79), PADDLE_SYMBOL);
        }
        assert_eq!(screen.cells.iter().filter(|&&c| c != ' ').count(), 9);
    }

    #[test]
    fn quit_stops_immediately() {
        let mut screen = TestScreen::new(80, 24);
        let (key_tx, key_rx) = channel();
        key_tx.send(Key::Quit).unwrap();
        let mut game = GameLoop::new(&mut screen, key_rx).with_timing(NO_WAIT, NO_WAIT);
        assert_eq!(game.run().unwrap(), Outcome::Quit);
        assert_position!(game.session().ball, (12, 40));
        drop(game);
        assert!(screen.frames.is_empty());
    }

    #[test]
    fn one_key_per_tick() {
        let mut screen = TestScreen::new(80, 24);
        let (key_tx, key_rx) = channel();
        key_tx.send(Key::Player1Up).unwrap();
        key_tx.send(Key::Player1Up).unwrap();
        let mut game = GameLoop::new(&mut screen, key_rx);
        game.tick().unwrap();
        assert_eq!(game.session().player1_paddle.row, 9);
        game.tick().unwrap();
        assert_eq!(game.session().player1_paddle.row, 8);
        game.tick().unwrap();
        assert_eq!(game.session().player1_paddle.row, 8);
    }

    #[test]
    fn pause_freezes_positions_and_frames() {
        let mut screen = TestScreen::new(80, 24);
        let (key_tx, key_rx) = channel();
        let mut game = GameLoop::new(&mut screen, key_rx);
        game.tick().unwrap();
        key_tx.send(Key::Pause).unwrap();
        game.tick().unwrap();
        let frozen = game.session().clone();
        assert!(frozen.paused);
        game.tick().unwrap();
        game.tick().unwrap();
        assert_eq!(game.session(), &frozen);
        key_tx.send(Key::Pause).unwrap();
        game.tick().unwrap();
        assert!(!game.session().paused);
        assert_position!(game.session().ball, (frozen.ball.row + 1, frozen.ball.col + 1));
        drop(game);
        // the first tick and the resuming tick.
        assert_eq!(screen.frames.len(), 2);
    }

    #[test]
    fn double_pause_is_a_no_op() {
        let mut screen = TestScreen::new(80, 24);
        let (key_tx, key_rx) = channel();
        key_tx.send(Key::Pause).unwrap();
        key_tx.send(Key::Pause).unwrap();
        let mut game = GameLoop::new(&mut screen, key_rx);
        let start = game.session().clone();
        game.tick().unwrap();
        let mut paused = start.clone();
        paused.paused = true;
        assert_eq!(game.session(), &paused);
        game.tick().unwrap();
        assert!(!game.session().paused);
        // the unpausing tick moves the ball once.
        assert_position!(game.session().ball, (start.ball.row + 1, start.ball.col + 1));
    }

    #[test]
    fn paddles_move_while_paused() {
        let mut screen = TestScreen::new(80, 24);
        let (key_tx, key_rx) = channel();
        key_tx.send(Key::Pause).unwrap();
        key_tx.send(Key::Player2Down).unwrap();
        let mut game = GameLoop::new(&mut screen, key_rx);
        game.tick().unwrap();
        game.tick().unwrap();
        assert_eq!(game.session().player2_paddle.row, 11);
        assert_position!(game.session().ball, (12, 40));
    }

    #[test]
    fn ball_past_right_paddle() {
        let mut screen = TestScreen::new(80, 24);
        let (_key_tx, key_rx) = channel();
        let mut game = GameLoop::new(&mut screen, key_rx).with_timing(NO_WAIT, NO_WAIT);
        game.session.player2_paddle.row = 0;
        game.session.ball.row = 15;
        game.session.ball.col = 77;
        assert_eq!(game.run().unwrap(), Outcome::GameOver(Winner::Player2));
        assert_eq!(game.session().ball.col, 80);
        drop(game);
        // three moves, then the game over message.
        assert_eq!(screen.frames.len(), 4);
        assert_eq!(screen.text_at(11, 35, 10), "Game Over!");
        assert_eq!(screen.text_at(12, 31, 18), "Player 2 win......");
    }

    #[test]
    fn ball_past_left_paddle() {
        let mut screen = TestScreen::new(80, 24);
        let (_key_tx, key_rx) = channel();
        let mut game = GameLoop::new(&mut screen, key_rx).with_timing(NO_WAIT, NO_WAIT);
        game.session.player1_paddle.row = 20;
        game.session.ball.row = 5;
        game.session.ball.col = 2;
        game.session.ball.vel_col = -1;
        assert_eq!(game.run().unwrap(), Outcome::GameOver(Winner::Player1));
        drop(game);
        assert_eq!(screen.text_at(11, 35, 10), "Game Over!");
        assert_eq!(screen.text_at(12, 31, 18), "Player 1 win......");
    }

    #[test]
    fn resize_is_picked_up_each_tick() {
        let mut screen = TestScreen::new(80, 24);
        let (_key_tx, key_rx) = channel();
        let mut game = GameLoop::new(&mut screen, key_rx);
        game.screen.width = 42;
        game.tick().unwrap();
        assert_eq!(game.session().screen_width, 42);
        assert_eq!(game.session().winner(), None);
        game.screen.width = 41;
        game.tick().unwrap();
        assert_eq!(game.session().winner(), Some(Winner::Player2));
    }
}
