use std::fmt::Display;

use crate::{
    game_object::{paddle_start_row, GameObject},
    physics::{advance, collides_with_paddle, collides_with_wall},
};

/// The side that won. Note the ball leaving through the left edge names player 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Player1,
    Player2,
}

impl Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player1 => Display::fmt("Player 1", f),
            Winner::Player2 => Display::fmt("Player 2", f),
        }
    }
}

/// All mutable state of one match.
#[derive(Clone, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Session {
    pub screen_width: i32,
    pub screen_height: i32,
    pub player1_paddle: GameObject,
    pub player2_paddle: GameObject,
    pub ball: GameObject,
    pub paused: bool,
}

impl Session {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let paddle_start = paddle_start_row(screen_height);
        Self {
            screen_width,
            screen_height,
            player1_paddle: GameObject::paddle(paddle_start, 0),
            player2_paddle: GameObject::paddle(paddle_start, screen_width - 1),
            ball: GameObject::ball(screen_height / 2, screen_width / 2),
            paused: false,
        }
    }

    /// Bounds checks use the new size from here on. Objects keep their positions.
    pub fn resize(&mut self, screen_width: i32, screen_height: i32) {
        if (screen_width, screen_height) != (self.screen_width, self.screen_height) {
            log::debug!(
                "screen resized from {}x{} to {screen_width}x{screen_height}",
                self.screen_width,
                self.screen_height
            );
            self.screen_width = screen_width;
            self.screen_height = screen_height;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("game {}", if self.paused { "paused" } else { "resumed" });
    }

    /// Paddles first, then the ball.
    pub fn objects(&self) -> [&GameObject; 3] {
        [&self.player1_paddle, &self.player2_paddle, &self.ball]
    }

    pub fn objects_mut(&mut self) -> [&mut GameObject; 3] {
        [
            &mut self.player1_paddle,
            &mut self.player2_paddle,
            &mut self.ball,
        ]
    }

    /// Moves every object one step, then reflects the ball for the next step. Collisions are
    /// checked against the already-moved ball, so a reflection shows one tick after contact.
    pub fn update(&mut self) {
        for obj in self.objects_mut() {
            advance(obj);
        }
        if collides_with_wall(&self.ball, self.screen_height) {
            self.ball.vel_row = -self.ball.vel_row;
        }
        if collides_with_paddle(&self.ball, &self.player1_paddle)
            || collides_with_paddle(&self.ball, &self.player2_paddle)
        {
            log::debug!("ball bounced off paddle at ({}, {})", self.ball.row, self.ball.col);
            self.ball.vel_col = -self.ball.vel_col;
        }
    }

    pub fn winner(&self) -> Option<Winner> {
        if self.ball.col < 0 {
            Some(Winner::Player1)
        } else if self.ball.col >= self.screen_width {
            Some(Winner::Player2)
        } else {
            None
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }
}
