pub const PADDLE_HEIGHT: i32 = 4;
pub const PADDLE_WIDTH: i32 = 1;
pub const PADDLE_SYMBOL: char = '\u{2588}';
pub const BALL_SYMBOL: char = '\u{25CF}';
pub const INITIAL_BALL_VELOCITY_ROW: i32 = 1;
pub const INITIAL_BALL_VELOCITY_COL: i32 = 1;

/// A rectangle on the screen that moves by a fixed velocity each tick.
#[derive(Clone, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct GameObject {
    pub row: i32,
    pub col: i32,
    pub width: i32,
    pub height: i32,
    pub vel_row: i32,
    pub vel_col: i32,
    pub symbol: char,
}

impl GameObject {
    pub fn paddle(row: i32, col: i32) -> Self {
        Self {
            row,
            col,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            vel_row: 0,
            vel_col: 0,
            symbol: PADDLE_SYMBOL,
        }
    }

    pub fn ball(row: i32, col: i32) -> Self {
        Self {
            row,
            col,
            width: 1,
            height: 1,
            vel_row: INITIAL_BALL_VELOCITY_ROW,
            vel_col: INITIAL_BALL_VELOCITY_COL,
            symbol: BALL_SYMBOL,
        }
    }
}

/// Row that vertically centres a paddle on a screen of the given height.
pub fn paddle_start_row(screen_height: i32) -> i32 {
    screen_height / 2 - PADDLE_HEIGHT / 2
}
