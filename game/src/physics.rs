use crate::game_object::GameObject;

pub fn advance(obj: &mut GameObject) {
    obj.row += obj.vel_row;
    obj.col += obj.vel_col;
}

/// Whether the object's next vertical step would leave `[0, screen_height)`.
pub fn collides_with_wall(obj: &GameObject, screen_height: i32) -> bool {
    let next_row = obj.row + obj.vel_row;
    !(next_row >= 0 && next_row < screen_height)
}

/// Whether the ball's next horizontal step reaches the paddle's column while the ball is within
/// the paddle's rows. The row range is exclusive at the bottom.
pub fn collides_with_paddle(ball: &GameObject, paddle: &GameObject) -> bool {
    let next_col = ball.col + ball.vel_col;
    let collides_col = if ball.col < paddle.col {
        // approaching from the left.
        next_col >= paddle.col
    } else {
        // approaching from the right.
        next_col <= paddle.col
    };
    collides_col && ball.row >= paddle.row && ball.row < paddle.row + paddle.height
}
