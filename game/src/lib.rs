pub mod game_loop;
pub mod game_object;
pub mod input;
pub mod physics;
pub mod screen;
pub mod session;

#[cfg(test)]
#[macro_export]
macro_rules! assert_position {
    ($obj:expr, $expected:expr $(,)?) => {
        assert_eq!(($obj.row, $obj.col), $expected)
    };
}
