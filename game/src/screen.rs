use std::io;

/// A grid of character cells that is drawn into and then shown all at once.
pub trait Screen {
    /// Visible size as `(columns, rows)`.
    fn size(&self) -> (u16, u16);

    fn set_cell(&mut self, row: u16, col: u16, symbol: char);

    /// Blanks every cell. Nothing is visible until the next `show`.
    fn clear(&mut self);

    fn show(&mut self) -> io::Result<()>;
}

/// Fills a rectangle with `symbol`, skipping cells that fall outside the screen.
pub fn print<S: Screen + ?Sized>(
    screen: &mut S,
    row: i32,
    col: i32,
    width: i32,
    height: i32,
    symbol: char,
) {
    for r in row..row + height {
        for c in col..col + width {
            set_cell_clipped(screen, r, c, symbol);
        }
    }
}

pub fn print_string<S: Screen + ?Sized>(screen: &mut S, row: i32, col: i32, text: &str) {
    for (c, symbol) in (col..).zip(text.chars()) {
        set_cell_clipped(screen, row, c, symbol);
    }
}

/// Prints `text` so that it is centred on `col`.
pub fn print_string_centered<S: Screen + ?Sized>(screen: &mut S, row: i32, col: i32, text: &str) {
    let col = col - text.chars().count() as i32 / 2;
    print_string(screen, row, col, text);
}

fn set_cell_clipped<S: Screen + ?Sized>(screen: &mut S, row: i32, col: i32, symbol: char) {
    let (width, height) = screen.size();
    match (u16::try_from(row), u16::try_from(col)) {
        (Ok(row), Ok(col)) if row < height && col < width => screen.set_cell(row, col, symbol),
        _ => {}
    }
}
