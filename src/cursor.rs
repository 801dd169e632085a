//! ANSI cursor movement and erase sequences.
//!
//! Counts are encoded by repeating the single step sequence, so moving up
//! three lines is `ESC[A` three times rather than `ESC[3A`.

pub const UP: &str = "\x1b[A";
pub const DOWN: &str = "\x1b[B";
pub const FORWARD: &str = "\x1b[C";
pub const BACK: &str = "\x1b[D";
pub const ERASE_LINE: &str = "\x1b[2K";
pub const ERASE_SCREEN: &str = "\x1b[2J\x1b[1;1H";

pub fn up(n: i32) -> String {
    UP.repeat(steps(n))
}

pub fn down(n: i32) -> String {
    DOWN.repeat(steps(n))
}

pub fn forward(n: i32) -> String {
    FORWARD.repeat(steps(n))
}

pub fn back(n: i32) -> String {
    BACK.repeat(steps(n))
}

/// Absolute positioning, 1-based row and column.
pub fn move_to(row: u32, col: u32) -> String {
    format!("\x1b[{row};{col}H")
}

fn steps(n: i32) -> usize {
    n.max(1) as usize
}

#[cfg(test)]
mod tests {
    use super::{back, down, forward, move_to, up};

    #[test]
    fn counts_encode_as_repetition() {
        assert_eq!("\x1b[A\x1b[A\x1b[A", up(3));
        assert_eq!("\x1b[B\x1b[B", down(2));
        assert_eq!("\x1b[C", forward(1));
        assert_eq!("\x1b[D", back(1));
    }

    #[test]
    fn counts_clamp_to_one() {
        assert_eq!("\x1b[A", up(0));
        assert_eq!("\x1b[A", up(-5));
    }

    #[test]
    fn absolute_position() {
        assert_eq!("\x1b[4;10H", move_to(4, 10));
    }
}
