/// Key-down events as the controller sees them, decoupled from the terminal
/// backend so the controller can be driven directly in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    Left,
    Right,
    Delete,
    Esc,
    Other,
}
