/// The closed set of viewport intents the input layer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
}

/// Maps a literal key to a command; unrecognized keys are a silent no-op.
///
/// The bindings are the viewer's original surface: `+`/`-` zoom, `wasd` pan.
#[must_use]
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "+" => Some(Command::ZoomIn),
        "-" => Some(Command::ZoomOut),
        "w" => Some(Command::PanUp),
        "s" => Some(Command::PanDown),
        "a" => Some(Command::PanLeft),
        "d" => Some(Command::PanRight),
        _ => None,
    }
}
