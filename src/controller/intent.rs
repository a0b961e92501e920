use crate::config::{CharacterSet, Length, Mode};

/// A discrete request from the presentation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ToggleSet(CharacterSet),
    ChangeLength(Length),
    ChangeMode(Mode),
    Regenerate,
    Accept,
}
