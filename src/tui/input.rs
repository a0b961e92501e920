use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use passgen::Intent;
use passgen::config::{CharacterSet, GenerationConfig, Length, Mode};

/// What a key press asks the shell to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Intent(Intent),
    Quit,
    Ignore,
}

/// Map a key press to an action given the configuration on screen.
pub fn action(key: KeyEvent, config: &GenerationConfig) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter => Action::Intent(Intent::Accept),
        KeyCode::Char('r') | KeyCode::Char(' ') => Action::Intent(Intent::Regenerate),
        KeyCode::Char('m') => {
            let mode = match config.mode {
                Mode::Characters => Mode::Words,
                Mode::Words => Mode::Characters,
            };
            Action::Intent(Intent::ChangeMode(mode))
        }
        KeyCode::Char('c') => Action::Intent(Intent::ChangeMode(Mode::Characters)),
        KeyCode::Char('w') => Action::Intent(Intent::ChangeMode(Mode::Words)),
        KeyCode::Left | KeyCode::Right if config.mode == Mode::Characters => {
            let current = i64::from(config.random_characters.length.get());
            let next = if key.code == KeyCode::Left {
                current - 1
            } else {
                current + 1
            };
            // The slider stops at its bounds.
            match Length::new(next) {
                Ok(length) => Action::Intent(Intent::ChangeLength(length)),
                Err(_) => Action::Ignore,
            }
        }
        KeyCode::Char(c @ '1'..='6') if config.mode == Mode::Characters => {
            let index = c as usize - '1' as usize;
            Action::Intent(Intent::ToggleSet(CharacterSet::ALL[index]))
        }
        _ => Action::Ignore,
    }
}
