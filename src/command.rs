use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An abstract player intent, independent of which key produced it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Turn(Direction),
    Pause,
    Start,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => {
                Some(Command::Turn(Direction::Up))
            }
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                Some(Command::Turn(Direction::Down))
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                Some(Command::Turn(Direction::Left))
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                Some(Command::Turn(Direction::Right))
            }
            (KeyModifiers::NONE, KeyCode::Char('p' | ' ') | KeyCode::Esc) => Some(Command::Pause),
            (_, KeyCode::Enter) => Some(Command::Start),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Char('k'), KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Char('s'), KeyModifiers::NONE, Some(Command::Turn(Direction::Down)))]
    #[case(KeyCode::Char('h'), KeyModifiers::NONE, Some(Command::Turn(Direction::Left)))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Command::Turn(Direction::Right)))]
    #[case(KeyCode::Char('p'), KeyModifiers::NONE, Some(Command::Pause))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Command::Pause))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::Pause))]
    #[case(KeyCode::Enter, KeyModifiers::NONE, Some(Command::Start))]
    #[case(KeyCode::Enter, KeyModifiers::SHIFT, Some(Command::Start))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('w'), KeyModifiers::CONTROL, None)]
    #[case(KeyCode::Tab, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }
}
