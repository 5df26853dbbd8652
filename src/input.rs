//! Keyboard mapping, independent of the UI toolkit.
//!
//! The UI translates its key events into [`Key`] and [`Modifiers`] and runs
//! whatever [`Command`] comes back. Unmapped keys yield `None` so the toolkit
//! can keep propagating them.

use crate::state::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Backspace,
    Delete,
    Home,
    End,
    Return,
    Escape,
    F5,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Direction),
    First,
    Last,
    /// Show the folder picker. Without `force` the picker is only offered
    /// while no folder is open.
    OpenFolder { force: bool },
    Reload,
    Quit,
}

pub fn command_for_key(key: Key, modifiers: Modifiers) -> Option<Command> {
    match key {
        Key::Left | Key::Up | Key::Backspace | Key::Delete => {
            Some(Command::Navigate(Direction::Previous))
        }
        Key::Right | Key::Down | Key::Space => Some(Command::Navigate(Direction::Next)),
        Key::Home => Some(Command::First),
        Key::End => Some(Command::Last),
        Key::Return => Some(Command::OpenFolder {
            force: modifiers.control || modifiers.meta,
        }),
        Key::F5 => Some(Command::Reload),
        Key::Escape => Some(Command::Quit),
        Key::Other => None,
    }
}

/// Whether an `OpenFolder` command should show the picker. An unforced open
/// is ignored once a folder is selected, leaving the key unhandled.
pub fn opens_picker(force: bool, has_folder: bool) -> bool {
    force || !has_folder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(key: Key) -> Option<Command> {
        command_for_key(key, Modifiers::default())
    }

    #[test]
    fn previous_keys() {
        for key in [Key::Left, Key::Up, Key::Backspace, Key::Delete] {
            assert_eq!(plain(key), Some(Command::Navigate(Direction::Previous)));
        }
    }

    #[test]
    fn next_keys() {
        for key in [Key::Right, Key::Down, Key::Space] {
            assert_eq!(plain(key), Some(Command::Navigate(Direction::Next)));
        }
    }

    #[test]
    fn return_forces_only_with_modifier() {
        assert_eq!(plain(Key::Return), Some(Command::OpenFolder { force: false }));

        let control = Modifiers { control: true, meta: false };
        let meta = Modifiers { control: false, meta: true };
        assert_eq!(
            command_for_key(Key::Return, control),
            Some(Command::OpenFolder { force: true })
        );
        assert_eq!(
            command_for_key(Key::Return, meta),
            Some(Command::OpenFolder { force: true })
        );
    }

    #[test]
    fn unforced_open_is_ignored_once_a_folder_is_open() {
        assert!(opens_picker(false, false));
        assert!(!opens_picker(false, true));
        assert!(opens_picker(true, true));
        assert!(opens_picker(true, false));
    }

    #[test]
    fn other_commands() {
        assert_eq!(plain(Key::Home), Some(Command::First));
        assert_eq!(plain(Key::End), Some(Command::Last));
        assert_eq!(plain(Key::F5), Some(Command::Reload));
        assert_eq!(plain(Key::Escape), Some(Command::Quit));
    }

    #[test]
    fn unknown_key_is_not_handled() {
        assert_eq!(plain(Key::Other), None);
    }
}
