//! Keyboard handling. Runs on its own thread and never drives a tick.

use std::io;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};

use crate::snake::{Direction, SharedDirection};
use crate::TermInt;

/// What the input thread needs the tick loop to know about.
#[derive(Debug)]
pub enum Control {
    Quit,
    Resize(TermInt, TermInt),
    /// Reading the keyboard failed; the input thread is gone.
    Failed(io::Error),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Quit,
}

/// Arrow keys plus the vi keys, and Ctrl+C to quit.
pub fn map_key(ev: &KeyEvent) -> Option<KeyAction> {
    if is_ctrl_c(ev) {
        return Some(KeyAction::Quit);
    }

    match ev.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(KeyAction::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(KeyAction::Turn(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(KeyAction::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(KeyAction::Turn(Direction::Down)),
        _ => None,
    }
}

/// Applies one terminal event. Returns false once the tick loop has gone away.
pub fn handle_event(ev: Event, direction: &SharedDirection, controls: &Sender<Control>) -> bool {
    match ev {
        Event::Key(key) if key.kind != KeyEventKind::Release => match map_key(&key) {
            Some(KeyAction::Turn(dir)) => {
                if direction.request(dir) {
                    debug!("turned {:?}", dir);
                }
                true
            }
            Some(KeyAction::Quit) => controls.send(Control::Quit).is_ok(),
            None => true,
        },
        Event::Resize(columns, rows) => controls.send(Control::Resize(columns, rows)).is_ok(),
        _ => true,
    }
}

/// Starts reading the keyboard in the background.
pub fn spawn(direction: SharedDirection, controls: Sender<Control>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if !handle_event(ev, &direction, &controls) {
                    break;
                }
            }
            Err(e) => {
                warn!("stopped reading input: {}", e);
                let _ = controls.send(Control::Failed(e));
                break;
            }
        }
    })
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev.code, KeyCode::Char('c') | KeyCode::Char('C')) && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_vi_keys() {
        let cases = [
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('h'), Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('l'), Direction::Right),
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('k'), Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Char('j'), Direction::Down),
        ];

        for (code, dir) in cases {
            assert_eq!(map_key(&key(code)), Some(KeyAction::Turn(dir)), "{:?}", code);
        }
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_does_nothing() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), Some(KeyAction::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('w'))), None);
        assert_eq!(map_key(&key(KeyCode::Esc)), None);
        assert_eq!(map_key(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn turns_go_through_the_guard() {
        let (tx, rx) = mpsc::channel();
        let dir = SharedDirection::new(Direction::Right);

        assert!(handle_event(Event::Key(key(KeyCode::Left)), &dir, &tx));
        assert_eq!(dir.get(), Direction::Right);

        assert!(handle_event(Event::Key(key(KeyCode::Char('k'))), &dir, &tx));
        assert_eq!(dir.get(), Direction::Up);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn quit_and_resize_are_forwarded() {
        let (tx, rx) = mpsc::channel();
        let dir = SharedDirection::new(Direction::Right);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_event(Event::Key(ctrl_c), &dir, &tx));
        assert!(handle_event(Event::Resize(100, 40), &dir, &tx));

        assert!(matches!(rx.try_recv(), Ok(Control::Quit)));
        assert!(matches!(rx.try_recv(), Ok(Control::Resize(100, 40))));
        assert_eq!(dir.get(), Direction::Right);
    }

    #[test]
    fn stops_once_receiver_is_gone() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let dir = SharedDirection::new(Direction::Right);

        assert!(!handle_event(Event::Resize(10, 10), &dir, &tx));
        assert!(handle_event(Event::Key(key(KeyCode::Down)), &dir, &tx));
        assert_eq!(dir.get(), Direction::Down);
    }
}
