//! Host-agnostic key bindings.
//!
//! The host translates its native key events into [`Key`] and passes them to
//! [`Engine::handle_key`](crate::engine::Engine::handle_key). Keys that change
//! core state (mode, animation, clear) are applied by the engine; window-level
//! keys come back as a [`HostAction`] for the host to carry out.

use crate::scene::DrawMode;

/// Keys the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape.
    Escape,
    /// Space bar.
    Space,
    /// A letter key (case-insensitive).
    Char(char),
}

/// Core-side effect of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch draw mode.
    SetMode(DrawMode),
    /// Clear the buffer to white.
    Clear,
    /// Pause or resume animation.
    ToggleAnimation,
    /// Not a core key; forward to the host.
    Host(HostAction),
}

/// What the host should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Exit the application.
    Quit,
    /// Switch polygon fill mode (`true` = wireframe).
    Wireframe(bool),
    /// Enter fullscreen.
    Fullscreen,
    /// Leave fullscreen.
    Windowed,
    /// Repaint the window.
    Redraw,
}

/// Map a key to its command.
///
/// | Key    | Command                          |
/// |--------|----------------------------------|
/// | P      | points mode                      |
/// | L      | lines mode                       |
/// | Space  | clear                            |
/// | A      | toggle animation                 |
/// | Escape | quit                             |
/// | W / S  | wireframe on / off               |
/// | F / N  | fullscreen / windowed            |
///
/// Unbound keys still request a redraw.
#[must_use]
pub fn command_for(key: Key) -> Command {
    match key {
        Key::Escape => Command::Host(HostAction::Quit),
        Key::Space => Command::Clear,
        Key::Char(c) => match c.to_ascii_lowercase() {
            'p' => Command::SetMode(DrawMode::Points),
            'l' => Command::SetMode(DrawMode::Lines),
            'a' => Command::ToggleAnimation,
            'w' => Command::Host(HostAction::Wireframe(true)),
            's' => Command::Host(HostAction::Wireframe(false)),
            'f' => Command::Host(HostAction::Fullscreen),
            'n' => Command::Host(HostAction::Windowed),
            ' ' => Command::Clear,
            _ => Command::Host(HostAction::Redraw),
        },
    }
}
