//! TUI event plumbing.
//!
//! Key input and render ticks flow through a single message type and
//! are processed to completion in arrival order — no handler suspends.

use crossterm::event::KeyEvent;

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Render: draw a frame.
    Render,
    /// Quit the TUI.
    Quit,
}
