//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Pointer cursor requested by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    /// Horizontal resize, shown while a panel border is hovered or dragged
    ColResize,
}

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Change the window cursor
    SetCursor(CursorStyle),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Cursor changes are applied by the window, not the frame buffer
            Cmd::SetCursor(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::Quit => false,
        }
    }

    /// Last cursor change carried by this command, if any
    pub fn cursor(&self) -> Option<CursorStyle> {
        match self {
            Cmd::SetCursor(style) => Some(*style),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.cursor()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_needs_redraw_if_any_child_does() {
        let cmd = Cmd::batch(vec![Cmd::SetCursor(CursorStyle::ColResize), Cmd::Redraw]);
        assert!(cmd.needs_redraw());

        let cmd = Cmd::batch(vec![Cmd::SetCursor(CursorStyle::ColResize), Cmd::None]);
        assert!(!cmd.needs_redraw());
    }

    #[test]
    fn test_cursor_takes_last_in_batch() {
        let cmd = Cmd::batch(vec![
            Cmd::SetCursor(CursorStyle::ColResize),
            Cmd::Redraw,
            Cmd::SetCursor(CursorStyle::Default),
        ]);
        assert_eq!(cmd.cursor(), Some(CursorStyle::Default));
        assert_eq!(Cmd::Redraw.cursor(), None);
    }
}
