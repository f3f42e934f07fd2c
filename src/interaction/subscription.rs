//! Scoped pointer event subscription for an editing session

use tracing::debug;

use crate::interaction::editor::{Editor, Intent, IntentOutcome};
use crate::io::error::Result;

/// Pointer activity reported by the host, already in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved anywhere on the surface
    Moved {
        /// Horizontal canvas coordinate
        x: f64,
        /// Vertical canvas coordinate
        y: f64,
    },
    /// The pointer button was released
    Released,
    /// A plain click without a drag
    Clicked {
        /// Horizontal canvas coordinate
        x: f64,
        /// Vertical canvas coordinate
        y: f64,
    },
}

/// Exclusive pointer stream into an [`Editor`] for the life of a session
///
/// Dropping the subscription ends the session: a drag still in progress is
/// cancelled and the editor is left idle.
#[derive(Debug)]
pub struct PointerSubscription<'a> {
    editor: &'a mut Editor,
}

impl<'a> PointerSubscription<'a> {
    pub(crate) fn new(editor: &'a mut Editor) -> Self {
        debug!("pointer subscription opened");
        Self { editor }
    }

    /// Deliver one pointer event
    pub fn dispatch(&mut self, event: PointerEvent) -> IntentOutcome {
        self.editor.handle_pointer(event)
    }

    /// Deliver any user intent
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Editor::apply`]
    pub fn apply(&mut self, intent: Intent) -> Result<IntentOutcome> {
        self.editor.apply(intent)
    }

    /// Read access to the editor while the session is open
    pub fn editor(&self) -> &Editor {
        self.editor
    }
}

impl Drop for PointerSubscription<'_> {
    fn drop(&mut self) {
        self.editor.cancel_drag();
        debug!("pointer subscription closed");
    }
}
