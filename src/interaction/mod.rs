//! Interaction state machine driving placement and removal
//!
//! Translates picks, pointer movement, releases and clicks into engine
//! operations. Hover validity is advisory; only release commits.

/// Editor combining catalog, board, grid geometry and drag state
pub mod editor;
/// Drag lifecycle states and hover preview
pub mod state;
/// Scoped pointer event subscription
pub mod subscription;

pub use editor::{Editor, Intent, IntentOutcome, ReleaseOutcome};
pub use state::{HoverPreview, HoverStatus, InteractionState, PointerPosition};
pub use subscription::{PointerEvent, PointerSubscription};
