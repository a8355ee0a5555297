// ============================================================================
// DOM MODULE - Helpers DOM y adaptador RosterView
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;
pub mod bindings;
pub mod surface;

pub use element::*;
pub use builder::*;
pub use events::*;
pub use surface::{Dispatch, DomSurface};
