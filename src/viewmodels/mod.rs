pub mod roster_viewmodel;

pub use roster_viewmodel::{RosterView, RosterViewModel};
