//! Value objects - immutable display and attribute types

mod attribute;
mod bar;
mod entry;

pub use attribute::{as_number, attribute, number, resource, ResourceValues};
pub use bar::{Bar, THEME_HP, THEME_MP};
pub use entry::{Effect, NormalizedEntry};
