//! UI primitives (Avatar, Surface)

pub mod avatar;
pub mod surface;

pub use avatar::*;
pub use surface::*;
