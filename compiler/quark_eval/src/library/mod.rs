//! Stock instruction libraries.
//!
//! Each function returns one [`MethodGroup`]; [`MethodRegistry::stock`]
//! merges them. Embedders can merge a subset, or their own groups, instead.
//!
//! [`MethodRegistry::stock`]: crate::MethodRegistry::stock

mod control;
mod io;
mod math;
mod memory;

pub use control::control;
pub use io::io;
pub use math::math;
pub use memory::memory;
