// -----------------------------------------------------------------------------
// Modules

mod reflect;
mod zeroed;

// -----------------------------------------------------------------------------
// Exports

pub use reflect::Reflect;
pub use zeroed::Zeroed;
