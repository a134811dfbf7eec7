//! Middleware del sistema
//!
//! Capas tower aplicadas a todo el router: CORS y trazas HTTP.

pub mod cors;
pub mod trace;

pub use cors::*;
pub use trace::*;
