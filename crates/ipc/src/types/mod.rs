//! Type definitions for IPC messages.

mod hotspot;
mod session;
mod view_mode;

pub use hotspot::*;
pub use session::*;
pub use view_mode::*;
