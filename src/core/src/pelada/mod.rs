pub mod error;
pub mod event;
pub mod pelada;
pub mod roster;

pub use error::*;
pub use event::*;
pub use pelada::*;
pub use roster::*;
