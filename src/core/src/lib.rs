pub mod club;
pub mod draw;
pub mod pelada;
pub mod utils;

pub use club::*;
pub use draw::*;
pub use pelada::*;
