pub mod colors;
pub mod team;

pub use colors::*;
pub use team::*;
