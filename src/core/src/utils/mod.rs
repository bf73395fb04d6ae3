mod id;
mod string;
mod time;

pub use id::*;
pub use string::*;
pub use time::*;
