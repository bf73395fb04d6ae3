mod codec;
mod payload;

pub use codec::*;
pub use payload::*;
