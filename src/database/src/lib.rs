mod error;
mod loaders;
mod repository;
mod share;

pub use error::*;
pub use loaders::*;
pub use repository::*;
pub use share::*;
