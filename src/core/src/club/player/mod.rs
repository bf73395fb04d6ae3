pub mod attributes;
pub mod builder;
pub mod calculators;
pub mod card;
pub mod player;
pub mod positions;

pub use attributes::*;
pub use builder::*;
pub use calculators::*;
pub use card::*;
pub use player::*;
pub use positions::*;
