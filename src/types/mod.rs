mod heading;
mod query;
mod sort_direction;

pub use heading::*;
pub use query::*;
pub use sort_direction::*;
