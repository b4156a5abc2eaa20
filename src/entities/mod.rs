pub mod prelude;

pub mod creator;
pub mod episode;
pub mod series;
