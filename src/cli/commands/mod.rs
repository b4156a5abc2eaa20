mod list;
mod seed;

pub use list::cmd_list_series;
pub use seed::cmd_seed;
