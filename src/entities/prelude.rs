pub use super::creator::Entity as Creator;
pub use super::episode::Entity as Episode;
pub use super::series::Entity as Series;
