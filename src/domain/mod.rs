pub mod models;
pub mod policy;
pub mod routing;
