pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::billing;
pub use domain::dvd;
pub use domain::resource;
pub use domain::validation;
