pub mod billing;
pub mod dvd;
pub mod errors;
pub mod registry;
pub mod resource;
pub mod validation;
