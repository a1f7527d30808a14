pub mod errors;
pub mod finance;
pub mod goals;
pub mod openapi;
pub mod routes;
pub mod schemas;
pub mod startup;

pub use startup::run;
