pub mod upstream_service;

pub use upstream_service::*;
