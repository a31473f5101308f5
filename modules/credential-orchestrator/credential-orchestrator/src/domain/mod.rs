pub mod error;
pub mod principal;
pub mod repo;
pub mod service;

#[cfg(test)]
mod service_test;
