pub mod repository;
pub mod seed;
pub mod service;
