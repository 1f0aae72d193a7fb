pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod models;
pub mod query;
pub mod render;
pub mod transport;
