pub mod error;
pub mod validation;
pub mod config;
pub mod model;
pub mod view;
pub mod api;
pub mod ops;
pub mod cli;
