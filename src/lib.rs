pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod datasource;
pub mod error;
pub mod global;
pub mod meeting;
pub mod repository;
