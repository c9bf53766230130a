pub mod api;
pub mod assets;
pub mod common;
pub mod config;
pub mod models;
pub mod services;
pub mod web;
