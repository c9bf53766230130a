pub use client::*;
pub use contact::*;
pub use core_values::*;
pub use jobs::*;
pub use navigation::*;
pub use pages::*;
pub use projects::*;
pub use sectors::*;
pub use services::*;
pub use settings::*;

mod client;
mod contact;
mod core_values;
mod jobs;
mod navigation;
mod pages;
mod projects;
mod sectors;
mod services;
mod settings;
