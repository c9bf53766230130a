pub use blocks::*;
pub use contact::*;
pub use core_value::*;
pub use job::*;
pub use navigation::*;
pub use page::*;
pub use project::*;
pub use sector::*;
pub use service::*;
pub use settings::*;

mod blocks;
mod contact;
mod core_value;
mod job;
mod navigation;
mod page;
mod project;
mod sector;
mod service;
mod settings;
