pub mod icons;
pub mod meta;
