//! 页面视图

pub mod resources;
pub mod settings;
