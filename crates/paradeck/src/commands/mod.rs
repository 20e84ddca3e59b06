pub mod completion;
pub mod config;
pub mod slides;
pub mod version;
