pub mod cards;
pub mod closing;
pub mod comparison;
pub mod conclusion;
pub mod definition;
pub mod frame;
pub mod intro;
pub mod references;
