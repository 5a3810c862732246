pub mod alumni;
pub mod event;
pub mod mentor;
