pub mod frame;
pub mod region;
pub mod time;
