pub mod load;
pub mod render;
pub mod serve;
pub mod views;
