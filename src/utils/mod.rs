pub mod demo_data;
pub mod helpers;
