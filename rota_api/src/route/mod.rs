pub mod complete_stop;
pub mod current;
pub mod optimize;
