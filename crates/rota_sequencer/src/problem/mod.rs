pub mod address;
pub mod coordinates;
pub mod kilometers;
