pub mod principal;
pub mod slot;
