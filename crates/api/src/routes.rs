pub mod admin;
pub mod health;
pub mod session;
pub mod slots;
