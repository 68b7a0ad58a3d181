pub mod leave;
pub mod manager;
