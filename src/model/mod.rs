pub mod leave;
pub mod role;
