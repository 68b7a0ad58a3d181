pub mod email;
pub mod leave;
