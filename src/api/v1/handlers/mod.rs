pub mod caller;
pub mod health;
