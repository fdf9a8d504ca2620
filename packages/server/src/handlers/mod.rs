pub mod blog;
pub mod contact;
pub mod health;
pub mod project;
