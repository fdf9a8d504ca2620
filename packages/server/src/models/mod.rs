pub mod blog;
pub mod contact;
pub mod project;
pub mod shared;
