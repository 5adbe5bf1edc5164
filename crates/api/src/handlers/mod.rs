pub mod company;
pub mod crud;
pub mod message;
pub mod project;
