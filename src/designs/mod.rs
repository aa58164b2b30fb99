pub mod common;
pub mod contact;
