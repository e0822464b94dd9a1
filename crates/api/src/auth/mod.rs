//! Credential handling for signup and login.

pub mod password;
