//! Domain building blocks shared by the database and HTTP layers.

pub mod error;
pub mod geocode;
pub mod types;
