pub mod places;
pub mod users;
