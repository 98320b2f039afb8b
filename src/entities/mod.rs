pub mod booking;
pub mod driver;
pub mod feedback;
pub mod ride;
pub mod user;
