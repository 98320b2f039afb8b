pub mod booking;
pub mod feedback;
pub mod ride;
pub mod seed;
pub mod user;
