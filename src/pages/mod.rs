pub mod home;
pub mod order;
