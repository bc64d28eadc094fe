//! Page views

pub mod home;
pub mod results;
