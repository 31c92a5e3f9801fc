pub mod credentials;
pub mod home;
pub mod results;
