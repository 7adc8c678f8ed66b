pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod home;
pub mod login;
pub mod registration;
pub mod tasks;
