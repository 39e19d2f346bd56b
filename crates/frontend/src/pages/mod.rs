pub mod home;
pub mod housing;
pub mod jobs;
pub mod team;
