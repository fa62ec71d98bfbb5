pub mod home;
pub mod mvi;
