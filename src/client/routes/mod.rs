pub mod guarded;
pub mod home;
pub mod login;
pub mod not_found;

pub use guarded::Guarded;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
