pub mod login;
pub mod register_user;

pub use login::login;
pub use register_user::register_user;
