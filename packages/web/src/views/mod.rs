mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod hotels;
pub use hotels::Hotels;

mod favorites;
pub use favorites::Favorites;
