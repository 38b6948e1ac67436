//! Page Components

mod home;
mod routes;

pub use home::HomePage;
pub use routes::{GeneratePage, ResultPage, SignInPage, SignUpPage};
