//! UI Components
//!
//! Leptos components for the home view and the sign-up page.

mod banner;
mod home;
mod loader;
mod movie_box;
mod movie_detail;
mod nav_bar;
mod sign_up_form;
mod slider;

pub use banner::Banner;
pub use home::Home;
pub use loader::Loader;
pub use movie_box::MovieBox;
pub use movie_detail::MovieDetail;
pub use nav_bar::NavBar;
pub use sign_up_form::SignUpPage;
pub use slider::Slider;
