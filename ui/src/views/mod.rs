mod about;
pub use about::About;

mod calculator;
pub use calculator::CalculatorPage;

mod home;
pub use home::Home;

mod not_found;
pub use not_found::NotFound;

mod product;
pub use product::ProductPage;
