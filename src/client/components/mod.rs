pub mod login_form;
pub mod logout_button;
pub mod navbar;
pub mod page;
pub mod shipping_form;
pub mod shipping_results;
pub mod toaster;

pub use login_form::LoginForm;
pub use logout_button::LogoutButton;
pub use navbar::Navbar;
pub use page::Page;
pub use shipping_form::ShippingForm;
pub use shipping_results::ShippingResults;
pub use toaster::Toaster;
