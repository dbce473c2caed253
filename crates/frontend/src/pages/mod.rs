mod landing;
mod login;
mod not_found;
mod placeholder;

pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use placeholder::{Dashboard, MockTrades, Strategies, Wallet};
