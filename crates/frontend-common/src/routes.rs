//! Application routes

use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/app/dashboard")]
    Dashboard,
    #[at("/app/strategies")]
    Strategies,
    #[at("/app/mock-trades")]
    MockTrades,
    #[at("/app/wallet")]
    Wallet,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::MockTrades.to_path(), "/app/mock-trades");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/app/wallet"), Some(Route::Wallet));
        assert_eq!(Route::recognize("/app/strategies"), Some(Route::Strategies));
    }
}
