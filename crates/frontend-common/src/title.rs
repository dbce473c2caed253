//! Header title lookup

/// Path fragment to header title, checked in order
pub const PAGE_TITLES: &[(&str, &str)] = &[
    ("dashboard", "Dashboard"),
    ("strategies", "Trading Strategies"),
    ("mock-trades", "Mock Trading"),
    ("wallet", "Wallet"),
];

/// Title for the current path. The first fragment contained in the path wins.
pub fn page_title(path: &str) -> Option<&'static str> {
    PAGE_TITLES
        .iter()
        .find(|(fragment, _)| path.contains(fragment))
        .map(|&(_, title)| title)
}
