//! Navigation model shared by the sidebar and the mobile menu

use crate::components::Icon;
use crate::routes::Route;
use yew_router::Routable;

/// One sidebar / mobile menu entry
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub icon: Icon,
    pub label: &'static str,
    pub route: Route,
}

impl NavItem {
    pub fn path(&self) -> String {
        self.route.to_path()
    }

    /// Exact match only; `/app/wallet/deposit` does not activate `/app/wallet`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path() == current_path
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        icon: Icon::LayoutDashboard,
        label: "Dashboard",
        route: Route::Dashboard,
    },
    NavItem {
        icon: Icon::LineChart,
        label: "Strategies",
        route: Route::Strategies,
    },
    NavItem {
        icon: Icon::CircleDollarSign,
        label: "Mock Trades",
        route: Route::MockTrades,
    },
    NavItem {
        icon: Icon::Wallet,
        label: "Wallet",
        route: Route::Wallet,
    },
];

pub(crate) const ACTIVE_LINK_CLASSES: &str = "bg-meow-siamese/10 text-meow-paw font-medium";
pub(crate) const INACTIVE_LINK_CLASSES: &str = "text-slate-600 hover:bg-slate-50";

pub(crate) fn link_state_classes(item: &NavItem, current_path: &str) -> &'static str {
    if item.is_active(current_path) {
        ACTIVE_LINK_CLASSES
    } else {
        INACTIVE_LINK_CLASSES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(path: &str) -> Vec<&'static str> {
        NAV_ITEMS
            .iter()
            .filter(|item| item.is_active(path))
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn test_items_in_order() {
        let paths: Vec<String> = NAV_ITEMS.iter().map(NavItem::path).collect();
        assert_eq!(
            paths,
            [
                "/app/dashboard",
                "/app/strategies",
                "/app/mock-trades",
                "/app/wallet"
            ]
        );
    }

    #[test]
    fn test_exact_path_activates_single_item() {
        assert_eq!(active_labels("/app/dashboard"), ["Dashboard"]);
        assert_eq!(active_labels("/app/mock-trades"), ["Mock Trades"]);
    }

    #[test]
    fn test_partial_paths_activate_nothing() {
        assert!(active_labels("/app").is_empty());
        assert!(active_labels("/app/wallet/").is_empty());
        assert!(active_labels("/app/wallet/history").is_empty());
        assert!(active_labels("/").is_empty());
    }

    #[test]
    fn test_link_state_classes() {
        let wallet = &NAV_ITEMS[3];
        assert_eq!(link_state_classes(wallet, "/app/wallet"), ACTIVE_LINK_CLASSES);
        assert_eq!(link_state_classes(wallet, "/app/dashboard"), INACTIVE_LINK_CLASSES);
    }
}
