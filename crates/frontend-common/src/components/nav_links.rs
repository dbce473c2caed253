//! Navigation link list used by the sidebar and the mobile menu

use super::icon::SvgIcon;
use crate::nav::{link_state_classes, NAV_ITEMS};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct NavLinksProps {
    /// Layout classes for every link; active/inactive styling is added on top
    pub link_classes: Classes,
    /// Fired when any link is clicked, after the router has handled it
    #[prop_or_default]
    pub on_navigate: Option<Callback<MouseEvent>>,
}

#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    let location = use_location();
    let current_path = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    html! {
        <ul class="space-y-1">
            { for NAV_ITEMS.iter().map(|item| {
                let classes = classes!(
                    props.link_classes.clone(),
                    link_state_classes(item, &current_path),
                );
                // Link swallows the click for routing; the list item still sees it bubble up
                let onclick = props.on_navigate.clone();
                html! {
                    <li key={item.label} {onclick}>
                        <Link<Route> to={item.route.clone()} {classes}>
                            <SvgIcon icon={item.icon} size={20} />
                            <span>{item.label}</span>
                        </Link<Route>>
                    </li>
                }
            }) }
        </ul>
    }
}
