//! Logo and product name, linking back to the landing page

use super::icon::{Icon, SvgIcon};
use crate::config::ShellConfig;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BrandProps {
    /// Text size class for the product name
    #[prop_or(classes!("text-lg"))]
    pub text_class: Classes,
}

#[function_component(Brand)]
pub fn brand(props: &BrandProps) -> Html {
    html! {
        <Link<Route> to={Route::Home} classes="flex items-center gap-2">
            <div class="bg-gradient-to-r from-meow-paw to-meow-tabby p-2 rounded-lg">
                <SvgIcon icon={Icon::Cat} classes="w-6 h-6 text-white" />
            </div>
            <span class={classes!("font-bold", "gradient-text", props.text_class.clone())}>
                {ShellConfig::BRAND_NAME}
            </span>
        </Link<Route>>
    }
}
