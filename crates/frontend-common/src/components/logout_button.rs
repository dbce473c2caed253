use super::icon::{Icon, SvgIcon};
use crate::shell::use_sign_out;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LogoutButtonProps {
    #[prop_or(18)]
    pub icon_size: u32,
    #[prop_or(classes!("mr-2"))]
    pub icon_classes: Classes,
}

#[function_component(LogoutButton)]
pub fn logout_button(props: &LogoutButtonProps) -> Html {
    let on_sign_out = use_sign_out();

    html! {
        <button
            type="button"
            onclick={on_sign_out}
            class="inline-flex items-center w-full justify-start h-10 px-4 py-2 rounded-md text-sm font-medium transition-colors text-slate-600 hover:text-slate-900 hover:bg-slate-50"
        >
            <SvgIcon icon={Icon::LogOut} size={props.icon_size} classes={props.icon_classes.clone()} />
            {"Log out"}
        </button>
    }
}
