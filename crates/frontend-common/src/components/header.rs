//! Top header bar: menu toggle, page title, notifications and user badge

use super::icon::{Icon, SvgIcon};
use crate::session::SessionRecord;
use crate::shell::{use_shell, use_toggle_mobile_menu};
use crate::title::page_title;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HeaderProps {
    pub session: SessionRecord,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let shell = use_shell();
    let on_toggle = use_toggle_mobile_menu();
    let location = use_location();

    let title = location
        .as_ref()
        .and_then(|location| page_title(location.path()))
        .unwrap_or_default();

    let toggle_icon = if shell.state.mobile_menu_open {
        Icon::X
    } else {
        Icon::Menu
    };

    html! {
        <header class="bg-white border-b border-slate-200 px-4 py-2 flex items-center justify-between">
            <div class="lg:hidden">
                <button
                    type="button"
                    onclick={on_toggle}
                    aria-expanded={shell.state.mobile_menu_open.to_string()}
                    aria-label="Toggle navigation menu"
                    class="p-2 text-slate-600 rounded-lg hover:bg-slate-100"
                >
                    <SvgIcon icon={toggle_icon} size={20} />
                </button>
            </div>

            <div class="hidden md:block">
                <h1 class="text-lg font-medium text-slate-800">{title}</h1>
            </div>

            <div class="flex items-center gap-3">
                <button type="button" aria-label="Notifications" class="p-1.5 rounded-full text-slate-600 hover:bg-slate-100 relative">
                    <SvgIcon icon={Icon::Bell} size={18} />
                    <span class="absolute top-1 right-1 w-2 h-2 bg-meow-paw rounded-full"></span>
                </button>

                <div class="flex items-center gap-2">
                    <div class="w-8 h-8 rounded-full bg-meow-siamese/30 flex items-center justify-center text-meow-paw">
                        <SvgIcon icon={Icon::User} size={16} />
                    </div>
                    <span class="hidden md:block text-sm font-medium text-slate-700">
                        {props.session.display_name().to_string()}
                    </span>
                </div>
            </div>
        </header>
    }
}
