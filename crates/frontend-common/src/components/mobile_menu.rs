//! Full-screen navigation overlay for narrow viewports

use super::brand::Brand;
use super::icon::{Icon, SvgIcon};
use super::logout_button::LogoutButton;
use super::nav_links::NavLinks;
use crate::shell::{use_close_mobile_menu, use_shell};
use yew::prelude::*;

#[function_component(MobileMenu)]
pub fn mobile_menu() -> Html {
    let shell = use_shell();
    let on_close = use_close_mobile_menu();

    if !shell.state.mobile_menu_open {
        return html! {};
    }

    html! {
        <div class="lg:hidden fixed inset-0 z-50 bg-white">
            <div class="flex justify-between items-center p-4 border-b border-slate-200">
                <Brand text_class="text-xl" />
                <button
                    type="button"
                    onclick={on_close.clone()}
                    aria-label="Close navigation menu"
                    class="p-2 text-slate-600 rounded-lg hover:bg-slate-100"
                >
                    <SvgIcon icon={Icon::X} size={20} />
                </button>
            </div>

            <nav class="p-4">
                <NavLinks
                    link_classes="flex items-center gap-3 px-4 py-3 rounded-lg transition-colors"
                    on_navigate={on_close}
                />

                <div class="mt-6 pt-6 border-t border-slate-200">
                    <LogoutButton icon_size={20} icon_classes="mr-3" />
                </div>
            </nav>
        </div>
    }
}
