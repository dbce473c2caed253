//! Desktop sidebar, shown from the `lg` breakpoint up

use super::brand::Brand;
use super::logout_button::LogoutButton;
use super::nav_links::NavLinks;
use yew::prelude::*;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <aside class="hidden lg:flex flex-col w-56 border-r border-slate-200 bg-white">
            <div class="p-4 border-b border-slate-200 bg-white">
                <Brand />
            </div>

            <nav class="flex-1 py-4 px-2">
                <NavLinks link_classes="flex items-center gap-2 px-3 py-2 rounded-lg transition-colors" />
            </nav>

            <div class="p-3 border-t border-slate-200">
                <LogoutButton />
            </div>
        </aside>
    }
}
