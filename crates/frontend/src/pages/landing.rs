use meowtrade_frontend_common::components::Brand;
use meowtrade_frontend_common::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="min-h-screen bg-slate-50 flex flex-col items-center justify-center gap-8 px-4">
            <Brand text_class="text-3xl" />
            <p class="text-slate-600 text-center max-w-md">
                {"Practice crypto trading strategies with mock trades before risking a single coin."}
            </p>
            <div class="flex gap-3">
                <Link<Route> to={Route::Login} classes="px-4 py-2 rounded-lg bg-meow-paw text-white font-medium">
                    {"Log in"}
                </Link<Route>>
                <Link<Route> to={Route::Dashboard} classes="px-4 py-2 rounded-lg border border-slate-200 text-slate-700 hover:bg-slate-100">
                    {"Open dashboard"}
                </Link<Route>>
            </div>
        </div>
    }
}
