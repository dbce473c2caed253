use meowtrade_frontend_common::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-slate-50">
            <h1 class="text-2xl font-bold text-slate-800">{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="text-meow-paw hover:underline">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
