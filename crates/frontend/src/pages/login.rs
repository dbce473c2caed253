//! Minimal sign-in page that writes the session record the shell reads

use meowtrade_frontend_common::{BrowserSessionStore, Route, SessionRecord};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator();
    let name = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_value = name.trim().to_string();
            if name_value.is_empty() {
                return;
            }

            match BrowserSessionStore::default().save_session(&SessionRecord::authenticated(name_value)) {
                Ok(()) => {
                    tracing::info!("Signed in");
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Dashboard);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Could not store session");
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <div class="min-h-screen bg-slate-50 flex items-center justify-center px-4">
            <form onsubmit={on_submit} class="bg-white rounded-xl border border-slate-200 p-8 w-full max-w-sm space-y-4">
                <h1 class="text-2xl font-bold text-slate-800 text-center">{"Log in"}</h1>

                if let Some(error) = &*error {
                    <div class="p-3 bg-red-50 text-red-700 rounded text-sm">{error}</div>
                }

                <input
                    type="text"
                    class="w-full px-4 py-3 border border-slate-200 rounded-lg focus:outline-none focus:border-meow-paw"
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={on_name_input}
                />
                <button
                    type="submit"
                    disabled={name.trim().is_empty()}
                    class="w-full px-4 py-3 bg-meow-paw text-white rounded-lg font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"Continue"}
                </button>
            </form>
        </div>
    }
}
