//! Protected application layout
//!
//! Wraps every signed-in page: sidebar on wide screens, header bar, mobile
//! overlay menu and the content container. Nothing is rendered until the
//! injected session store yields an authenticated record; otherwise a single
//! redirect to the login route is issued.

use super::header::Header;
use super::mobile_menu::MobileMenu;
use super::sidebar::Sidebar;
use crate::config::ShellConfig;
use crate::routes::Route;
use crate::session::SessionHandle;
use crate::shell::{ShellAction, ShellContext, ShellState, Verdict};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    /// Where the session record is read from and cleared on logout
    pub session: SessionHandle,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    let state = use_reducer(ShellState::default);
    let navigator = use_navigator();
    let location = use_location();

    // Evaluate the stored session once per mount
    {
        let state = state.clone();
        let session = props.session.clone();
        use_effect_with((), move |_| {
            let verdict = Verdict::from_session(session.get_session());
            tracing::debug!(
                authorized = matches!(verdict, Verdict::Authorized(_)),
                "Session gate resolved"
            );
            state.dispatch(ShellAction::Resolve(verdict));
        });
    }

    // The gate only enters the redirect state once per mount
    use_effect_with(state.needs_redirect(), move |needs_redirect| {
        if *needs_redirect {
            match navigator {
                Some(navigator) => {
                    tracing::debug!("No authenticated session, redirecting to login");
                    navigator.push(&Route::Login);
                }
                None => tracing::warn!("No router available to redirect unauthenticated visitor"),
            }
        }
    });

    // Navigating anywhere closes the mobile menu
    {
        let state = state.clone();
        let path = location
            .map(|location| location.path().to_string())
            .unwrap_or_default();
        use_effect_with(path, move |_| {
            state.dispatch(ShellAction::CloseMobileMenu);
        });
    }

    let Some(session) = state.session().cloned() else {
        return html! {};
    };

    let context = ShellContext {
        state,
        session: props.session.clone(),
    };

    html! {
        <ContextProvider<ShellContext> {context}>
            <div class="min-h-screen bg-slate-50 flex">
                <Sidebar />

                <div class="flex-1 flex flex-col">
                    <Header {session} />
                    <MobileMenu />

                    <main class="flex-1 p-5 md:p-8 bg-slate-50 overflow-auto">
                        <div class={classes!("premium-container", "mx-auto", "w-full", ShellConfig::CONTENT_MAX_WIDTH_CLASS)}>
                            { props.children.clone() }
                        </div>
                    </main>
                </div>
            </div>
        </ContextProvider<ShellContext>>
    }
}
