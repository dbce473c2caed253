//! Shell context shared by the layout's sub-components

use super::state::{ShellAction, ShellState};
use crate::routes::Route;
use crate::session::SessionHandle;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ShellContext {
    pub state: UseReducerHandle<ShellState>,
    pub session: SessionHandle,
}

/// Hook to use the shell context
#[hook]
pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>()
        .expect("ShellContext not found. Make sure the component is rendered inside AppLayout")
}

/// Callback that toggles the mobile menu
#[hook]
pub fn use_toggle_mobile_menu() -> Callback<MouseEvent> {
    let shell = use_shell();
    Callback::from(move |_| shell.state.dispatch(ShellAction::ToggleMobileMenu))
}

/// Callback that closes the mobile menu
#[hook]
pub fn use_close_mobile_menu() -> Callback<MouseEvent> {
    let shell = use_shell();
    Callback::from(move |_| shell.state.dispatch(ShellAction::CloseMobileMenu))
}

/// Logout: drop the stored session, then go back to the landing page
#[hook]
pub fn use_sign_out() -> Callback<MouseEvent> {
    let shell = use_shell();
    let navigator = use_navigator();

    Callback::from(move |_| {
        shell.session.clear_session();
        shell.state.dispatch(ShellAction::SignOut);
        tracing::info!("User signed out");

        match &navigator {
            Some(navigator) => navigator.push(&Route::Home),
            None => tracing::warn!("No router available, staying on current page after logout"),
        }
    })
}
