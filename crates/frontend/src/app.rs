use crate::pages::{Dashboard, Landing, Login, MockTrades, NotFound, Strategies, Wallet};
use meowtrade_frontend_common::{AppLayout, Route, SessionHandle};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_memo((), |_| SessionHandle::browser());

    let render = {
        let session = (*session).clone();
        move |route: Route| switch(route, &session)
    };

    html! {
        <BrowserRouter>
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}

fn switch(route: Route, session: &SessionHandle) -> Html {
    let protected = |page: Html| {
        html! {
            <AppLayout session={session.clone()}>
                {page}
            </AppLayout>
        }
    };

    match route {
        Route::Home => html! { <Landing /> },
        Route::Login => html! { <Login /> },
        Route::Dashboard => protected(html! { <Dashboard /> }),
        Route::Strategies => protected(html! { <Strategies /> }),
        Route::MockTrades => protected(html! { <MockTrades /> }),
        Route::Wallet => protected(html! { <Wallet /> }),
        Route::NotFound => html! { <NotFound /> },
    }
}
