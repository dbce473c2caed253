//! Signed-in pages. Their content lives outside the shell; these render a
//! heading so the layout has something to wrap.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct PagePlaceholderProps {
    heading: AttrValue,
    blurb: AttrValue,
}

#[function_component(PagePlaceholder)]
fn page_placeholder(props: &PagePlaceholderProps) -> Html {
    html! {
        <section class="bg-white rounded-xl border border-slate-200 p-6">
            <h2 class="text-xl font-semibold text-slate-800 mb-2">{props.heading.clone()}</h2>
            <p class="text-slate-600">{props.blurb.clone()}</p>
        </section>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! { <PagePlaceholder heading="Dashboard" blurb="Portfolio overview and recent activity." /> }
}

#[function_component(Strategies)]
pub fn strategies() -> Html {
    html! { <PagePlaceholder heading="Trading Strategies" blurb="Create and tune automated strategies." /> }
}

#[function_component(MockTrades)]
pub fn mock_trades() -> Html {
    html! { <PagePlaceholder heading="Mock Trading" blurb="Place simulated orders against live prices." /> }
}

#[function_component(Wallet)]
pub fn wallet() -> Html {
    html! { <PagePlaceholder heading="Wallet" blurb="Balances of your practice funds." /> }
}
