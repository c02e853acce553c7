use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/chronopolis.css"/>
        <Title text="Chronopolis - Where Time and Eternity Converge"/>
        <Meta
            name="description"
            content="A city where every era of history meets. Explore the timelines of Chronopolis."
        />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=IndexPage/>
                </Routes>
            </main>
        </Router>
    }
}
