use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Lost in Time - Chronopolis"/>
        <div class="not-found bg-gradient-cosmic">
            <h1 class="mythical-heading">"404"</h1>
            <p class="futuristic-text">"This moment has not happened yet."</p>
            <A href="/" attr:class="btn btn-ethereal btn-sm">"Return to the City"</A>
        </div>
    }
}
