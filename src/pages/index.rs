use leptos::prelude::*;

use crate::components::{HeroSection, Navigation};

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <div class="index-page">
            <Navigation/>
            <HeroSection/>
        </div>
    }
}
