use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::credentials::ApiKeyProvider;
use crate::components::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/quizgen-web.css"/>
        <Title text="Topic-Based Question Generator"/>
        <Meta name="description" content="Enter a topic, and AI will generate questions and answers for you"/>

        <ApiKeyProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.">
                        <Route path=path!("/") view=Home/>
                    </Routes>
                </main>
            </Router>
        </ApiKeyProvider>
    }
}
