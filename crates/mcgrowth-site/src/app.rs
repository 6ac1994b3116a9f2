//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::*;
use crate::error::{AppError, ErrorTemplate};
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/mcgrowth-site.css"/>
        <Title text="MCGrowth | 24/7 AI Receptionist for Roofers"/>
        <Meta
            name="description"
            content="MCGrowth texts back missed calls in seconds, qualifies homeowners, and books roofing estimates straight into your calendar."
        />
        <Router fallback=|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(AppError::NotFound);
            view! { <ErrorTemplate outside_errors/> }.into_view()
        }>
            <div class="min-h-screen bg-white text-gray-900">
                <SiteNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
