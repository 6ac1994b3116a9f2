//! Site footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t py-10 text-sm text-gray-500">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center justify-between gap-4 sm:flex-row">
                    <span>"© 2025 MCGrowth. All rights reserved."</span>
                    <div class="flex items-center gap-6">
                        <a href="#" class="hover:text-gray-900 transition">"Privacy"</a>
                        <a href="#" class="hover:text-gray-900 transition">"Terms"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
