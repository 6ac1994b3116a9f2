//! Sticky top navigation

use leptos::*;

#[component]
pub fn SiteNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <header class="bg-white/80 backdrop-blur border-b sticky top-0 z-40 w-full">
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <a href="/" class="flex items-center gap-3">
                        <svg viewBox="0 0 64 64" class="h-9 w-9 rounded-md border p-1">
                            <rect x="10" y="30" width="8" height="20" fill="currentColor"/>
                            <rect x="24" y="24" width="8" height="26" fill="currentColor"/>
                            <rect x="38" y="18" width="8" height="32" fill="currentColor"/>
                            <path d="M8 40 L26 28 L40 32 L54 16" stroke="currentColor" stroke-width="4" fill="none"/>
                            <path d="M54 16 L52 24 L60 22 Z" fill="currentColor"/>
                        </svg>
                        <span class="font-semibold tracking-tight text-gray-900">"MCGrowth"</span>
                    </a>

                    // Desktop nav
                    <nav class="hidden sm:flex items-center gap-6 text-sm">
                        <a href="#features" class="text-gray-600 hover:text-gray-900 transition">"Features"</a>
                        <a href="#how" class="text-gray-600 hover:text-gray-900 transition">"How it works"</a>
                        <a href="#pricing" class="text-gray-600 hover:text-gray-900 transition">"Pricing"</a>
                        <a href="#faq" class="text-gray-600 hover:text-gray-900 transition">"FAQ"</a>
                        <div class="flex items-center gap-3 ml-4">
                            <a href="#contact" class="px-4 py-2 border border-gray-300 hover:bg-gray-50 text-gray-900 font-medium rounded-2xl transition">
                                "Contact"
                            </a>
                            <a href="#demo" class="px-4 py-2 bg-gray-900 hover:bg-gray-800 text-white font-medium rounded-2xl transition">
                                "Book Demo"
                            </a>
                        </div>
                    </nav>

                    // Mobile menu button
                    <div class="sm:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="sm:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        <a href="#features" class="block text-gray-600 hover:text-gray-900" on:click=move |_| set_mobile_open.set(false)>"Features"</a>
                        <a href="#how" class="block text-gray-600 hover:text-gray-900" on:click=move |_| set_mobile_open.set(false)>"How it works"</a>
                        <a href="#pricing" class="block text-gray-600 hover:text-gray-900" on:click=move |_| set_mobile_open.set(false)>"Pricing"</a>
                        <a href="#faq" class="block text-gray-600 hover:text-gray-900" on:click=move |_| set_mobile_open.set(false)>"FAQ"</a>
                        <div class="pt-4 border-t border-gray-200 space-y-3">
                            <a href="#contact" class="block text-gray-600 hover:text-gray-900" on:click=move |_| set_mobile_open.set(false)>"Contact"</a>
                            <a href="#demo" class="block w-full text-center px-4 py-2 bg-gray-900 text-white font-medium rounded-2xl" on:click=move |_| set_mobile_open.set(false)>
                                "Book Demo"
                            </a>
                        </div>
                    </div>
                </div>
            </Show>
        </header>
    }
}
