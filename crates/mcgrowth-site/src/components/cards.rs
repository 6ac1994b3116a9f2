//! Card components for the landing page

use leptos::*;

#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full border px-3 py-1 text-xs font-medium text-gray-700">
            {children()}
        </span>
    }
}

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl border shadow-sm p-6">
            <div class="h-12 w-12 rounded-xl bg-gray-100 flex items-center justify-center text-2xl mb-4">
                {icon}
            </div>
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-sm text-gray-600">{description}</p>
        </div>
    }
}

/// One row in the hero "What your AI does" card.
#[component]
pub fn HighlightRow(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <span class="mt-1 text-xl">{icon}</span>
            <div>
                <div class="font-medium text-gray-900">{title}</div>
                <div class="text-sm text-gray-600">{description}</div>
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-3xl font-bold tracking-tight sm:text-4xl text-gray-900">{value}</div>
            <div class="text-sm text-gray-600">{label}</div>
        </div>
    }
}

#[component]
pub fn StepItem(text: &'static str) -> impl IntoView {
    view! {
        <li class="flex gap-3">
            <span class="mt-0.5 text-green-600">"✓"</span>
            <span>{text}</span>
        </li>
    }
}
