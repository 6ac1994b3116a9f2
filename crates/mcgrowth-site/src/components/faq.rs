//! FAQ accordion
//!
//! Single-open accordion: opening an entry closes any other, and clicking
//! an open entry collapses it.

use leptos::*;

#[component]
pub fn FaqAccordion(entries: Vec<(&'static str, &'static str)>) -> impl IntoView {
    let (open, set_open) = create_signal(None::<usize>);

    view! {
        <div class="divide-y divide-gray-200 rounded-2xl border bg-white">
            {entries
                .into_iter()
                .enumerate()
                .map(|(index, (question, answer))| {
                    view! {
                        <div>
                            <button
                                class="flex w-full items-center justify-between px-6 py-4 text-left font-medium text-gray-900 hover:bg-gray-50"
                                on:click=move |_| {
                                    set_open.update(|current| {
                                        *current = if *current == Some(index) {
                                            None
                                        } else {
                                            Some(index)
                                        };
                                    })
                                }
                            >
                                {question}
                                <span class="ml-4 text-gray-400">
                                    {move || if open.get() == Some(index) { "−" } else { "+" }}
                                </span>
                            </button>
                            <Show when=move || open.get() == Some(index)>
                                <div class="px-6 pb-4 text-sm text-gray-600">{answer}</div>
                            </Show>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
