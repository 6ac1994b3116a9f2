//! ROI snapshot card
//!
//! Three inputs held as signals; the booked-lead figure is derived on every
//! change and never stored.

use leptos::*;

use crate::estimate::{leads_to_cover_fee, parse_field};

#[component]
pub fn RoiSnapshot() -> impl IntoView {
    let (job_value, set_job_value) = create_signal(8000_i64);
    let (monthly_fee, set_monthly_fee) = create_signal(500_i64);
    let (close_rate, set_close_rate) = create_signal(35_i64);

    let leads_needed =
        move || leads_to_cover_fee(job_value.get(), monthly_fee.get(), close_rate.get());

    view! {
        <div class="bg-white rounded-2xl border shadow-sm p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"ROI Snapshot"</h3>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                <div>
                    <label class="text-sm text-gray-600">"Avg. job value ($)"</label>
                    <input
                        type="number"
                        class="mt-1 w-full rounded-xl border border-gray-300 p-2 focus:ring-2 focus:ring-gray-900 focus:border-gray-900"
                        prop:value=move || job_value.get().to_string()
                        on:input=move |ev| set_job_value.set(parse_field(&event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label class="text-sm text-gray-600">"Monthly fee ($)"</label>
                    <input
                        type="number"
                        class="mt-1 w-full rounded-xl border border-gray-300 p-2 focus:ring-2 focus:ring-gray-900 focus:border-gray-900"
                        prop:value=move || monthly_fee.get().to_string()
                        on:input=move |ev| set_monthly_fee.set(parse_field(&event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label class="text-sm text-gray-600">"Close rate (%)"</label>
                    <input
                        type="number"
                        class="mt-1 w-full rounded-xl border border-gray-300 p-2 focus:ring-2 focus:ring-gray-900 focus:border-gray-900"
                        prop:value=move || close_rate.get().to_string()
                        on:input=move |ev| set_close_rate.set(parse_field(&event_target_value(&ev)))
                    />
                </div>
            </div>
            <div class="mt-4 rounded-xl bg-gray-100 p-4 text-sm text-gray-700">
                {move || match leads_needed() {
                    Some(leads) => view! {
                        <span>
                            "With your numbers, you only need "
                            <span class="font-semibold">{format!("{leads} booked lead(s)")}</span>
                            " to cover your monthly fee."
                        </span>
                    }
                    .into_view(),
                    None => view! {
                        <span>
                            "Enter a job value and close rate above zero to see your break-even."
                        </span>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}
