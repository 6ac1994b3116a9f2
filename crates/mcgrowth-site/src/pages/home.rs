//! Landing page

use leptos::*;

use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section id="home" class="pt-12 pb-16 sm:pb-24">
                <div class="container mx-auto px-4">
                    <div class="grid items-center gap-10 md:grid-cols-2">
                        <div class="space-y-6">
                            <Badge>"Roofing • AI Follow-Up • Bookings"</Badge>
                            <h1 class="text-4xl font-bold tracking-tight sm:text-5xl text-gray-900">
                                "Never miss another roofing lead"
                            </h1>
                            <p class="text-lg text-gray-600">
                                "MCGrowth is your 24/7 AI receptionist for roofers. It texts back "
                                "missed calls in seconds, qualifies homeowners, and books estimates "
                                "straight into your calendar."
                            </p>
                            <div class="flex flex-wrap gap-3">
                                <a href="#demo" class="px-6 py-3 bg-gray-900 hover:bg-gray-800 text-white font-semibold rounded-2xl transition">
                                    "See live demo"
                                </a>
                                <a href="#features" class="px-6 py-3 border border-gray-300 hover:bg-gray-50 text-gray-900 font-semibold rounded-2xl transition">
                                    "Explore features"
                                </a>
                            </div>
                            <div class="flex items-center gap-6 pt-2 text-sm text-gray-600">
                                <span>"🛡 Month-to-month"</span>
                                <span>"⏱ Go live in days"</span>
                            </div>
                        </div>

                        <div class="bg-white rounded-2xl border shadow-sm p-6">
                            <h3 class="text-lg font-semibold text-gray-900 mb-4">"What your AI does"</h3>
                            <div class="grid gap-4 sm:grid-cols-2">
                                <HighlightRow
                                    icon="📞"
                                    title="Instant response"
                                    description="Texts back missed calls & web leads in seconds."
                                />
                                <HighlightRow
                                    icon="💬"
                                    title="Smart follow-up"
                                    description="Persistent sequences until the homeowner replies."
                                />
                                <HighlightRow
                                    icon="📅"
                                    title="Books estimates"
                                    description="Schedules to Google/Outlook with reminders."
                                />
                                <HighlightRow
                                    icon="⚡"
                                    title="Qualifies leads"
                                    description="Repair vs replace, urgency, insurance, address."
                                />
                            </div>
                        </div>
                    </div>

                    // Stats strip
                    <div class="mt-12 grid grid-cols-2 gap-6 rounded-2xl border p-6 sm:grid-cols-4">
                        <StatCard value="24/7" label="Lead coverage"/>
                        <StatCard value=">90%" label="Faster first response"/>
                        <StatCard value="5–10+" label="Extra jobs / mo."/>
                        <StatCard value="1 job" label="Typical breakeven"/>
                    </div>
                </div>
            </section>

            // Features
            <section id="features" class="py-16 sm:py-24">
                <div class="container mx-auto px-4">
                    <div class="mb-10 text-center">
                        <h2 class="text-3xl font-bold tracking-tight text-gray-900">"Built for roofers"</h2>
                        <p class="mx-auto mt-2 max-w-2xl text-gray-600">
                            "Purpose-built playbooks for storm damage, leaks, and full replacements. "
                            "Works alongside your team, nights, weekends, and holidays included."
                        </p>
                    </div>
                    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        <FeatureCard
                            icon="📞"
                            title="Missed-call capture"
                            description="Turn every voicemail into a live text conversation in seconds."
                        />
                        <FeatureCard
                            icon="💬"
                            title="Automated nurture"
                            description="Multi-touch sequences keep prospects warm until they book."
                        />
                        <FeatureCard
                            icon="📅"
                            title="Calendar booking"
                            description="Two-way sync with Google/Outlook, confirmations & reminders."
                        />
                        <FeatureCard
                            icon="⚡"
                            title="Lead qualification"
                            description="Collects photos, addresses, insurance and job type automatically."
                        />
                        <FeatureCard
                            icon="🛡"
                            title="Spam filtering"
                            description="Routes real homeowners to you, filters junk and robocalls."
                        />
                        <FeatureCard
                            icon="⏱"
                            title="After-hours coverage"
                            description="Win jobs your competitors miss while they're closed."
                        />
                    </div>
                </div>
            </section>

            // How it works + ROI
            <section id="how" class="py-16 sm:py-24 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid gap-8 lg:grid-cols-2">
                        <div class="space-y-4">
                            <h3 class="text-2xl font-semibold text-gray-900">"How it works"</h3>
                            <ol class="space-y-3 text-sm text-gray-700">
                                <StepItem text="We connect your phone number & web forms to the AI."/>
                                <StepItem text="AI texts back missed calls instantly and qualifies the homeowner."/>
                                <StepItem text="It books an estimate on your calendar and sends reminders."/>
                                <StepItem text="You get a clean handoff with all details in one place."/>
                            </ol>
                            <div class="rounded-2xl border bg-white p-4 text-sm text-gray-600">
                                "Works with your existing tools. No new apps for your crew."
                            </div>
                        </div>
                        <RoiSnapshot/>
                    </div>
                </div>
            </section>

            // Pricing
            <section id="pricing" class="py-16 sm:py-24">
                <div class="container mx-auto px-4">
                    <div class="mb-10 text-center">
                        <h3 class="text-2xl font-semibold text-gray-900">"Simple pricing"</h3>
                        <p class="mt-2 text-gray-600">
                            "$500 setup, then $500/month. Month-to-month. "
                            "Most partners break even with one additional job."
                        </p>
                    </div>
                    <div class="mx-auto max-w-md">
                        <div class="bg-white rounded-2xl border shadow-sm p-6">
                            <h4 class="text-lg font-semibold text-gray-900 mb-4">"MCGrowth Plan"</h4>
                            <ul class="list-inside list-disc space-y-2 text-sm text-gray-700">
                                <li>"Missed-call SMS + automated follow-ups"</li>
                                <li>"Calendar booking + confirmations & reminders"</li>
                                <li>"Lead qualification (repair vs replace, insurance, photos)"</li>
                                <li>"Old-lead re-engagement campaigns"</li>
                                <li>"Email/text handoff + monthly summary"</li>
                            </ul>
                            <div class="flex items-end justify-between pt-6">
                                <div>
                                    <div class="text-3xl font-bold text-gray-900">
                                        "$500"
                                        <span class="text-base font-normal text-gray-500">"/mo"</span>
                                    </div>
                                    <div class="text-xs text-gray-500">"+$500 one-time setup"</div>
                                </div>
                                <a href="#demo" class="px-5 py-2 bg-gray-900 hover:bg-gray-800 text-white font-semibold rounded-2xl transition">
                                    "Start"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // FAQ
            <section id="faq" class="py-16 sm:py-24 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="mb-8 text-center">
                        <h3 class="text-2xl font-semibold text-gray-900">"FAQ"</h3>
                    </div>
                    <div class="mx-auto max-w-3xl">
                        <FaqAccordion entries=vec![
                            (
                                "Does this replace my receptionist?",
                                "No, it catches overflow and after-hours messages so nothing slips \
                                 through. Your team stays focused on jobs while AI handles first \
                                 response and booking.",
                            ),
                            (
                                "How fast can we launch?",
                                "Most roofing partners go live within a few days. We plug into your \
                                 calendar, connect your numbers/forms, and load scripts for your \
                                 services.",
                            ),
                            (
                                "What about spam and tire-kickers?",
                                "AI qualifies each inquiry: job type, address, urgency, insurance. \
                                 Junk gets filtered. Real homeowners get booked.",
                            ),
                            (
                                "Is there a contract?",
                                "Month-to-month. Cancel anytime. Our goal is to earn your business \
                                 every month by booking jobs.",
                            ),
                        ]/>
                    </div>
                </div>
            </section>

            // Demo + contact
            <section id="demo" class="py-16 sm:py-24">
                <div class="container mx-auto px-4">
                    <div class="grid gap-8 md:grid-cols-2">
                        <div class="bg-white rounded-2xl border shadow-sm p-6">
                            <h4 class="text-lg font-semibold text-gray-900 mb-4">"Book a demo"</h4>
                            <div class="space-y-4 text-sm text-gray-700">
                                <p>
                                    "See exactly how MCGrowth captures missed calls and books "
                                    "estimates for your roofing business."
                                </p>
                                <a
                                    href="https://calendly.com/mcgrowth0/new-meeting"
                                    target="_blank"
                                    rel="noreferrer"
                                    class="inline-block px-5 py-2 bg-gray-900 hover:bg-gray-800 text-white font-semibold rounded-2xl transition"
                                >
                                    "Open Calendly"
                                </a>
                                <div class="text-gray-500">"No pressure. 5–10 minutes."</div>
                            </div>
                        </div>

                        <div id="contact" class="bg-white rounded-2xl border shadow-sm p-6">
                            <h4 class="text-lg font-semibold text-gray-900 mb-4">"Contact"</h4>
                            <div class="space-y-3 text-sm text-gray-700">
                                <div><span class="font-medium">"Email: "</span>"mcgrowth0@gmail.com"</div>
                                <div><span class="font-medium">"Phone: "</span>"+1 (415) 518-0393"</div>
                                <div><span class="font-medium">"Service area: "</span>"United States"</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
