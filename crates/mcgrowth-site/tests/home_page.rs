#![cfg(feature = "ssr")]

//! Server-side rendering checks for the landing page.

use mcgrowth_site::pages::HomePage;

fn render_home() -> String {
    leptos::ssr::render_to_string(|| leptos::view! { <HomePage/> }).to_string()
}

#[test]
fn home_page_renders_every_section() {
    let html = render_home();

    assert!(html.contains("Never miss another roofing lead"));
    assert!(html.contains("Built for roofers"));
    assert!(html.contains("How it works"));
    assert!(html.contains("ROI Snapshot"));
    assert!(html.contains("Simple pricing"));
    assert!(html.contains("FAQ"));
    assert!(html.contains("Book a demo"));
    assert!(html.contains("mcgrowth0@gmail.com"));
}

#[test]
fn home_page_anchors_match_the_nav_links() {
    let html = render_home();

    for anchor in ["features", "how", "pricing", "faq", "demo", "contact"] {
        assert!(
            html.contains(&format!("id=\"{anchor}\"")),
            "missing #{anchor} section"
        );
    }
}

#[test]
fn roi_card_defaults_break_even_on_one_lead() {
    let html = render_home();

    // 8000 / 500 / 35% defaults: ceil(500 / 2800) = 1
    assert!(html.contains("1 booked lead(s)"));
    assert!(!html.contains("Enter a job value and close rate above zero"));
}
