//! Marketing site components

mod cards;
mod faq;
mod footer;
mod nav;
mod roi;

pub use cards::*;
pub use faq::FaqAccordion;
pub use footer::Footer;
pub use nav::SiteNav;
pub use roi::RoiSnapshot;
