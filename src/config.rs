//! Site content. Everything here is immutable configuration rendered
//! verbatim by the page components.

pub const SITE_NAME: &str = "Metal Recycling Pro";
pub const TAGLINE: &str = "Your trusted partner in sustainable metal recycling";

pub const PHONE: &str = "(555) 123-4567";
pub const EMAIL: &str = "info@metalrecyclingpro.com";
pub const ADDRESS_LINES: [&str; 2] = ["123 Metal Street", "Recycling City, ST 12345"];

pub const FOOTER_NOTICE: &str = "© 2024 Metal Recycling Pro. All rights reserved.";

pub struct Feature {
    pub title: &'static str,
    pub blurb: &'static str,
    pub icon: &'static str,
    pub reveal_delay_ms: u32,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Best Prices",
        blurb: "Competitive rates for all your metal recycling needs",
        icon: "💲",
        reveal_delay_ms: 200,
    },
    Feature {
        title: "Quick Service",
        blurb: "Fast and efficient processing of your materials",
        icon: "🕐",
        reveal_delay_ms: 400,
    },
    Feature {
        title: "Eco-Friendly",
        blurb: "Sustainable recycling practices for a better future",
        icon: "♻",
        reveal_delay_ms: 600,
    },
];
