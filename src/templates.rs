//! Industry design templates.
//!
//! The catalog is immutable data shared by every request. [`select_template`]
//! maps a free-text industry (and optional website type) to one entry using an
//! ordered list of substring rules; the first rule that matches wins.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub header_style: &'static str,
    pub hero_style: &'static str,
    pub section_layout: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_light: &'static str,
    pub border: &'static str,
    pub highlight: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSizes {
    pub h1: &'static str,
    pub h2: &'static str,
    pub h3: &'static str,
    pub body: &'static str,
    pub small: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Typography {
    pub headings: &'static str,
    pub body: &'static str,
    pub sizes: FontSizes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateSection {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub layout: &'static str,
    pub style: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    pub section_padding: &'static str,
    pub container_padding: &'static str,
    pub element_spacing: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub template_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub layout: Layout,
    pub color_scheme: ColorScheme,
    pub typography: Typography,
    pub sections: &'static [TemplateSection],
    pub spacing: Spacing,
}

const HEADING_SIZES: FontSizes = FontSizes {
    h1: "3.5rem",
    h2: "2.5rem",
    h3: "1.75rem",
    body: "1rem",
    small: "0.875rem",
};

pub static RESTAURANT: Template = Template {
    template_id: "restaurant",
    name: "Restaurant & Hospitality",
    description: "Warm, appetite-driven layout with menu highlights and reservations",
    layout: Layout {
        kind: "full-width",
        header_style: "transparent-overlay",
        hero_style: "full-screen-image",
        section_layout: "alternating",
    },
    color_scheme: ColorScheme {
        primary: "#8B2E1F",
        secondary: "#D4A373",
        accent: "#E9C46A",
        background: "#FFFBF5",
        surface: "#FFFFFF",
        text: "#2B1D14",
        text_light: "#7A6A5D",
        border: "#EADBC8",
        highlight: "#F4A261",
    },
    typography: Typography {
        headings: "'Playfair Display', serif",
        body: "'Lato', sans-serif",
        sizes: HEADING_SIZES,
    },
    sections: &[
        TemplateSection { name: "Hero", kind: "hero", layout: "full-screen", style: "image-overlay" },
        TemplateSection { name: "Our Story", kind: "about", layout: "split", style: "warm" },
        TemplateSection { name: "Menu Highlights", kind: "menu", layout: "grid", style: "cards" },
        TemplateSection { name: "Reservations", kind: "booking", layout: "centered", style: "form" },
        TemplateSection { name: "Visit Us", kind: "contact", layout: "split", style: "map" },
    ],
    spacing: Spacing {
        section_padding: "100px 0",
        container_padding: "0 24px",
        element_spacing: "32px",
    },
};

pub static ECOMMERCE: Template = Template {
    template_id: "ecommerce",
    name: "E-commerce & Retail",
    description: "Conversion-focused storefront with product grids and trust signals",
    layout: Layout {
        kind: "boxed",
        header_style: "sticky-with-search",
        hero_style: "carousel",
        section_layout: "grid",
    },
    color_scheme: ColorScheme {
        primary: "#1F3A93",
        secondary: "#F39C12",
        accent: "#E74C3C",
        background: "#FFFFFF",
        surface: "#F7F9FC",
        text: "#1C2331",
        text_light: "#6B7280",
        border: "#E5E7EB",
        highlight: "#27AE60",
    },
    typography: Typography {
        headings: "'Poppins', sans-serif",
        body: "'Inter', sans-serif",
        sizes: HEADING_SIZES,
    },
    sections: &[
        TemplateSection { name: "Hero", kind: "hero", layout: "carousel", style: "promotional" },
        TemplateSection { name: "Featured Products", kind: "products", layout: "grid", style: "cards" },
        TemplateSection { name: "Categories", kind: "categories", layout: "tiles", style: "image" },
        TemplateSection { name: "Why Shop With Us", kind: "benefits", layout: "icons", style: "minimal" },
        TemplateSection { name: "Customer Reviews", kind: "testimonials", layout: "slider", style: "cards" },
    ],
    spacing: Spacing {
        section_padding: "64px 0",
        container_padding: "0 16px",
        element_spacing: "24px",
    },
};

pub static HEALTHCARE: Template = Template {
    template_id: "healthcare",
    name: "Healthcare & Medical",
    description: "Calm, trustworthy layout with services, practitioners and appointments",
    layout: Layout {
        kind: "boxed",
        header_style: "solid-with-cta",
        hero_style: "split-image",
        section_layout: "stacked",
    },
    color_scheme: ColorScheme {
        primary: "#0E7490",
        secondary: "#22C55E",
        accent: "#38BDF8",
        background: "#F8FAFC",
        surface: "#FFFFFF",
        text: "#0F172A",
        text_light: "#64748B",
        border: "#E2E8F0",
        highlight: "#14B8A6",
    },
    typography: Typography {
        headings: "'Nunito Sans', sans-serif",
        body: "'Open Sans', sans-serif",
        sizes: HEADING_SIZES,
    },
    sections: &[
        TemplateSection { name: "Hero", kind: "hero", layout: "split", style: "calm" },
        TemplateSection { name: "Our Services", kind: "services", layout: "grid", style: "icons" },
        TemplateSection { name: "Meet Our Team", kind: "team", layout: "grid", style: "portraits" },
        TemplateSection { name: "Book an Appointment", kind: "booking", layout: "centered", style: "form" },
        TemplateSection { name: "Patient Stories", kind: "testimonials", layout: "slider", style: "quotes" },
    ],
    spacing: Spacing {
        section_padding: "80px 0",
        container_padding: "0 24px",
        element_spacing: "28px",
    },
};

pub static CREATIVE: Template = Template {
    template_id: "creative",
    name: "Creative & Agency",
    description: "Bold, portfolio-first layout with expressive typography",
    layout: Layout {
        kind: "full-width",
        header_style: "minimal",
        hero_style: "typographic",
        section_layout: "masonry",
    },
    color_scheme: ColorScheme {
        primary: "#111111",
        secondary: "#FF3366",
        accent: "#7C3AED",
        background: "#FAFAFA",
        surface: "#FFFFFF",
        text: "#111111",
        text_light: "#6E6E73",
        border: "#E4E4E7",
        highlight: "#FACC15",
    },
    typography: Typography {
        headings: "'Space Grotesk', sans-serif",
        body: "'DM Sans', sans-serif",
        sizes: FontSizes {
            h1: "4.5rem",
            h2: "3rem",
            h3: "2rem",
            body: "1.05rem",
            small: "0.875rem",
        },
    },
    sections: &[
        TemplateSection { name: "Hero", kind: "hero", layout: "full-screen", style: "typographic" },
        TemplateSection { name: "Selected Work", kind: "portfolio", layout: "masonry", style: "image" },
        TemplateSection { name: "What We Do", kind: "services", layout: "list", style: "bold" },
        TemplateSection { name: "Clients", kind: "logos", layout: "row", style: "monochrome" },
        TemplateSection { name: "Let's Talk", kind: "contact", layout: "centered", style: "statement" },
    ],
    spacing: Spacing {
        section_padding: "120px 0",
        container_padding: "0 32px",
        element_spacing: "40px",
    },
};

pub static TECH: Template = Template {
    template_id: "tech",
    name: "Technology & SaaS",
    description: "Product-led layout with feature grids, pricing and integrations",
    layout: Layout {
        kind: "boxed",
        header_style: "sticky-transparent",
        hero_style: "product-screenshot",
        section_layout: "feature-grid",
    },
    color_scheme: ColorScheme {
        primary: "#4F46E5",
        secondary: "#06B6D4",
        accent: "#F472B6",
        background: "#0B1020",
        surface: "#111827",
        text: "#F9FAFB",
        text_light: "#9CA3AF",
        border: "#1F2937",
        highlight: "#A78BFA",
    },
    typography: Typography {
        headings: "'Inter', sans-serif",
        body: "'Inter', sans-serif",
        sizes: HEADING_SIZES,
    },
    sections: &[
        TemplateSection { name: "Hero", kind: "hero", layout: "split", style: "gradient" },
        TemplateSection { name: "Features", kind: "features", layout: "grid", style: "icons" },
        TemplateSection { name: "How It Works", kind: "process", layout: "steps", style: "numbered" },
        TemplateSection { name: "Pricing", kind: "pricing", layout: "columns", style: "cards" },
        TemplateSection { name: "Integrations", kind: "logos", layout: "grid", style: "muted" },
    ],
    spacing: Spacing {
        section_padding: "96px 0",
        container_padding: "0 24px",
        element_spacing: "32px",
    },
};

pub static REAL_ESTATE: Template = Template {
    template_id: "real-estate",
    name: "Real Estate & Property",
    description: "Listing-driven layout with search, featured properties and agents",
    layout: Layout {
        kind: "full-width",
        header_style: "solid",
        hero_style: "search-overlay",
        section_layout: "grid",
    },
    color_scheme: ColorScheme {
        primary: "#1E3A5F",
        secondary: "#C9A227",
        accent: "#2A9D8F",
        background: "#FFFFFF",
        surface: "#F5F7FA",
        text: "#1F2933",
        text_light: "#616E7C",
        border: "#D9E2EC",
        highlight: "#E76F51",
    },
    typography: Typography {
        headings: "'Montserrat', sans-serif",
        body: "'Source Sans Pro', sans-serif",
        sizes: HEADING_SIZES,
    },
    sections: &[
        TemplateSection { name: "Hero", kind: "hero", layout: "full-screen", style: "search" },
        TemplateSection { name: "Featured Listings", kind: "listings", layout: "grid", style: "cards" },
        TemplateSection { name: "Neighborhoods", kind: "locations", layout: "tiles", style: "image" },
        TemplateSection { name: "Our Agents", kind: "team", layout: "grid", style: "portraits" },
        TemplateSection { name: "Get in Touch", kind: "contact", layout: "split", style: "form" },
    ],
    spacing: Spacing {
        section_padding: "80px 0",
        container_padding: "0 24px",
        element_spacing: "24px",
    },
};

pub static PROFESSIONAL: Template = Template {
    template_id: "professional",
    name: "Professional Services",
    description: "Clean corporate layout suited to consultancies and service firms",
    layout: Layout {
        kind: "boxed",
        header_style: "solid-with-cta",
        hero_style: "split-image",
        section_layout: "stacked",
    },
    color_scheme: ColorScheme {
        primary: "#1D4ED8",
        secondary: "#0F172A",
        accent: "#F59E0B",
        background: "#FFFFFF",
        surface: "#F8FAFC",
        text: "#111827",
        text_light: "#6B7280",
        border: "#E5E7EB",
        highlight: "#10B981",
    },
    typography: Typography {
        headings: "'Roboto Slab', serif",
        body: "'Roboto', sans-serif",
        sizes: HEADING_SIZES,
    },
    sections: &[
        TemplateSection { name: "Hero", kind: "hero", layout: "split", style: "corporate" },
        TemplateSection { name: "About", kind: "about", layout: "split", style: "clean" },
        TemplateSection { name: "Services", kind: "services", layout: "grid", style: "cards" },
        TemplateSection { name: "Testimonials", kind: "testimonials", layout: "slider", style: "quotes" },
        TemplateSection { name: "Contact", kind: "contact", layout: "split", style: "form" },
    ],
    spacing: Spacing {
        section_padding: "80px 0",
        container_padding: "0 24px",
        element_spacing: "24px",
    },
};

/// Every template, industry-specific ones first and the default last.
pub static CATALOG: [&Template; 7] = [
    &RESTAURANT,
    &ECOMMERCE,
    &HEALTHCARE,
    &CREATIVE,
    &TECH,
    &REAL_ESTATE,
    &PROFESSIONAL,
];

pub fn all() -> &'static [&'static Template] {
    &CATALOG
}

pub fn find(template_id: &str) -> Option<&'static Template> {
    CATALOG.iter().copied().find(|t| t.template_id == template_id)
}

/// Picks the template for an industry. Never fails: unmatched input gets
/// the professional template.
pub fn select_template(industry: &str, website_type: Option<&str>) -> &'static Template {
    let industry = industry.to_lowercase();
    let website_type = website_type.unwrap_or_default().to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| industry.contains(n));

    if has(&["restaurant", "food", "cafe"]) {
        &RESTAURANT
    } else if has(&["ecommerce", "retail", "shop"]) || website_type.contains("ecommerce") {
        &ECOMMERCE
    } else if has(&["health", "medical", "doctor", "clinic"]) {
        &HEALTHCARE
    } else if has(&["creative", "design", "portfolio", "agency"]) {
        &CREATIVE
    } else if has(&["tech", "software", "saas", "app"]) {
        &TECH
    } else if has(&["real estate", "property", "realtor"]) {
        &REAL_ESTATE
    } else {
        &PROFESSIONAL
    }
}
