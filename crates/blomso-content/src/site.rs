//! Site metadata: canonical URLs, social cards, sitemap, web manifest, JSON-LD

use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Write;

/// Canonical origin of the site
pub const SITE_URL: &str = "https://blomso.com";

/// Site name used in titles and social cards
pub const SITE_NAME: &str = "Blomso";

/// Default description for the site and manifest
pub const SITE_DESCRIPTION: &str =
    "Soil data you can trust, ready for reporting and decisions.";

const ORGANIZATION_DESCRIPTION: &str = "Blomso unifies lab results and field context into a \
     source-linked soil record, then automates QC and reporting.";

/// A public page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Homepage
    Home,
    /// Platform description
    Platform,
    /// Traction and evidence
    Traction,
    /// Contact form
    Contact,
}

/// How often a page is expected to change, for the sitemap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    /// Weekly
    Weekly,
    /// Monthly
    Monthly,
}

impl ChangeFrequency {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

impl Page {
    /// Every page, in sitemap order
    pub const ALL: [Page; 4] = [Page::Home, Page::Platform, Page::Traction, Page::Contact];

    /// Path relative to the site origin; empty for the homepage
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Platform => "/platform",
            Page::Traction => "/traction",
            Page::Contact => "/contact",
        }
    }

    /// Parse a page name as used in API routes
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(Page::Home),
            "platform" => Some(Page::Platform),
            "traction" => Some(Page::Traction),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }

    /// Page title (the homepage title is used as-is)
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Blomso | Operational results, not promises",
            Page::Platform => "Platform",
            Page::Traction => "Traction",
            Page::Contact => "Contact",
        }
    }

    /// Meta description
    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "Soil data you can trust, ready for reporting and decisions. Blomso unifies lab results and field context into a source-linked soil record, then automates QC and reporting.",
            Page::Platform => "Audit-ready, source-linked soil and field data for reporting and decisions. Ingestion, QC, provenance, and export today.",
            Page::Traction => "Soil intelligence metrics and timeline from Blomso. Every number traces to its source.",
            Page::Contact => "Talk to Blomso as an investor or an operator.",
        }
    }

    fn change_frequency(&self) -> ChangeFrequency {
        match self {
            Page::Home | Page::Traction => ChangeFrequency::Weekly,
            Page::Platform | Page::Contact => ChangeFrequency::Monthly,
        }
    }

    fn priority(&self) -> f32 {
        match self {
            Page::Home => 1.0,
            Page::Platform | Page::Traction => 0.9,
            Page::Contact => 0.8,
        }
    }

    /// Full metadata for this page
    pub fn meta(&self) -> PageMeta {
        page_meta(self.path(), self.title(), self.description())
    }
}

/// Open Graph image reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    /// Image route
    pub url: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Alt text
    pub alt: String,
}

/// Open Graph metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    /// Full page title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Canonical URL
    pub url: String,
    /// Site name
    pub site_name: String,
    /// Always "website"
    #[serde(rename = "type")]
    pub kind: String,
    /// Locale
    pub locale: String,
    /// Card images
    pub images: Vec<OgImage>,
}

/// Twitter card metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    /// Card type
    pub card: String,
    /// Full page title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Card image routes
    pub images: Vec<String>,
}

/// Page-level Open Graph, Twitter and canonical metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Canonical URL
    pub canonical: String,
    /// Open Graph tags
    pub open_graph: OpenGraph,
    /// Twitter card tags
    pub twitter: TwitterCard,
}

/// Build page metadata; `path` starts with "/" or is empty for the homepage
pub fn page_meta(path: &str, title: &str, description: &str) -> PageMeta {
    let url = if path.is_empty() {
        format!("{}/", SITE_URL)
    } else {
        format!("{}{}", SITE_URL, path)
    };
    let full_title = if path.is_empty() {
        title.to_string()
    } else {
        format!("{} | {}", title, SITE_NAME)
    };

    PageMeta {
        canonical: url.clone(),
        open_graph: OpenGraph {
            title: full_title.clone(),
            description: description.to_string(),
            url,
            site_name: SITE_NAME.to_string(),
            kind: "website".to_string(),
            locale: "en_US".to_string(),
            images: vec![OgImage {
                url: "/opengraph-image".to_string(),
                width: 1200,
                height: 630,
                alt: format!("{} — A Biospheric Operating System rooted in the soil", SITE_NAME),
            }],
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            title: full_title,
            description: description.to_string(),
            images: vec!["/twitter-image".to_string()],
        },
    }
}

/// Render the sitemap; `last_modified` is a W3C date such as "2025-01-31"
pub fn sitemap_xml(last_modified: &str) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for page in Page::ALL {
        let loc = if page.path().is_empty() {
            SITE_URL.to_string()
        } else {
            format!("{}{}", SITE_URL, page.path())
        };
        // Writing to a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            loc,
            last_modified,
            page.change_frequency().as_str(),
            page.priority()
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Manifest icon entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestIcon {
    /// Icon path
    pub src: String,
    /// Sizes attribute
    pub sizes: String,
    /// MIME type
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Web app manifest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebManifest {
    /// App name
    pub name: String,
    /// Short name
    pub short_name: String,
    /// Description
    pub description: String,
    /// Start URL
    pub start_url: String,
    /// Display mode
    pub display: String,
    /// Background colour
    pub background_color: String,
    /// Theme colour (brand green)
    pub theme_color: String,
    /// Icons
    pub icons: Vec<ManifestIcon>,
}

/// The site's web manifest
pub fn web_manifest() -> WebManifest {
    WebManifest {
        name: SITE_NAME.to_string(),
        short_name: SITE_NAME.to_string(),
        description: SITE_DESCRIPTION.to_string(),
        start_url: "/".to_string(),
        display: "browser".to_string(),
        background_color: "#ffffff".to_string(),
        theme_color: "#3B7D28".to_string(),
        icons: vec![
            ManifestIcon {
                src: "/icon.svg".to_string(),
                sizes: "any".to_string(),
                mime_type: "image/svg+xml".to_string(),
            },
            ManifestIcon {
                src: "/favicon.ico".to_string(),
                sizes: "32x32".to_string(),
                mime_type: "image/x-icon".to_string(),
            },
        ],
    }
}

/// Organization and WebSite structured data
pub fn json_ld() -> Vec<Value> {
    let url = format!("{}/", SITE_URL);
    vec![
        json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": SITE_NAME,
            "url": url,
            "logo": format!("{}/icon.svg", SITE_URL),
            "description": ORGANIZATION_DESCRIPTION,
            "foundingDate": "2024",
            "sameAs": [],
        }),
        json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": SITE_NAME,
            "url": url,
        }),
    ]
}
