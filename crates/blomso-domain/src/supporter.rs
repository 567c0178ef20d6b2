//! Supporters - partner and program logos shown in the trust band

use serde::{Deserialize, Serialize};

/// Display band a supporter is grouped into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupporterBand {
    /// Official partners
    Partners,

    /// Accelerators and startup programs
    Programs,

    /// Wider ecosystem (universities, affiliations)
    Ecosystem,
}

impl SupporterBand {
    /// Every band, in display order
    pub const ALL: [SupporterBand; 3] = [
        SupporterBand::Partners,
        SupporterBand::Programs,
        SupporterBand::Ecosystem,
    ];

    /// Get the band name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SupporterBand::Partners => "partners",
            SupporterBand::Programs => "programs",
            SupporterBand::Ecosystem => "ecosystem",
        }
    }

    /// Column heading shown above the band
    pub fn label(&self) -> &'static str {
        match self {
            SupporterBand::Partners => "Official Partners",
            SupporterBand::Programs => "Programs",
            SupporterBand::Ecosystem => "Ecosystem",
        }
    }
}

/// A confirmed supporter, rendered as a logo
///
/// Every entry in the catalog is treated as confirmed and shown publicly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supporter {
    /// Unique identifier
    pub id: String,

    /// Organisation name
    pub name: String,

    /// Optional link to the organisation's homepage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Display band
    pub band: SupporterBand,

    /// Logo path served from the public assets
    pub logo: String,

    /// Light artwork that needs inverting on light backgrounds
    #[serde(default)]
    pub invert_on_light: bool,

    /// Accessible label override for unlinked logos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,

    /// Short relationship description appended to the link label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_label: Option<String>,
}

impl Supporter {
    /// Accessible label for the outbound logo link
    pub fn link_label(&self) -> String {
        match self.relationship_label.as_deref() {
            Some(relationship) if !relationship.is_empty() => {
                format!("{}, {} (opens in a new tab)", self.name, relationship)
            }
            _ => format!("{} (opens in a new tab)", self.name),
        }
    }

    /// Alt text for the logo image
    pub fn alt_text(&self) -> String {
        format!("{} logo", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supporter(relationship_label: Option<&str>) -> Supporter {
        Supporter {
            id: "bayer".to_string(),
            name: "Bayer".to_string(),
            href: Some("https://www.bayer.com/".to_string()),
            band: SupporterBand::Partners,
            logo: "/partners/Logo_Bayer.png".to_string(),
            invert_on_light: false,
            aria_label: None,
            relationship_label: relationship_label.map(str::to_string),
        }
    }

    #[test]
    fn test_link_label() {
        assert_eq!(supporter(None).link_label(), "Bayer (opens in a new tab)");
        assert_eq!(
            supporter(Some("Official Partner")).link_label(),
            "Bayer, Official Partner (opens in a new tab)"
        );
        assert_eq!(supporter(Some("")).link_label(), "Bayer (opens in a new tab)");
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(SupporterBand::Partners.label(), "Official Partners");
        assert_eq!(SupporterBand::Programs.label(), "Programs");
        assert_eq!(SupporterBand::Ecosystem.label(), "Ecosystem");
    }
}
