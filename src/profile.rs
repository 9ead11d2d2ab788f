//! Content model for the portfolio page.
//!
//! Everything the page displays lives here as plain data: the owner, the
//! section copy, the skills grid, the contact rows, and the navigation links.
//! The built-in default profile can be replaced by a TOML file referenced
//! from the app config.

use serde::{Deserialize, Serialize};

/// Page sections that navigation can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Hero section at the top of the page.
    Home,
    /// About section, including the skills grid.
    About,
    /// Contact section.
    Contact,
}

/// A navigation link shown in the header and in the overlay panel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavLink {
    /// Link caption.
    pub label: String,
    /// Section the link scrolls to.
    pub section: Section,
}

/// One card in the skills grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Technology name shown under the badge.
    pub name: String,
}

impl SkillEntry {
    /// Single-character badge glyph for the card.
    pub fn badge(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

/// One row in the contact section.
///
/// `target` is the URL opened on activation. Rows without a target (the
/// location row, for instance) render as plain, non-interactive rows.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactEntry {
    /// Decorative glyph shown left of the row.
    pub icon: String,
    /// Small caption above the value.
    pub label: String,
    /// The value itself (address, number, city).
    pub value: String,
    /// Optional URL opened when the row is activated.
    #[serde(default)]
    pub target: Option<String>,
}

/// Footer attribution line (label + external link).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Attribution {
    /// Name of the attributed party.
    pub label: String,
    /// External URL opened when the attribution is activated.
    pub url: String,
}

/// All content rendered by the page.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Owner's display name (brand text and hero headline).
    pub owner_name: String,
    /// Role line shown under the name in the hero.
    pub role: String,
    /// Window title.
    pub window_title: String,
    /// Hero tagline paragraph.
    pub tagline: String,
    /// Caption of the hero call-to-action targeting the contact section.
    pub cta_label: String,
    /// About section heading.
    pub about_heading: String,
    /// About section lead line.
    pub about_lead: String,
    /// About section body paragraphs.
    pub about_paragraphs: Vec<String>,
    /// Heading above the skills grid.
    pub skills_heading: String,
    /// Skills grid entries.
    pub skills: Vec<SkillEntry>,
    /// Contact section heading.
    pub contact_heading: String,
    /// Contact section lead line.
    pub contact_lead: String,
    /// Contact rows.
    pub contacts: Vec<ContactEntry>,
    /// Footer attribution.
    pub attribution: Attribution,
    /// Navigation links (header inline and overlay panel).
    pub nav_links: Vec<NavLink>,
}

impl Profile {
    /// Monogram initials for the window icon: first letters of the owner's
    /// given and family names, uppercased, at most two.
    pub fn initials(&self) -> String {
        self.owner_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .take(2)
            .collect()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            owner_name: "Jan Novák".into(),
            role: "Web Developer".into(),
            window_title: "Jan Novák | Web Developer & UI/UX Designer".into(),
            tagline: "Transformuji myšlenky v poutavé digitální zážitky. Specializuji se na \
                      tvorbu rychlých, responzivních a intuitivních webových aplikací."
                .into(),
            cta_label: "Kontaktujte mě".into(),
            about_heading: "O mně".into(),
            about_lead: "Vášeň pro kód, oko pro design.".into(),
            about_paragraphs: vec![
                "S odhodláním pro čistý kód a pixel-perfect design vytvářím weby a aplikace, \
                 které nejen skvěle vypadají, ale jsou především funkční, rychlé a uživatelsky \
                 přívětivé. Mým hlavním cílem je pomáhat firmám a jednotlivcům uspět v \
                 digitálním světě prostřednictvím kvalitních a na míru šitých řešení."
                    .into(),
                "Proces mé práce pokrývá celý životní cyklus projektu – od prvotního nápadu, \
                 přes návrh uživatelského rozhraní (UI) a zážitku (UX), až po finální vývoj a \
                 nasazení."
                    .into(),
            ],
            skills_heading: "Technologie, se kterými pracuji".into(),
            skills: vec![
                SkillEntry {
                    name: "React".into(),
                },
                SkillEntry {
                    name: "Next.js".into(),
                },
                SkillEntry {
                    name: "TypeScript".into(),
                },
                SkillEntry {
                    name: "Tailwind CSS".into(),
                },
                SkillEntry {
                    name: "Figma".into(),
                },
            ],
            contact_heading: "Spojme se".into(),
            contact_lead: "Máte projekt nebo nápad? Rád si o něm poslechnu. Neváhejte mě \
                           kontaktovat."
                .into(),
            contacts: vec![
                ContactEntry {
                    icon: "✉".into(),
                    label: "Email".into(),
                    value: "jan.novak@priklad.cz".into(),
                    target: Some("mailto:jan.novak@priklad.cz".into()),
                },
                ContactEntry {
                    icon: "☎".into(),
                    label: "Telefon".into(),
                    value: "+420 123 456 789".into(),
                    target: Some("tel:+420123456789".into()),
                },
                ContactEntry {
                    icon: "📍".into(),
                    label: "Lokalita".into(),
                    value: "Praha, Česká republika".into(),
                    target: None,
                },
            ],
            attribution: Attribution {
                label: "DigitalFusion".into(),
                url: "https://digitalfusion.cz".into(),
            },
            nav_links: vec![
                NavLink {
                    label: "O mně".into(),
                    section: Section::About,
                },
                NavLink {
                    label: "Kontakt".into(),
                    section: Section::Contact,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letters_of_two_names() {
        let profile = Profile::default();
        assert_eq!(profile.initials(), "JN");
    }

    #[test]
    fn initials_cap_at_two_letters() {
        let profile = Profile {
            owner_name: "anna marie de la cruz".into(),
            ..Profile::default()
        };
        assert_eq!(profile.initials(), "AM");
    }

    #[test]
    fn default_location_row_has_no_target() {
        let profile = Profile::default();
        let location = profile
            .contacts
            .iter()
            .find(|entry| entry.label == "Lokalita")
            .unwrap();
        assert!(location.target.is_none());
    }

    #[test]
    fn badge_uppercases_first_char() {
        let entry = SkillEntry {
            name: "egui".into(),
        };
        assert_eq!(entry.badge(), "E");
    }
}
