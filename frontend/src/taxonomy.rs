use shared::ClassificationResponse;

/// One entry of the fixed diagnostic registry.
///
/// `badge_class` styles the diagnosis badge and `panel_class` the detail
/// panel; the two are independent so the palette can differ between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticCategory {
    pub keyword: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub badge_class: &'static str,
    pub panel_class: &'static str,
}

/// Checked in order; the first keyword contained in the normalized label
/// wins. Substring matching on purpose: the remote service's label
/// vocabulary is not pinned down, so "Healthy", "healthy cat" and
/// "HEALTHY" must all land on the same category.
pub const CATEGORIES: [DiagnosticCategory; 4] = [
    DiagnosticCategory {
        keyword: "health",
        title: "Healthy",
        description: "The skin is in a healthy, normal condition. No significant signs of skin disease were found.",
        badge_class: "badge-green",
        panel_class: "panel-green",
    },
    DiagnosticCategory {
        keyword: "flea",
        title: "Flea Allergy",
        description: "Flea allergy detected, causing itching and skin irritation. Flea treatment and a consultation with a veterinarian are recommended.",
        badge_class: "badge-yellow",
        panel_class: "panel-yellow",
    },
    DiagnosticCategory {
        keyword: "ringworm",
        title: "Ringworm",
        description: "Fungal infection (ringworm) detected, causing circular patches on the skin. Consult a veterinarian promptly for antifungal treatment.",
        badge_class: "badge-red",
        panel_class: "panel-red",
    },
    DiagnosticCategory {
        keyword: "scabies",
        title: "Scabies",
        description: "Mite infection (scabies) detected, causing severe itching and fur loss. Requires immediate medical care from a veterinarian.",
        badge_class: "badge-purple",
        panel_class: "panel-purple",
    },
];

/// Synthetic entry used when no keyword matches, including the empty label.
pub const UNRECOGNIZED: DiagnosticCategory = DiagnosticCategory {
    keyword: "",
    title: "Unrecognized",
    description: "classification result could not be categorized with certainty; consult a veterinarian for further examination.",
    badge_class: "badge-gray",
    panel_class: "panel-gray",
};

/// Display-only bucketing of the confidence score. Never influences which
/// category is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence >= 0.8 {
            Self::High
        } else if confidence >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "tier-high",
            Self::Medium => "tier-medium",
            Self::Low => "tier-low",
        }
    }
}

/// Fully resolved view of one classification outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDiagnostic {
    pub title: &'static str,
    pub description: &'static str,
    pub badge_class: &'static str,
    pub panel_class: &'static str,
    pub tier: ConfidenceTier,
}

/// Maps a raw response onto the registry. Total: an unknown label degrades
/// to [`UNRECOGNIZED`] rather than failing.
pub fn resolve(response: &ClassificationResponse) -> ResolvedDiagnostic {
    let label = response.prediction.trim().to_lowercase();
    let category = CATEGORIES
        .iter()
        .find(|category| label.contains(category.keyword))
        .unwrap_or(&UNRECOGNIZED);

    ResolvedDiagnostic {
        title: category.title,
        description: category.description,
        badge_class: category.badge_class,
        panel_class: category.panel_class,
        tier: ConfidenceTier::from_confidence(response.confidence),
    }
}
