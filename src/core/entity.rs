use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::AppError;

/// Storefront entity types that share the soft-delete lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Blog,
    Puja,
    Booking,
    Category,
    Bracelet,
    Rudraksha,
    ParticipationForm,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Blog,
        EntityKind::Puja,
        EntityKind::Booking,
        EntityKind::Category,
        EntityKind::Bracelet,
        EntityKind::Rudraksha,
        EntityKind::ParticipationForm,
    ];

    /// Stable identifier used on the command line and in route override files
    pub fn slug(&self) -> &'static str {
        match self {
            EntityKind::Blog => "blogs",
            EntityKind::Puja => "pujas",
            EntityKind::Booking => "bookings",
            EntityKind::Category => "categories",
            EntityKind::Bracelet => "bracelets",
            EntityKind::Rudraksha => "rudraksha",
            EntityKind::ParticipationForm => "participation-forms",
        }
    }

    /// Human label for notifications, e.g. "Blog restored"
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Blog => "Blog",
            EntityKind::Puja => "Puja",
            EntityKind::Booking => "Booking",
            EntityKind::Category => "Category",
            EntityKind::Bracelet => "Bracelet",
            EntityKind::Rudraksha => "Rudraksha",
            EntityKind::ParticipationForm => "Participation form",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for EntityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "blog" | "blogs" => EntityKind::Blog,
            "puja" | "pujas" => EntityKind::Puja,
            "booking" | "bookings" => EntityKind::Booking,
            "category" | "categories" => EntityKind::Category,
            "bracelet" | "bracelets" => EntityKind::Bracelet,
            "rudraksha" | "rudrakshas" => EntityKind::Rudraksha,
            "participation-form" | "participation-forms" | "puja-form" | "puja-forms" => {
                EntityKind::ParticipationForm
            }
            _ => {
                return Err(AppError::validation(format!(
                    "Unknown entity '{}'; expected one of: {}",
                    s,
                    EntityKind::ALL
                        .iter()
                        .map(|k| k.slug())
                        .collect::<Vec<_>>()
                        .join(", ")
                )))
            }
        };
        Ok(kind)
    }
}
