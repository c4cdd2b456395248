//! Canonical view-model types for the Nyxta site.
//!
//! These are the single, always-fully-defined shapes the rest of the
//! application is written against. The variable "raw" shapes returned by
//! the backend live in `nyxta-api` and are converted here by its
//! normalizer; nothing downstream of that boundary should ever see a raw
//! record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named room-sharing tier (e.g., `"4 sharing"`) and its monthly price
/// in rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRate {
    pub title: String,
    pub rate_per_month: i64,
}

/// A nearby point of interest used as a marketing/distance callout on a
/// branch page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPerk {
    pub title: String,
    pub distance: String,
    pub time_to_reach: String,
}

/// A single hostel branch, normalized for listing and detail pages.
///
/// Field guarantees:
/// - `branch_number` and `place` are never empty.
/// - `phone`, `address`, `location`, `description`, `image` and
///   `hero_image` are always present (empty string is a valid value for
///   several, absence is not).
/// - `rooms_price` is always the list-of-records shape regardless of what
///   the backend sent. No ordering is guaranteed; sort at render time.
/// - `amenities` is `None` when the backend had no amenity data at all,
///   as opposed to `Some(vec![])` which would mean a confirmed empty set.
/// - `cooking_fee` stays `None` when the backend has no cooking price;
///   zero is a distinct, valid price meaning "free".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub ladies: bool,
    pub place: String,
    pub branch_number: String,
    /// Google Maps link for the branch.
    pub location: String,
    pub phone: String,
    pub address: String,
    pub image: String,
    pub hero_image: String,
    pub description: String,
    pub rooms_price: Vec<RoomRate>,
    pub location_perks: Vec<LocationPerk>,
    pub amenities: Option<Vec<String>>,
    pub cooking: bool,
    pub mess_available: bool,
    pub cooking_fee: Option<i64>,
    pub reg_fee: i64,
    pub display_order: Option<i64>,
}

/// A gallery image ready for display: cleaned URL and resolved branch
/// label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub title: String,
    pub branch: String,
    pub description: String,
}

/// Payload for submitting a booking/contact enquiry.
#[derive(Debug, Clone, Serialize)]
pub struct NewEnquiry {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    pub source: String,
}

impl NewEnquiry {
    /// Creates an enquiry with the default `"website"` source tag.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
            message: None,
            branch_id: None,
            source: "website".to_string(),
        }
    }
}

/// An enquiry record echoed back by the backend after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct Enquiry {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub branch_id: Option<i64>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
