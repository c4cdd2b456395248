//! Wire types for the hostel backend REST API.
//!
//! ## Observed shape drift across backend revisions
//!
//! The backend schema has evolved in place, and older rows still flow
//! through the same endpoints. Every type here treats the payload as
//! untrusted/partial; the invariant contract the rest of the system
//! depends on is produced by [`crate::normalize`], never here.
//!
//! ### `room_rate`
//! Two shapes in the wild: the legacy mapping of room-type label to
//! integer monthly rate (`{"4 sharing": 4500}`) and the current list of
//! `{title, rate_per_month}` records. [`RawRoomRate`] is an untagged
//! union accepting either.
//!
//! ### `prime_location_perks`
//! Field names vary by revision: `{name, distance, walk}` on older rows,
//! `{title, distance, time_to_reach}` on current ones. [`RawPerk`] is
//! untagged per element, so a single list may even mix both.
//!
//! ### Optional booleans
//! `is_ladies`, `is_cooking` and `is_mess_available` are modeled as
//! `Option<bool>` because "field not present" and "field present and
//! false" must be distinguished: an absent `is_ladies` falls back to
//! name-based inference during normalization.
//!
//! ### `image_url`
//! Gallery rows occasionally carry stray backticks and surrounding
//! whitespace pasted in from the admin tooling; cleaned by
//! [`crate::gallery::clean_image_url`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use nyxta_core::RoomRate;
use serde::Deserialize;

/// A branch record as returned by `GET /branches` and
/// `GET /branches/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBranch {
    /// Stable numeric identifier.
    pub id: i64,

    /// Human-readable name; also mined for place, branch number and
    /// ladies-only status when explicit fields are absent.
    pub name: String,

    /// Ordered phone numbers; the first entry is the canonical contact.
    #[serde(default)]
    pub contact_no: Vec<String>,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub gmap_link: String,

    /// Card/listing image URL. Absent in older schema revisions.
    #[serde(default)]
    pub thumbnail: Option<String>,

    /// Monthly rates in either wire shape; see the module docs.
    #[serde(default)]
    pub room_rate: Option<RawRoomRate>,

    #[serde(default)]
    pub prime_location_perks: Vec<RawPerk>,

    /// Amenity lists from two different schema generations; either, both
    /// or neither may be present.
    #[serde(default)]
    pub amenities: Option<Vec<String>>,

    #[serde(default)]
    pub property_features: Option<Vec<String>>,

    #[serde(default)]
    pub is_ladies: Option<bool>,

    #[serde(default)]
    pub is_cooking: Option<bool>,

    #[serde(default)]
    pub is_mess_available: Option<bool>,

    /// Monthly cooking charge; `null` means "no data", `0` means free.
    #[serde(default)]
    pub cooking_price: Option<i64>,

    #[serde(default)]
    pub reg_fee: Option<i64>,

    #[serde(default)]
    pub display_order: Option<i64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Either wire shape of `room_rate`.
///
/// Untagged: the current list-of-records shape is tried first, then the
/// legacy label-to-rate mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRoomRate {
    Records(Vec<RoomRate>),
    Legacy(HashMap<String, i64>),
}

/// A location perk in either of its two field-name generations.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPerk {
    Current {
        title: String,
        distance: String,
        time_to_reach: String,
    },
    Legacy {
        name: String,
        distance: String,
        walk: String,
    },
}

/// A gallery row as returned by `GET /gallery` and
/// `GET /gallery/branch/{branch_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGalleryImage {
    pub id: i64,
    pub branch_id: i64,
    /// May carry stray backticks/whitespace; always clean before use.
    pub image_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub display_order: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
