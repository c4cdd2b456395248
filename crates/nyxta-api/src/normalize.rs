//! Normalization of raw branch records into [`nyxta_core::Branch`].
//!
//! Deterministic, pure mapping with no network access. The contract is
//! totality: a structurally-valid-but-sparse record never fails; every
//! missing field degrades to its documented default. All shape checks for
//! the backend's schema drift stay inside this module (and the untagged
//! wire enums in [`crate::types`]); downstream code only ever sees the
//! canonical shape.

use regex::Regex;

use nyxta_core::{Branch, LocationPerk, RoomRate};

use crate::gallery::clean_image_url;
use crate::types::{RawBranch, RawPerk, RawRoomRate};

/// Fallback place label when a branch name carries no location suffix.
const DEFAULT_PLACE: &str = "Kochi";

/// Converts one raw branch record into the canonical view model.
///
/// Field derivation:
/// - `ladies` prefers an explicit `is_ladies`; only when the field is
///   absent does it fall back to a case-insensitive `"ladies"`/`"women"`
///   substring check on the name.
/// - `place` is the text after the trailing dash in the name (stopping
///   before any parenthesised note), else [`DEFAULT_PLACE`].
/// - `branch_number` is the digits of a `branch NN` mention in the name,
///   else the stringified id.
/// - `rooms_price` is always the list-of-records shape: the legacy map is
///   converted pairwise with no order guarantee (sorting for display is a
///   render-time concern), the current list passes through unchanged.
/// - `image` prefers a cleaned `thumbnail`; older rows without one derive
///   the conventional listing-image path from the branch number.
#[must_use]
pub fn normalize_branch(raw: &RawBranch) -> Branch {
    let ladies = raw.is_ladies.unwrap_or_else(|| {
        let lower = raw.name.to_lowercase();
        lower.contains("ladies") || lower.contains("women")
    });

    let place = extract_place(&raw.name);
    let branch_number =
        extract_branch_number(&raw.name).unwrap_or_else(|| raw.id.to_string());

    let phone = raw.contact_no.first().cloned().unwrap_or_default();

    let image = match raw.thumbnail.as_deref().map(clean_image_url) {
        Some(url) if !url.is_empty() => url,
        _ => format!("/hostels/frontbranch{branch_number:0>2}.jpg"),
    };
    let hero_image = format!("/locations/{}.jpg", place.to_lowercase());
    let description = format!("Modern hostel accommodation in {place}");

    let rooms_price = match &raw.room_rate {
        Some(RawRoomRate::Records(records)) => records.clone(),
        Some(RawRoomRate::Legacy(map)) => map
            .iter()
            .map(|(title, rate)| RoomRate {
                title: title.clone(),
                rate_per_month: *rate,
            })
            .collect(),
        None => Vec::new(),
    };

    let location_perks = raw
        .prime_location_perks
        .iter()
        .map(|perk| match perk {
            RawPerk::Current {
                title,
                distance,
                time_to_reach,
            } => LocationPerk {
                title: title.clone(),
                distance: distance.clone(),
                time_to_reach: time_to_reach.clone(),
            },
            RawPerk::Legacy {
                name,
                distance,
                walk,
            } => LocationPerk {
                title: name.clone(),
                distance: distance.clone(),
                time_to_reach: walk.clone(),
            },
        })
        .collect();

    // Union of the two amenity generations, amenities first. Duplicates
    // across the lists are preserved. None only when both sources are
    // absent: None means "no data", an empty list means "confirmed zero".
    let amenities = match (&raw.amenities, &raw.property_features) {
        (None, None) => None,
        (a, b) => {
            let mut merged = a.clone().unwrap_or_default();
            merged.extend(b.clone().unwrap_or_default());
            Some(merged)
        }
    };

    Branch {
        id: raw.id,
        name: raw.name.clone(),
        ladies,
        place,
        branch_number,
        location: raw.gmap_link.clone(),
        phone,
        address: raw.address.clone(),
        image,
        hero_image,
        description,
        rooms_price,
        location_perks,
        amenities,
        cooking: raw.is_cooking.unwrap_or(false),
        mess_available: raw.is_mess_available.unwrap_or(false),
        cooking_fee: raw.cooking_price,
        reg_fee: raw.reg_fee.unwrap_or(0),
        display_order: raw.display_order,
    }
}

/// Applies [`normalize_branch`] element-wise.
///
/// Preserves input order; never drops or adds records.
#[must_use]
pub fn normalize_branches(raws: &[RawBranch]) -> Vec<Branch> {
    raws.iter().map(normalize_branch).collect()
}

/// Extracts the place suffix from a branch name, e.g.
/// `"NYXTA LADIES HOSTEL - EDAPPALLY"` yields `"EDAPPALLY"`.
///
/// Matches text after a dash or en-dash, stopping before a parenthesised
/// note; trimmed. Falls back to [`DEFAULT_PLACE`] when nothing matches.
fn extract_place(name: &str) -> String {
    let re = Regex::new(r"[-–]\s*(.+?)(?:\s*\(|$)").expect("valid place regex");
    re.captures(name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|place| !place.is_empty())
        .unwrap_or_else(|| DEFAULT_PLACE.to_string())
}

/// Extracts an explicit branch number from a name, e.g.
/// `"... - Branch 32"` yields `"32"`.
fn extract_branch_number(name: &str) -> Option<String> {
    let re = Regex::new(r"(?i)branch\s*(\d+)").expect("valid branch number regex");
    re.captures(name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
