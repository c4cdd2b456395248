//! Gallery aggregation: URL cleanup, identity-based deduplication, and
//! client-side filter/search over the canonical collection.
//!
//! The backend occasionally returns the same physical asset several times
//! under differently-parameterized CDN URLs, so deduplication works on
//! the image's *identity* (its filename) rather than on byte-identical
//! URLs. Filtering is a pure function over explicit criteria so the UI
//! can re-run it on every keystroke without re-fetching.

use std::collections::HashSet;

use tracing::debug;

use nyxta_core::{Branch, GalleryImage};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::RawGalleryImage;

/// Sentinel branch-filter value that passes every image through.
pub const ALL_BRANCHES: &str = "all";

/// Strips stray backtick characters and surrounding whitespace from an
/// image URL.
///
/// Some backend rows carry formatting characters pasted in from the admin
/// tooling. Idempotent: cleaning an already-clean URL is a no-op.
#[must_use]
pub fn clean_image_url(url: &str) -> String {
    url.replace('`', "").trim().to_string()
}

/// The identity of an image: the URL's final path segment with any query
/// string or fragment stripped.
///
/// Two images with the same identity are treated as the same underlying
/// asset even when their full URLs differ (CDN cache-busting parameters).
/// Known fragility: two genuinely different assets that happen to share a
/// filename collapse into one, which is why [`dedupe_by_identity`] scopes
/// the comparison per branch.
#[must_use]
pub fn image_identity(url: &str) -> &str {
    let base = url.split(['?', '#']).next().unwrap_or(url);
    base.rsplit('/').next().unwrap_or(base)
}

/// Drops later occurrences of the same underlying asset, keeping the
/// first in input order.
///
/// Identity is scoped per branch: filename uniqueness is only required
/// within one branch's image set, so `room1.jpg` at two different
/// branches stays two images.
#[must_use]
pub fn dedupe_by_identity(images: Vec<RawGalleryImage>) -> Vec<RawGalleryImage> {
    let mut seen: HashSet<(i64, String)> = HashSet::new();
    let mut kept = Vec::with_capacity(images.len());
    let mut dropped = 0_usize;

    for image in images {
        let cleaned = clean_image_url(&image.image_url);
        let key = (image.branch_id, image_identity(&cleaned).to_string());
        if seen.insert(key) {
            kept.push(image);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        debug!(dropped, "dropped duplicate gallery images");
    }
    kept
}

/// Explicit filter criteria for the gallery view.
///
/// Passed into [`filter_images`] rather than read from view-local state,
/// so the same criteria apply identically wherever the gallery renders.
#[derive(Debug, Clone, Default)]
pub struct GalleryFilter {
    /// Exact branch label; `None`, empty, or [`ALL_BRANCHES`] matches
    /// every branch.
    pub branch: Option<String>,
    /// Case-insensitive substring matched against title, branch and
    /// description; `None` or empty matches everything.
    pub search_term: Option<String>,
}

/// Applies the branch and search filters, ANDed together.
///
/// Pure and side-effect-free: suitable for re-running on every keystroke
/// or filter change.
#[must_use]
pub fn filter_images(images: &[GalleryImage], filter: &GalleryFilter) -> Vec<GalleryImage> {
    let needle = filter
        .search_term
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    images
        .iter()
        .filter(|image| {
            let matches_branch = match filter.branch.as_deref() {
                None | Some("") | Some(ALL_BRANCHES) => true,
                Some(branch) => image.branch == branch,
            };
            let matches_search = needle.is_empty()
                || image.title.to_lowercase().contains(&needle)
                || image.branch.to_lowercase().contains(&needle)
                || image.description.to_lowercase().contains(&needle);
            matches_branch && matches_search
        })
        .cloned()
        .collect()
}

/// Converts one raw gallery row into its canonical display form.
#[must_use]
pub fn to_canonical(image: &RawGalleryImage, branches: &[Branch]) -> GalleryImage {
    GalleryImage {
        src: clean_image_url(&image.image_url),
        title: image.title.clone(),
        branch: branch_label(image.branch_id, branches),
        description: image.description.clone(),
    }
}

/// Fetches, cleans, deduplicates and orders one branch's gallery.
///
/// `Ok(vec![])` means the branch genuinely has no images; a failed fetch
/// surfaces as `Err`, and the two must render differently.
///
/// # Errors
///
/// Propagates [`ApiError`] from the underlying fetch.
pub async fn fetch_gallery_for_branch(
    client: &ApiClient,
    branch_id: i64,
    branches: &[Branch],
) -> Result<Vec<GalleryImage>, ApiError> {
    let raw = client.get_branch_gallery(branch_id).await?;
    Ok(aggregate(raw, branches))
}

/// Fetches and aggregates the gallery across every branch.
///
/// # Errors
///
/// Propagates [`ApiError`] from the underlying fetch.
pub async fn fetch_gallery(
    client: &ApiClient,
    branches: &[Branch],
) -> Result<Vec<GalleryImage>, ApiError> {
    let raw = client.get_gallery().await?;
    Ok(aggregate(raw, branches))
}

/// Shared pipeline: clean, dedupe, order, canonicalize.
///
/// Ordering is by `display_order` (stable; rows without one sort last),
/// applied after deduplication so "first occurrence wins" refers to the
/// backend's row order.
fn aggregate(raw: Vec<RawGalleryImage>, branches: &[Branch]) -> Vec<GalleryImage> {
    let mut deduped = dedupe_by_identity(raw);
    deduped.sort_by_key(|image| image.display_order.unwrap_or(i64::MAX));
    deduped
        .iter()
        .map(|image| to_canonical(image, branches))
        .collect()
}

/// Resolves the display label for an image's branch.
///
/// Looks `branch_id` up against the fetched branch list and formats its
/// branch number; unknown ids fall back to the raw id.
fn branch_label(branch_id: i64, branches: &[Branch]) -> String {
    branches.iter().find(|b| b.id == branch_id).map_or_else(
        || format!("Branch {branch_id}"),
        |b| format!("Branch {}", b.branch_number),
    )
}
