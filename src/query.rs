//! Derived View Computation: pure functions from `(state, catalog)` to
//! presentation-ready results. Recomputed on every relevant state change;
//! nothing here mutates or memoizes.

use crate::catalog::{Catalog, Restroom};
use crate::geo::{self, Coordinate};
use crate::state::{ActiveFilters, AppState};

/// The single visual classification used for map marker icons. Amenity flags
/// are independent; rendering needs exactly one bucket, chosen by fixed
/// precedence (see [`marker_category`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCategory {
    Accessible,
    GenderNeutral,
    Family,
    Default,
}

/// Fixed precedence: wheelchair, then gender-neutral, then family room. A
/// record with several of these amenities keeps the highest bucket. The order
/// is a tested convention; changing it changes icon colors on multi-amenity
/// records.
pub fn marker_category(restroom: &Restroom) -> MarkerCategory {
    if restroom.amenities.wheelchair {
        MarkerCategory::Accessible
    } else if restroom.amenities.gender_neutral {
        MarkerCategory::GenderNeutral
    } else if restroom.amenities.family_room {
        MarkerCategory::Family
    } else {
        MarkerCategory::Default
    }
}

/// Distance from the user's fix to a record, falling back to the default
/// reference point before any fix exists.
pub fn distance_from_user(state: &AppState, restroom: &Restroom) -> f64 {
    let origin: Coordinate = state.user_location.unwrap_or(geo::DEFAULT_CENTER);
    geo::distance_meters(origin, restroom.position)
}

/// The marker set for the map: the catalog filtered by the conjunction (AND)
/// of every active predicate. A predicate at its inactive value (false
/// toggle, min rating 0) filters nothing, so enabling an additional filter
/// can only shrink the set.
pub fn visible_markers<'a>(state: &AppState, catalog: &'a Catalog) -> Vec<&'a Restroom> {
    let filters = &state.active_filters;
    catalog
        .restrooms()
        .iter()
        .filter(|r| {
            if filters.open_now && !r.is_open {
                return false;
            }
            if filters.min_rating > 0.0 && r.rating < filters.min_rating {
                return false;
            }
            if filters.wheelchair && !r.amenities.wheelchair {
                return false;
            }
            if filters.gender_neutral && !r.amenities.gender_neutral {
                return false;
            }
            if filters.family_room && !r.amenities.family_room {
                return false;
            }
            if filters.baby_changing && !r.amenities.baby_changing {
                return false;
            }
            if filters.radius > 0 && distance_from_user(state, r) > f64::from(filters.radius) {
                return false;
            }
            true
        })
        .collect()
}

/// Free-text search over the catalog. Case-insensitive; a record matches if
/// the trimmed query is a substring of its name, address, or category label,
/// OR a keyword synonym matches an amenity ("accessible" ⇒ wheelchair,
/// "gender" ⇒ gender-neutral, "baby" ⇒ baby changing, "family" ⇒ family
/// room). An empty or whitespace-only query yields nothing — the overlay
/// shows recent and suggested terms instead.
pub fn search_results<'a>(query: &str, catalog: &'a Catalog) -> Vec<&'a Restroom> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }

    catalog
        .restrooms()
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&q)
                || r.address.to_lowercase().contains(&q)
                || r.category.label().to_lowercase().contains(&q)
                || (q.contains("accessible") && r.amenities.wheelchair)
                || (q.contains("gender") && r.amenities.gender_neutral)
                || (q.contains("baby") && r.amenities.baby_changing)
                || (q.contains("family") && r.amenities.family_room)
        })
        .collect()
}

/// True iff any filter differs from its documented default. Drives the badge
/// on the filter button and the visibility of the Reset action.
pub fn filters_active(filters: &ActiveFilters) -> bool {
    *filters != ActiveFilters::default()
}
