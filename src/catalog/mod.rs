//! Mock Data Source: the static restroom catalog and its reviews.
//!
//! The catalog is the application's sole data source. Records are immutable
//! and returned in a stable order; review lookup keeps insertion order.

mod data;
mod types;

pub use data::SEARCH_SUGGESTIONS;
pub use types::{Amenities, Category, Restroom, RestroomId, Review};

/// The bundled restroom catalog plus review lookup.
pub struct Catalog {
    restrooms: Vec<Restroom>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Build the bundled dataset. Cheap enough to construct once at startup.
    pub fn bundled() -> Self {
        Self {
            restrooms: data::restrooms(),
            reviews: data::reviews(),
        }
    }

    /// All records, stable order across calls.
    pub fn restrooms(&self) -> &[Restroom] {
        &self.restrooms
    }

    pub fn get(&self, id: RestroomId) -> Option<&Restroom> {
        self.restrooms.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RestroomId) -> bool {
        self.get(id).is_some()
    }

    /// Reviews for one record, in insertion order.
    pub fn reviews_for(&self, id: RestroomId) -> Vec<&Review> {
        self.reviews.iter().filter(|r| r.restroom_id == id).collect()
    }
}

/// Render a distance for display: under a kilometer as meters rounded to the
/// nearest 10, otherwise as kilometers to one decimal. Rounding happens
/// before the threshold check, so 999 m renders as "1000m".
pub fn format_distance(meters: f64) -> String {
    let rounded = (meters / 10.0).round() * 10.0;
    if meters < 1000.0 {
        format!("{}m", rounded as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_stable() {
        let a = Catalog::bundled();
        let b = Catalog::bundled();
        let ids_a: Vec<_> = a.restrooms().iter().map(|r| r.id).collect();
        let ids_b: Vec<_> = b.restrooms().iter().map(|r| r.id).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::bundled();
        let mut ids: Vec<_> = catalog.restrooms().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.restrooms().len());
    }

    #[test]
    fn reviews_reference_known_restrooms() {
        let catalog = Catalog::bundled();
        for review in catalog.restrooms().iter().flat_map(|r| catalog.reviews_for(r.id)) {
            assert!(catalog.contains(review.restroom_id));
        }
    }

    #[test]
    fn reviews_keep_insertion_order() {
        let catalog = Catalog::bundled();
        let reviews = catalog.reviews_for(1);
        let ids: Vec<_> = reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn format_distance_meters_rounds_to_nearest_ten() {
        assert_eq!(format_distance(450.0), "450m");
        assert_eq!(format_distance(454.0), "450m");
        assert_eq!(format_distance(455.0), "460m");
        assert_eq!(format_distance(0.0), "0m");
    }

    #[test]
    fn format_distance_kilometers_to_one_decimal() {
        assert_eq!(format_distance(1500.0), "1.5km");
        assert_eq!(format_distance(1000.0), "1.0km");
        assert_eq!(format_distance(2340.0), "2.3km");
    }

    #[test]
    fn format_distance_boundary_rounds_up_to_meters() {
        // 999 rounds to 1000 but stays in the meter branch.
        assert_eq!(format_distance(999.0), "1000m");
    }
}
