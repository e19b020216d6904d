//! End-to-end derivation: dispatch filter and location transitions through
//! the store, then check what the map and search would show.

mod common;

use common::make_store;

use banyo::catalog::{format_distance, Catalog};
use banyo::geo::Coordinate;
use banyo::query::{filters_active, search_results, visible_markers};
use banyo::state::{AppIntent, FilterPatch};

#[test]
fn tightening_filters_never_grows_the_marker_set() {
    let (store, _dir) = make_store();
    let catalog = Catalog::bundled();

    store.dispatch(AppIntent::SetFilters(FilterPatch {
        radius: Some(5000),
        ..FilterPatch::default()
    }));
    let mut previous = visible_markers(&store.snapshot(), &catalog).len();

    let steps = [
        FilterPatch {
            open_now: Some(true),
            ..FilterPatch::default()
        },
        FilterPatch {
            min_rating: Some(4.0),
            ..FilterPatch::default()
        },
        FilterPatch {
            wheelchair: Some(true),
            ..FilterPatch::default()
        },
        FilterPatch {
            baby_changing: Some(true),
            ..FilterPatch::default()
        },
        FilterPatch {
            radius: Some(500),
            ..FilterPatch::default()
        },
    ];

    for patch in steps {
        store.dispatch(AppIntent::SetFilters(patch));
        let count = visible_markers(&store.snapshot(), &catalog).len();
        assert!(count <= previous, "filter step grew the set: {count} > {previous}");
        previous = count;
    }
}

#[test]
fn moving_the_fix_changes_what_is_nearby() {
    let (store, _dir) = make_store();
    let catalog = Catalog::bundled();

    // Default reference point: the IT Park record (id 5) is out of the
    // default 1 km radius.
    let before = visible_markers(&store.snapshot(), &catalog);
    assert!(!before.iter().any(|r| r.id == 5));

    let it_park = catalog.get(5).unwrap().position;
    store.dispatch(AppIntent::SetUserLocation(Coordinate::new(
        it_park.lat,
        it_park.lng,
    )));

    let after = visible_markers(&store.snapshot(), &catalog);
    assert!(after.iter().any(|r| r.id == 5));
}

#[test]
fn ayala_is_found_by_name_and_by_amenity_synonym() {
    let catalog = Catalog::bundled();

    let by_name = search_results("ayala", &catalog);
    assert!(by_name.iter().any(|r| r.name == "Ayala Center Cebu - Ground Floor"));

    // "wheelchair" is not a substring of the record; the synonym path is
    // "accessible", case-insensitively.
    let by_synonym = search_results("ACCESSIBLE", &catalog);
    assert!(by_synonym.iter().any(|r| r.name == "Ayala Center Cebu - Ground Floor"));
}

#[test]
fn indicator_follows_any_deviation_and_reset() {
    let (store, _dir) = make_store();
    assert!(!filters_active(&store.snapshot().active_filters));

    store.dispatch(AppIntent::SetFilters(FilterPatch {
        radius: Some(2000),
        ..FilterPatch::default()
    }));
    assert!(filters_active(&store.snapshot().active_filters));

    store.dispatch(AppIntent::ResetFilters);
    assert!(!filters_active(&store.snapshot().active_filters));
}

#[test]
fn distance_rendering_is_pinned() {
    // Meters and kilometers render distinctly and consistently.
    assert_eq!(format_distance(450.0), "450m");
    assert_eq!(format_distance(1500.0), "1.5km");
    assert_ne!(format_distance(450.0), format_distance(1500.0));
}
