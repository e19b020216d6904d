//! Bundled mock dataset: restrooms around central Cebu City plus their
//! reviews. Order is stable; ids are never reused.

use crate::catalog::types::{Amenities, Category, Restroom, Review};
use crate::geo::Coordinate;

/// Suggested terms shown in the search overlay when the query is empty.
pub const SEARCH_SUGGESTIONS: [&str; 6] = [
    "Ayala",
    "IT Park",
    "Wheelchair accessible",
    "Baby changing",
    "Open now",
    "Gas station",
];

pub(super) fn restrooms() -> Vec<Restroom> {
    vec![
        Restroom {
            id: 1,
            name: "Ayala Center Cebu - Ground Floor".into(),
            address: "Cebu Business Park, Cebu City".into(),
            position: Coordinate::new(10.3187, 123.9048),
            category: Category::Mall,
            rating: 4.6,
            review_count: 128,
            is_open: true,
            hours: "10:00 AM - 9:00 PM".into(),
            amenities: Amenities {
                wheelchair: true,
                gender_neutral: false,
                baby_changing: true,
                family_room: true,
                bidet: true,
                dryer: true,
            },
            photos: vec!["ayala-ground-1.jpg".into(), "ayala-ground-2.jpg".into()],
            verified: true,
            last_verified: "2024-11-02".into(),
        },
        Restroom {
            id: 2,
            name: "SM City Cebu - Main Entrance".into(),
            address: "Juan Luna Ave, North Reclamation Area".into(),
            position: Coordinate::new(10.3116, 123.9180),
            category: Category::Mall,
            rating: 4.4,
            review_count: 96,
            is_open: true,
            hours: "10:00 AM - 9:00 PM".into(),
            amenities: Amenities {
                wheelchair: true,
                gender_neutral: false,
                baby_changing: true,
                family_room: false,
                bidet: false,
                dryer: true,
            },
            photos: vec!["sm-main-1.jpg".into()],
            verified: true,
            last_verified: "2024-10-18".into(),
        },
        Restroom {
            id: 3,
            name: "Robinsons Galleria Cebu - Level 2".into(),
            address: "General Maxilom Ave cor. Sergio Osmena Blvd".into(),
            position: Coordinate::new(10.3009, 123.9081),
            category: Category::Mall,
            rating: 4.2,
            review_count: 54,
            is_open: true,
            hours: "10:00 AM - 8:00 PM".into(),
            amenities: Amenities {
                wheelchair: false,
                gender_neutral: true,
                baby_changing: true,
                family_room: false,
                bidet: false,
                dryer: true,
            },
            photos: vec!["robinsons-l2-1.jpg".into()],
            verified: true,
            last_verified: "2024-09-30".into(),
        },
        Restroom {
            id: 4,
            name: "Fuente Osmena Circle Public Restroom".into(),
            address: "Fuente Osmena, Osmena Blvd".into(),
            position: Coordinate::new(10.3111, 123.8914),
            category: Category::Public,
            rating: 3.4,
            review_count: 41,
            is_open: true,
            hours: "6:00 AM - 10:00 PM".into(),
            amenities: Amenities {
                wheelchair: false,
                gender_neutral: false,
                baby_changing: false,
                family_room: false,
                bidet: false,
                dryer: false,
            },
            photos: vec![],
            verified: false,
            last_verified: "2024-06-12".into(),
        },
        Restroom {
            id: 5,
            name: "Cebu IT Park - Central Bloc".into(),
            address: "Inez Villa St, Apas, Cebu City".into(),
            position: Coordinate::new(10.3270, 123.9054),
            category: Category::Mall,
            rating: 4.7,
            review_count: 87,
            is_open: true,
            hours: "Open 24 hours".into(),
            amenities: Amenities {
                wheelchair: true,
                gender_neutral: true,
                baby_changing: true,
                family_room: true,
                bidet: true,
                dryer: true,
            },
            photos: vec!["central-bloc-1.jpg".into(), "central-bloc-2.jpg".into()],
            verified: true,
            last_verified: "2024-11-20".into(),
        },
        Restroom {
            id: 6,
            name: "Carbon Market Comfort Room".into(),
            address: "M.C. Briones St, Carbon, Cebu City".into(),
            position: Coordinate::new(10.2932, 123.8990),
            category: Category::Public,
            rating: 2.8,
            review_count: 23,
            is_open: false,
            hours: "5:00 AM - 7:00 PM".into(),
            amenities: Amenities {
                wheelchair: false,
                gender_neutral: false,
                baby_changing: false,
                family_room: false,
                bidet: false,
                dryer: false,
            },
            photos: vec![],
            verified: false,
            last_verified: "2024-03-02".into(),
        },
        Restroom {
            id: 7,
            name: "Basilica del Santo Nino Visitor Facility".into(),
            address: "Osmena Blvd, Cebu City".into(),
            position: Coordinate::new(10.2943, 123.9020),
            category: Category::Public,
            rating: 3.9,
            review_count: 67,
            is_open: true,
            hours: "5:00 AM - 8:00 PM".into(),
            amenities: Amenities {
                wheelchair: true,
                gender_neutral: false,
                baby_changing: false,
                family_room: false,
                bidet: false,
                dryer: false,
            },
            photos: vec!["basilica-1.jpg".into()],
            verified: true,
            last_verified: "2024-08-25".into(),
        },
        Restroom {
            id: 8,
            name: "Cebu Provincial Capitol - Lobby".into(),
            address: "Capitol Site, Osmena Blvd".into(),
            position: Coordinate::new(10.3220, 123.8912),
            category: Category::Government,
            rating: 4.0,
            review_count: 19,
            is_open: true,
            hours: "8:00 AM - 5:00 PM, Mon-Fri".into(),
            amenities: Amenities {
                wheelchair: true,
                gender_neutral: false,
                baby_changing: false,
                family_room: false,
                bidet: false,
                dryer: true,
            },
            photos: vec![],
            verified: true,
            last_verified: "2024-07-14".into(),
        },
        Restroom {
            id: 9,
            name: "Jollibee Osmena Boulevard".into(),
            address: "Osmena Blvd cor. Jakosalem St".into(),
            position: Coordinate::new(10.3097, 123.8900),
            category: Category::Restaurant,
            rating: 3.7,
            review_count: 33,
            is_open: true,
            hours: "6:00 AM - 11:00 PM".into(),
            amenities: Amenities {
                wheelchair: false,
                gender_neutral: false,
                baby_changing: true,
                family_room: false,
                bidet: false,
                dryer: true,
            },
            photos: vec![],
            verified: false,
            last_verified: "2024-05-19".into(),
        },
        Restroom {
            id: 10,
            name: "Shell Select - Escario".into(),
            address: "N. Escario St, Cebu City".into(),
            position: Coordinate::new(10.3180, 123.8940),
            category: Category::GasStation,
            rating: 3.5,
            review_count: 28,
            is_open: true,
            hours: "Open 24 hours".into(),
            amenities: Amenities {
                wheelchair: false,
                gender_neutral: true,
                baby_changing: false,
                family_room: false,
                bidet: false,
                dryer: false,
            },
            photos: vec!["shell-escario-1.jpg".into()],
            verified: false,
            last_verified: "2024-04-08".into(),
        },
        Restroom {
            id: 11,
            name: "Quest Hotel - Lobby Level".into(),
            address: "Archbishop Reyes Ave, Cebu City".into(),
            position: Coordinate::new(10.3140, 123.9053),
            category: Category::Hotel,
            rating: 4.8,
            review_count: 45,
            is_open: true,
            hours: "Open 24 hours".into(),
            amenities: Amenities {
                wheelchair: true,
                gender_neutral: false,
                baby_changing: true,
                family_room: true,
                bidet: true,
                dryer: true,
            },
            photos: vec!["quest-lobby-1.jpg".into()],
            verified: true,
            last_verified: "2024-11-11".into(),
        },
        Restroom {
            id: 12,
            name: "Plaza Independencia Restroom".into(),
            address: "Legaspi St, near Fort San Pedro".into(),
            position: Coordinate::new(10.2925, 123.9064),
            category: Category::Park,
            rating: 3.1,
            review_count: 15,
            is_open: false,
            hours: "6:00 AM - 6:00 PM".into(),
            amenities: Amenities {
                wheelchair: false,
                gender_neutral: false,
                baby_changing: false,
                family_room: true,
                bidet: false,
                dryer: false,
            },
            photos: vec![],
            verified: false,
            last_verified: "2024-02-27".into(),
        },
    ]
}

pub(super) fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            restroom_id: 1,
            author: "Maria L.".into(),
            rating: 5,
            text: "Spotless and well stocked. The ground floor one near the grocery is the best in the mall.".into(),
            date: "2024-10-28".into(),
            helpful_count: 24,
        },
        Review {
            id: 2,
            restroom_id: 1,
            author: "Jon D.".into(),
            rating: 4,
            text: "Clean, but expect a queue on weekends.".into(),
            date: "2024-09-14".into(),
            helpful_count: 11,
        },
        Review {
            id: 3,
            restroom_id: 1,
            author: "Kat R.".into(),
            rating: 5,
            text: "PWD stall is roomy and the ramp access actually works.".into(),
            date: "2024-08-02".into(),
            helpful_count: 18,
        },
        Review {
            id: 4,
            restroom_id: 2,
            author: "Paolo V.".into(),
            rating: 4,
            text: "Decent. Hand dryers work, soap sometimes runs out by evening.".into(),
            date: "2024-10-05".into(),
            helpful_count: 7,
        },
        Review {
            id: 5,
            restroom_id: 4,
            author: "Ana S.".into(),
            rating: 3,
            text: "Fine for an emergency stop. Bring your own tissue.".into(),
            date: "2024-06-30".into(),
            helpful_count: 9,
        },
        Review {
            id: 6,
            restroom_id: 5,
            author: "Miggy T.".into(),
            rating: 5,
            text: "24-hour access and genuinely clean at 2 AM. Family room on the second level.".into(),
            date: "2024-11-15".into(),
            helpful_count: 31,
        },
        Review {
            id: 7,
            restroom_id: 5,
            author: "Cheska B.".into(),
            rating: 4,
            text: "Gender neutral stalls near the food hall. Dryer is weak.".into(),
            date: "2024-10-22".into(),
            helpful_count: 6,
        },
        Review {
            id: 8,
            restroom_id: 11,
            author: "Dennis O.".into(),
            rating: 5,
            text: "Hotel lobby standard. Staff did not mind walk-ins.".into(),
            date: "2024-11-01".into(),
            helpful_count: 13,
        },
    ]
}
