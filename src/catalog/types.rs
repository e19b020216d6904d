/// Identifier of a catalog restroom record.
pub type RestroomId = u32;

/// Venue classification for a restroom record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mall,
    Restaurant,
    Public,
    Government,
    GasStation,
    Hotel,
    Park,
    Other,
}

impl Category {
    /// Short label used in list rows and free-text matching.
    pub fn label(self) -> &'static str {
        match self {
            Category::Mall => "Mall",
            Category::Restaurant => "Restaurant",
            Category::Public => "Public Facility",
            Category::Government => "Government Building",
            Category::GasStation => "Gas Station",
            Category::Hotel => "Hotel",
            Category::Park => "Park",
            Category::Other => "Other",
        }
    }

    /// All variants, in the order the add-restroom form presents them.
    pub const ALL: [Category; 8] = [
        Category::Mall,
        Category::Restaurant,
        Category::Public,
        Category::Government,
        Category::GasStation,
        Category::Hotel,
        Category::Park,
        Category::Other,
    ];
}

/// Per-record amenity flags. Flags are independent; the mutually-exclusive
/// marker category is derived elsewhere with a fixed precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amenities {
    pub wheelchair: bool,
    pub gender_neutral: bool,
    pub baby_changing: bool,
    pub family_room: bool,
    pub bidet: bool,
    pub dryer: bool,
}

/// An immutable restroom record from the bundled catalog.
///
/// Distance from the user is intentionally absent: it is derived per render
/// against the current fix (or the default reference point).
#[derive(Debug, Clone)]
pub struct Restroom {
    pub id: RestroomId,
    pub name: String,
    pub address: String,
    pub position: crate::geo::Coordinate,
    pub category: Category,
    /// 0.0 to 5.0, one decimal.
    pub rating: f32,
    pub review_count: u32,
    pub is_open: bool,
    pub hours: String,
    pub amenities: Amenities,
    pub photos: Vec<String>,
    pub verified: bool,
    pub last_verified: String,
}

/// A read-only user review attached to a restroom record.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: u32,
    pub restroom_id: RestroomId,
    pub author: String,
    /// 1 to 5, whole stars.
    pub rating: u8,
    pub text: String,
    pub date: String,
    pub helpful_count: u32,
}
