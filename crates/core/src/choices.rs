//! Fixed choice lists for enumerated form fields.
//!
//! Each list is a slice of `(value, label)` pairs. The value is what gets
//! stored; the label is what a select box displays.

/// A `(stored value, display label)` pair.
pub type Choice = (&'static str, &'static str);

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

pub const ARTIST_MOVEMENTS: &[Choice] = &[
    ("Renaissance", "Renaissance"),
    ("Baroque", "Baroque"),
    ("Rococo", "Rococo"),
    ("Neoclassicism", "Neoclassicism"),
    ("Romanticism", "Romanticism"),
    ("Realism", "Realism"),
    ("Impressionism", "Impressionism"),
    ("Post-Impressionism", "Post-Impressionism"),
    ("Expressionism", "Expressionism"),
    ("Cubism", "Cubism"),
    ("Surrealism", "Surrealism"),
    ("Abstract Expressionism", "Abstract Expressionism"),
    ("Pop Art", "Pop Art"),
    ("Minimalism", "Minimalism"),
    ("Contemporary", "Contemporary"),
    ("Modern", "Modern"),
    ("Other", "Other"),
];

pub const ARTIST_MEDIUMS: &[Choice] = &[
    ("Painting", "Painting"),
    ("Sculpture", "Sculpture"),
    ("Drawing", "Drawing"),
    ("Printmaking", "Printmaking"),
    ("Photography", "Photography"),
    ("Mixed Media", "Mixed Media"),
    ("Digital Art", "Digital Art"),
    ("Installation", "Installation"),
    ("Other", "Other"),
];

// ---------------------------------------------------------------------------
// Artworks
// ---------------------------------------------------------------------------

/// Artworks accept a narrower movement list than artists.
pub const ARTWORK_MOVEMENTS: &[Choice] = &[
    ("Renaissance", "Renaissance"),
    ("Baroque", "Baroque"),
    ("Impressionism", "Impressionism"),
    ("Post-Impressionism", "Post-Impressionism"),
    ("Contemporary", "Contemporary"),
    ("Other", "Other"),
];

pub const ARTWORK_SUBJECTS: &[Choice] = &[
    ("Portrait", "Portrait"),
    ("Landscape", "Landscape"),
    ("Still Life", "Still Life"),
    ("Abstract", "Abstract"),
    ("Religious", "Religious"),
    ("Other", "Other"),
];

pub const DIMENSION_UNITS: &[Choice] = &[
    ("inches", "Inches"),
    ("cm", "Centimeters"),
    ("meters", "Meters"),
    ("feet", "Feet"),
];

pub const DEFAULT_DIMENSION_UNIT: &str = "inches";

pub const WEIGHT_UNITS: &[Choice] = &[("lbs", "Pounds"), ("kg", "Kilograms"), ("grams", "Grams")];

pub const DEFAULT_WEIGHT_UNIT: &str = "lbs";

// ---------------------------------------------------------------------------
// Museums
// ---------------------------------------------------------------------------

pub const MUSEUM_TYPES: &[Choice] = &[
    ("Art", "Art Museum"),
    ("History", "History Museum"),
    ("Science", "Science Museum"),
    ("Natural History", "Natural History Museum"),
    ("Modern Art", "Modern Art Museum"),
    ("Other", "Other"),
];

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

pub const ACQUISITION_METHODS: &[Choice] = &[
    ("Purchase", "Purchase"),
    ("Donation", "Donation"),
    ("Bequest", "Bequest"),
    ("Exchange", "Exchange"),
    ("Commission", "Commission"),
    ("Transfer", "Transfer"),
];

pub const COLLECTION_STATUSES: &[Choice] = &[
    ("Active", "Active"),
    ("On Loan", "On Loan"),
    ("In Conservation", "In Conservation"),
    ("Storage", "Storage"),
    ("Deaccessioned", "Deaccessioned"),
];

pub const DEFAULT_COLLECTION_STATUS: &str = "Active";

/// Whether `value` is one of the stored values in `choices`.
pub fn is_valid_choice(choices: &[Choice], value: &str) -> bool {
    choices.iter().any(|(v, _)| *v == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_are_recognised() {
        assert!(is_valid_choice(ARTIST_MOVEMENTS, "Pop Art"));
        assert!(is_valid_choice(MUSEUM_TYPES, "Natural History"));
        assert!(is_valid_choice(DIMENSION_UNITS, "cm"));
    }

    #[test]
    fn labels_are_not_stored_values() {
        assert!(!is_valid_choice(MUSEUM_TYPES, "Art Museum"));
        assert!(!is_valid_choice(WEIGHT_UNITS, "Pounds"));
    }

    #[test]
    fn artwork_movements_are_a_subset_of_artist_movements() {
        for (value, _) in ARTWORK_MOVEMENTS {
            assert!(is_valid_choice(ARTIST_MOVEMENTS, value), "{value}");
        }
        assert!(!is_valid_choice(ARTWORK_MOVEMENTS, "Cubism"));
    }

    #[test]
    fn defaults_are_members_of_their_lists() {
        assert!(is_valid_choice(DIMENSION_UNITS, DEFAULT_DIMENSION_UNIT));
        assert!(is_valid_choice(WEIGHT_UNITS, DEFAULT_WEIGHT_UNIT));
        assert!(is_valid_choice(COLLECTION_STATUSES, DEFAULT_COLLECTION_STATUS));
    }
}
