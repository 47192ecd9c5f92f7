//! Alternate country names
//!
//! Common abbreviations and former names mapped to the display form used in
//! the embedded list.

/// `(alias, canonical display form)` pairs
pub const ALIASES: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("U.S.A.", "United States"),
    ("United States of America", "United States"),
    ("America", "United States"),
    ("UK", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
    ("Britain", "United Kingdom"),
    ("Burma", "Myanmar"),
    ("Swaziland", "Eswatini"),
    ("Ivory Coast", "Cote d'Ivoire"),
    ("East Timor", "Timor-Leste"),
    ("Macedonia", "North Macedonia"),
    ("Czech Republic", "Czechia"),
    ("Turkiye", "Turkey"),
    ("Cape Verde", "Cabo Verde"),
    ("Congo-Brazzaville", "Congo"),
    ("Republic of the Congo", "Congo"),
    ("DRC", "Democratic Republic of the Congo"),
    ("DR Congo", "Democratic Republic of the Congo"),
    ("Holland", "Netherlands"),
    ("UAE", "United Arab Emirates"),
    ("Holy See", "Vatican City"),
    ("Persia", "Iran"),
    ("Siam", "Thailand"),
];
