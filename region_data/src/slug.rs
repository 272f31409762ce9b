//! Slug encoding for display names.
//!
//! A name is case-folded first, then every entry of [`SUBSTITUTIONS`] is applied
//! as its own full-string replace pass, in table order. Characters the table does
//! not cover pass through unchanged, so the result is only guaranteed to be ASCII
//! for names written in the covered alphabet.

/// Substitutions applied after case folding, in order.
///
/// The uppercase keys can never match because folding runs first. They are kept
/// so the table matches the one already used for published slugs.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("ç", "c"),
    ("Ç", "C"),
    ("ğ", "g"),
    ("Ğ", "G"),
    ("ı", "i"),
    ("İ", "i"),
    ("ö", "o"),
    ("Ö", "O"),
    ("ş", "s"),
    ("Ş", "S"),
    ("ü", "u"),
    ("Ü", "U"),
    (" ", "-"),
    ("'", ""),
    ("â", "a"),
    ("Â", "A"),
    ("î", "i"),
    ("Î", "I"),
];

/// Encode a display name as a lowercase, hyphen-separated slug.
///
/// Total over any input; the empty string maps to the empty string.
///
/// ```
/// use region_data::slugify;
///
/// assert_eq!(slugify("Çanakkale"), "canakkale");
/// assert_eq!(slugify("İstanbul"), "istanbul");
/// assert_eq!(slugify("Afyonkarahisar"), "afyonkarahisar");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = fold_case(name);
    for &(from, to) in SUBSTITUTIONS {
        if slug.contains(from) {
            slug = slug.replace(from, to);
        }
    }
    slug
}

/// Lowercase every character. `İ` folds to a bare `i`, without the combining dot
/// that Unicode lowercasing appends.
fn fold_case(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            'İ' => folded.push('i'),
            _ => folded.extend(ch.to_lowercase()),
        }
    }
    folded
}
