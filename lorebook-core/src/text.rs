//! Text utilities

/// Reduce a display title to a stable identifier.
///
/// Lowercases, keeps alphanumerics, and collapses every other run of
/// characters into a single dash. Matches the host's identifier style for
/// advancement entries ("Extra Attack" becomes "extra-attack").
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    slug
}
