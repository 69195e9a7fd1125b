//! GitHub-flavored markdown anchor/slug generation for the entry index.

/// Generate an index link for an entry title.
pub fn render_toc_link(title: &str) -> String {
    format!("[{}](#{})", title, github_slug(title))
}

/// Generate an index list item.
pub fn render_toc_item(title: &str) -> String {
    format!("* {}", render_toc_link(title))
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - remove all chars that aren't alphanumeric, space, or hyphen
/// - replace spaces with hyphens
pub fn github_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
        // everything else (backticks, punctuation, underscores) is stripped
    }
    slug.replace(' ', "-")
}
