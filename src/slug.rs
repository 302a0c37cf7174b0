/// Derives a URL-safe slug from a title: lowercase, runs of
/// non-alphanumeric characters collapsed to single hyphens, edge
/// hyphens stripped.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn validate_slug(slug: &str) -> Result<(), String> {
    if slug.is_empty() || slug.len() > 100 {
        return Err("Slug must be between 1 and 100 characters".to_string());
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Slug must contain only lowercase letters, numbers, and hyphens".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("My New Project!!"), "my-new-project");
    }

    #[test]
    fn slugify_strips_edge_hyphens() {
        assert_eq!(slugify("  --Abstract Gold Series-- "), "abstract-gold-series");
    }

    #[test]
    fn slugify_lowercases() {
        assert_eq!(slugify("UI/UX Redesign 2024"), "ui-ux-redesign-2024");
    }

    #[test]
    fn validate_rejects_uppercase_and_empty() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Has-Caps").is_err());
        assert!(validate_slug("my-new-project").is_ok());
    }
}
