//! Visual theme and styling.

use console::Style;

/// Shelf's visual theme.
#[derive(Debug, Clone)]
pub struct ShelfTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for update badges (green bold).
    pub update: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (fuchsia bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for links (cyan underlined).
    pub link: Style,
    /// Style for rating stars (yellow).
    pub star: Style,
}

impl Default for ShelfTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ShelfTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            update: Style::new().green().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            key: Style::new().bold(),
            link: Style::new().cyan().underlined(),
            star: Style::new().yellow(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            update: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
            link: Style::new(),
            star: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Five-star rating bar; a star is filled while its index is below the rating.
    pub fn format_rating(&self, rating: f64) -> String {
        let stars: String = (0..5)
            .map(|i| if (i as f64) < rating { '★' } else { '☆' })
            .collect();
        format!("{}", self.star.apply_to(stars))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = ShelfTheme::plain().format_success("Complete");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Complete"));
    }

    #[test]
    fn theme_formats_warning() {
        let msg = ShelfTheme::plain().format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = ShelfTheme::plain().format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn rating_fills_partial_star() {
        let theme = ShelfTheme::plain();
        assert_eq!(theme.format_rating(5.0), "★★★★★");
        assert_eq!(theme.format_rating(4.5), "★★★★★");
        assert_eq!(theme.format_rating(4.0), "★★★★☆");
        assert_eq!(theme.format_rating(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ShelfTheme::default();
        let new = ShelfTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
