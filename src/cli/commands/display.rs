//! Shared rendering of catalog entries.

use crate::catalog::{AppDescriptor, AppStatus};
use crate::ui::{ShelfTheme, UserInterface};

/// Short badge for a status.
pub fn status_badge(theme: &ShelfTheme, status: &AppStatus) -> String {
    match status {
        AppStatus::Get => format!("{}", theme.link.apply_to(status.to_string())),
        AppStatus::Installed { .. } => format!("{}", theme.success.apply_to(format!("✓ {}", status))),
        AppStatus::Update { .. } => format!("{}", theme.update.apply_to(format!("⬆ {}", status))),
    }
}

/// Render one app.
///
/// `detailed` adds package, links and release notes; verbose output mode
/// implies it.
pub fn render_app(
    ui: &mut dyn UserInterface,
    app: &AppDescriptor,
    status: Option<&AppStatus>,
    detailed: bool,
) {
    let theme = ui.theme().clone();
    let detailed = detailed || ui.output_mode().shows_details();

    let badge = status
        .map(|s| format!("  {}", status_badge(&theme, s)))
        .unwrap_or_default();
    ui.message(&format!(
        "  {} {}  {}{}",
        theme.highlight.apply_to(&app.name),
        theme.dim.apply_to(format!("v{}", app.version)),
        theme.format_rating(app.rating),
        badge
    ));
    ui.message(&format!("    {}", theme.dim.apply_to(&app.description)));

    if !detailed {
        return;
    }

    ui.message(&format!("    {} {}", theme.key.apply_to("Package:"), app.package_name));
    ui.message(&format!("    {} {}", theme.key.apply_to("Developer:"), app.developer));
    let source_label = match status.and_then(|s| s.action_url(app)) {
        Some(_) => "Install from:",
        None => "Source:",
    };
    ui.message(&format!(
        "    {} {}",
        theme.key.apply_to(source_label),
        theme.link.apply_to(&app.repo_url)
    ));
    if let Some(url) = &app.download_url {
        ui.message(&format!(
            "    {} {}",
            theme.key.apply_to("Download:"),
            theme.link.apply_to(url)
        ));
    }
    ui.message(&format!("    {}", theme.key.apply_to("What's new:")));
    for note in &app.update_notes {
        ui.message(&format!("      • {}", note));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;
    use crate::ui::{MockUI, OutputMode};

    fn app() -> AppDescriptor {
        let mut app = AppDescriptor::fallback("Asedia", &CatalogConfig::default());
        app.version = "1.6.3".to_string();
        app.download_url = Some("https://example.com/asedia.apk".to_string());
        app
    }

    #[test]
    fn summary_line_has_name_version_and_badge() {
        let mut ui = MockUI::new();
        render_app(&mut ui, &app(), Some(&AppStatus::Get), false);

        assert_eq!(ui.messages().len(), 2);
        assert!(ui.messages()[0].contains("Asedia"));
        assert!(ui.messages()[0].contains("v1.6.3"));
        assert!(ui.messages()[0].contains("GET"));
    }

    #[test]
    fn detailed_adds_links_and_notes() {
        let mut ui = MockUI::new();
        render_app(&mut ui, &app(), None, true);

        assert!(ui.has_message("com.asena.asedia"));
        assert!(ui.has_message("https://github.com/SiberizmDev/Asedia"));
        assert!(ui.has_message("https://example.com/asedia.apk"));
        assert!(ui.has_message("• Uygulama bilgileri"));
    }

    #[test]
    fn verbose_mode_implies_details() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        render_app(&mut ui, &app(), None, false);
        assert!(ui.has_message("Package:"));
    }

    #[test]
    fn update_badge_shows_versions() {
        let status = AppStatus::Update {
            installed: "1.5.0".to_string(),
            latest: "1.6.3".to_string(),
        };
        let badge = status_badge(&ShelfTheme::plain(), &status);
        assert!(badge.contains("1.5.0"));
        assert!(badge.contains("1.6.3"));
    }
}
