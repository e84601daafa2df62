use backoffice_utils::version_info;
use egui::{Color32, Response, Ui};

/// Displays the current environment and version info in the UI.
///
/// Display format varies by environment:
/// - PR: `pr:{number}`
/// - Prod (stable): `stable:{version}`
/// - Nightly: `nightly:{date}`
/// - Test: `main:{commit}`
pub fn env_version(ui: &mut Ui) -> Response {
    let display_text = version_info::format_env_version();
    let (env_name, _) = version_info::env_version_info();

    // Color based on environment
    let color = match env_name {
        "stable" => Color32::GREEN,
        "nightly" => Color32::from_rgb(255, 165, 0), // Orange
        "pr" => Color32::LIGHT_BLUE,
        "main" => Color32::from_rgb(200, 200, 200), // Light gray
        _ => Color32::WHITE,
    };

    ui.colored_label(color, display_text)
}

#[cfg(test)]
mod env_version_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable as _;

    #[test]
    fn test_env_version_widget_shows_env_and_info() {
        let harness = Harness::new_ui(|ui| {
            super::env_version(ui);
        });

        // The widget should display something containing a colon (env:info format)
        assert!(
            harness.query_by_label_contains(":").is_some(),
            "env_version widget should display format like 'env:info'"
        );
    }
}
