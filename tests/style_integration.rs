// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_dashkit::ui::design_tokens::{palette, sizing};
    use iced_dashkit::ui::notifications::Severity;
    use iced_dashkit::ui::sidebar::indent;
    use iced_dashkit::ui::styles::{button, container};
    use iced_dashkit::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::primary(&theme, status);
                let _ = button::ghost(&theme, status);
                let _ = button::menu_item(&theme, status);
                let _ = button::menu_item_active(&theme, status);
                let _ = button::filled(palette::WARNING_500, palette::WARNING_600)(&theme, status);
            }
        }
    }

    #[test]
    fn all_container_styles_are_callable() {
        let theme = Theme::Light;
        let _ = container::card(&theme);
        let _ = container::page(&theme);
        let _ = container::header_bar(&theme);
        let _ = container::side_panel(&theme);
        let _ = container::separator(&theme);
        assert!(container::backdrop(&theme).background.is_some());
    }

    #[test]
    fn primary_button_uses_primary_palette() {
        let style = button::primary(&Theme::Light, Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_600))
        );
    }

    #[test]
    fn every_severity_has_its_own_accent() {
        let colors: Vec<_> = Severity::ALL.iter().map(|s| s.color()).collect();
        assert_eq!(colors[0], palette::SUCCESS_500);
        assert_eq!(colors[1], palette::ERROR_500);
        assert_eq!(colors[2], palette::WARNING_500);
        assert_eq!(colors[3], palette::INFO_500);
    }

    #[test]
    fn sidebar_fits_nested_rows() {
        assert!(indent(3) < sizing::SIDEBAR_WIDTH / 2.0);
    }

    #[test]
    fn fixed_theme_modes_resolve_directly() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
        assert!(matches!(ThemeMode::Dark.theme(), Theme::Dark));
        assert!(matches!(ThemeMode::Light.theme(), Theme::Light));
    }
}
