// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the widget kit's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_dashkit::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);

    // Brand colors (blue scale)
    pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.39, 0.92);
    pub const PRIMARY_700: Color = Color::from_rgb(0.11, 0.31, 0.85);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.94, 0.27, 0.27);
    pub const ERROR_600: Color = Color::from_rgb(0.86, 0.15, 0.15);
    pub const WARNING_500: Color = Color::from_rgb(0.92, 0.7, 0.03);
    pub const WARNING_600: Color = Color::from_rgb(0.79, 0.54, 0.02);
    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.77, 0.37);
    pub const SUCCESS_600: Color = Color::from_rgb(0.09, 0.64, 0.29);
    pub const INFO_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Tint behind toast content (the `-50` background shades).
    pub const TINT: f32 = 0.08;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;

    // Interactive element heights
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Component widths
    pub const SIDEBAR_WIDTH: f32 = 320.0;
    pub const TOAST_MIN_WIDTH: f32 = 320.0;
    pub const TOAST_MAX_WIDTH: f32 = 400.0;
    pub const CONTENT_MAX_WIDTH: f32 = 896.0;

    /// Left indentation of a top-level sidebar row.
    pub const SIDEBAR_INDENT_BASE: f32 = 12.0;
    /// Extra indentation per nesting level.
    pub const SIDEBAR_INDENT_STEP: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: page and section headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    /// Large title - Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Header bar, sidebar heading
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Card headings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Lead paragraphs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Footers, hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Input fields, separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Accent border - Toast severity stripe
    pub const WIDTH_ACCENT: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };

    pub const XL: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 16.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT > 0.0 && opacity::TINT < opacity::OVERLAY_SUBTLE);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::TOAST_MAX_WIDTH > sizing::TOAST_MIN_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_ACCENT > border::WIDTH_SM);
};
