// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the visual tokens used to draw toasts.

## Organization

- **Palette**: Base and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border / Radius / Shadow**: Card chrome

## Examples

```
use iced_toasts::ui::design_tokens::{palette, opacity};
use iced::Color;

let tinted = Color {
    a: opacity::ICON_BADGE,
    ..palette::SUCCESS_500
};
assert!(tinted.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.2, 0.2, 0.2);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.6, 0.6, 0.6);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(1.0, 0.255, 0.424);
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.596, 0.0);
    pub const SUCCESS_500: Color = Color::from_rgb(0.0, 0.690, 0.608);
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Hovered close button
    pub const OVERLAY_SUBTLE: f32 = 0.05;
    /// Severity-tinted icon badge
    pub const ICON_BADGE: f32 = 0.15;
    /// Progress bar track
    pub const TRACK: f32 = 0.1;
    pub const MESSAGE: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Card background
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_BADGE: f32 = 36.0;
    pub const CLOSE_BUTTON: f32 = 32.0;
    pub const PROGRESS_HEIGHT: f32 = 4.0;
    pub const ACCENT_STRIPE: f32 = 6.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast icon glyph
    pub const ICON: f32 = 24.0;
    /// Close glyph
    pub const CLOSE: f32 = 18.0;
    /// Toast title
    pub const TITLE: f32 = 16.0;
    /// Toast message
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border / Radius
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const TOAST: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 30.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::ICON > typography::TITLE);
    assert!(typography::TITLE > typography::BODY);

    assert!(sizing::ICON_BADGE > sizing::CLOSE_BUTTON);
};
