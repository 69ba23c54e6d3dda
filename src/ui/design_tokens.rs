// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the page's design tokens, following the W3C Design Tokens standard.

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
use hero_carousel::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.95);

    // Brand colors (orange scale)
    pub const PRIMARY_400: Color = Color::from_rgb(1.0, 0.62, 0.26);
    pub const PRIMARY_500: Color = Color::from_rgb(0.96, 0.52, 0.13);
    pub const PRIMARY_600: Color = Color::from_rgb(0.85, 0.42, 0.06);

    // Hero backgrounds shown until the slide image is decoded
    pub const HERO_FALLBACK: [Color; 3] = [
        Color::from_rgb(0.13, 0.16, 0.24),
        Color::from_rgb(0.2, 0.12, 0.18),
        Color::from_rgb(0.1, 0.2, 0.2),
    ];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Darkening layer between slide images and their text.
    pub const HERO_SCRIM: f32 = 0.35;
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
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Diameter of a hero indicator dot.
    pub const INDICATOR_DOT: f32 = 12.0;

    /// Navigation bar height.
    pub const NAV_HEIGHT: f32 = 64.0;

    /// Max width of hero and testimonial text blocks.
    pub const TEXT_BLOCK_WIDTH: f32 = 640.0;

    /// Hero height before the first window resize is known.
    pub const DEFAULT_HERO_HEIGHT: f32 = 650.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero headings
    //! - Titles: section headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    /// Hero slide heading
    pub const DISPLAY: f32 = 48.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Brand name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Hero text, quotes
    pub const BODY_LG: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Slide counter, authors
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, dots
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Keyboard focus rings
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Shadow under the pinned navigation bar.
    pub const NAV: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.1,
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_PRESSED < 1.0);
    assert!(opacity::HERO_SCRIM > 0.0 && opacity::HERO_SCRIM < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
