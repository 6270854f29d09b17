// File: crates/accrue-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// CSS color, `#rrggbb` when opaque.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub tick_label: Rgba,
    pub line_stroke: Rgba,
    pub dot: Rgba,
    pub shadow: Rgba,
    pub label_text: Rgba,
    pub label_plate: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::opaque(250, 250, 252),
            axis_line: Rgba::opaque(60, 60, 70),
            tick_label: Rgba::opaque(20, 20, 30),
            line_stroke: Rgba::opaque(32, 120, 200),
            dot: Rgba::opaque(32, 120, 200),
            shadow: Rgba::new(32, 120, 200, 80),
            label_text: Rgba::opaque(20, 20, 30),
            label_plate: Rgba::new(255, 255, 255, 220),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            axis_line: Rgba::opaque(180, 180, 190),
            tick_label: Rgba::opaque(235, 235, 245),
            line_stroke: Rgba::opaque(64, 160, 255),
            dot: Rgba::opaque(64, 160, 255),
            shadow: Rgba::new(64, 160, 255, 96),
            label_text: Rgba::opaque(235, 235, 245),
            label_plate: Rgba::new(40, 40, 45, 220),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::opaque(0x00, 0x00, 0x00),
            axis_line: Rgba::opaque(0xff, 0xff, 0xff),
            tick_label: Rgba::opaque(0xff, 0xff, 0xff),
            line_stroke: Rgba::opaque(0x00, 0xff, 0xff),
            dot: Rgba::opaque(0xff, 0xff, 0x00),
            shadow: Rgba::new(0xff, 0xff, 0x00, 120),
            label_text: Rgba::opaque(0x00, 0x00, 0x00),
            label_plate: Rgba::opaque(0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
