// SPDX-License-Identifier: MPL-2.0
//! Theme provider.
//!
//! The app ships a single light palette. There is no dark variant and no
//! runtime switching; [`Theme::is_dark`] is always `false`.

pub mod design_tokens;

pub use design_tokens::Color;

use design_tokens::palette;

/// Semantic color roles consumed by screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    // Brand colors
    pub primary: Color,
    pub primary_dark: Color,
    pub secondary: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_on_primary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: palette::PRIMARY_500,
            primary_dark: palette::PRIMARY_700,
            secondary: palette::SECONDARY_700,

            background: palette::GRAY_50,
            surface: palette::WHITE,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_500,
            text_on_primary: palette::WHITE,

            success: palette::SUCCESS_500,
            warning: palette::WARNING_500,
            error: palette::ERROR_500,
            info: palette::INFO_500,
        }
    }

    /// Role name to color, in declaration order.
    #[must_use]
    pub fn roles(&self) -> [(&'static str, Color); 13] {
        [
            ("primary", self.primary),
            ("primary_dark", self.primary_dark),
            ("secondary", self.secondary),
            ("background", self.background),
            ("surface", self.surface),
            ("border", self.border),
            ("text_primary", self.text_primary),
            ("text_secondary", self.text_secondary),
            ("text_on_primary", self.text_on_primary),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("info", self.info),
        ]
    }

    #[must_use]
    pub fn role(&self, name: &str) -> Option<Color> {
        self.roles()
            .into_iter()
            .find(|(role, _)| *role == name)
            .map(|(_, color)| color)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Application theme.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    colors: ColorScheme,
}

impl Theme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        false
    }
}
