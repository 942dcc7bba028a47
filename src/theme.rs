//! Color theming.
//!
//! Schemes are defined in Rust and handed to the renderer as CSS custom
//! properties, so components only ever reference `var(--color-…)` and pick
//! up light or dark values without re-rendering.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub surface: &'static str,
    pub on_surface: &'static str,
    pub secondary_container: &'static str,
    pub on_secondary_container: &'static str,
}

pub const LIGHT: ColorScheme = ColorScheme {
    primary: "#6750a4",
    secondary: "#625b71",
    surface: "#fef7ff",
    on_surface: "#1d1b20",
    secondary_container: "#e8def8",
    on_secondary_container: "#1d192b",
};

pub const DARK: ColorScheme = ColorScheme {
    primary: "#d0bcfe",
    secondary: "#ccc2dc",
    surface: "#141218",
    on_surface: "#e6e0e9",
    secondary_container: "#4a4458",
    on_secondary_container: "#e8def8",
};

impl ColorScheme {
    /// CSS custom property declarations for this scheme.
    pub fn css_variables(&self) -> String {
        format!(
            "--color-primary: {}; --color-secondary: {}; --color-surface: {}; \
             --color-on-surface: {}; --color-secondary-container: {}; \
             --color-on-secondary-container: {};",
            self.primary,
            self.secondary,
            self.surface,
            self.on_surface,
            self.secondary_container,
            self.on_secondary_container,
        )
    }
}

/// Theme handed down through context for descendants that need raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeContext {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

/// Wraps the app, provides the theme context and emits the variable
/// definitions: light by default, dark under `prefers-color-scheme: dark`.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme = use_context_provider(|| ThemeContext {
        light: LIGHT,
        dark: DARK,
    });

    let css = format!(
        ":root {{ {} }} @media (prefers-color-scheme: dark) {{ :root {{ {} }} }}",
        theme.light.css_variables(),
        theme.dark.css_variables(),
    );

    rsx! {
        style { "{css}" }
        {children}
    }
}
