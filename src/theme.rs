pub const THEME_KEY: &str = "noteshell-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Stored preference first, then the system preference. Dark unless the
    /// system explicitly asks for light.
    pub fn resolve(stored: Option<&str>, system_prefers_light: bool) -> Self {
        stored.and_then(Self::parse).unwrap_or(if system_prefers_light {
            Self::Light
        } else {
            Self::Dark
        })
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☽",
            Self::Dark => "☀",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

/// Named color tokens for one theme. Written to the document root as CSS
/// custom properties, see [`Palette::css_variables`].
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub void: &'static str,
    pub nebula: &'static str,
    pub dust: &'static str,
    pub cosmos: &'static str,
    pub starlight: &'static str,
    pub moonlight: &'static str,
    pub distant: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub solar_flare: &'static str,
    pub solar_flare_alt: &'static str,
    pub earth_glow: &'static str,
    pub success: &'static str,
    pub constellation_line: &'static str,
    pub constellation_point: &'static str,
    pub nav_backdrop: &'static str,
    pub orb_glow: &'static str,
    pub orb_accent_glow: &'static str,
    pub window_surface: &'static str,
    pub window_chrome: &'static str,
    pub window_border: &'static str,
    pub window_text: &'static str,
    pub window_shadow: &'static str,
    pub on_accent: &'static str,
}

pub static DARK: Palette = Palette {
    void: "#0a0a0a",
    nebula: "#111111",
    dust: "#1a1a1a",
    cosmos: "#141414",
    starlight: "#ffffff",
    moonlight: "#a0a0a0",
    distant: "#666666",
    border: "#2a2a2a",
    border_light: "#333333",
    solar_flare: "#f59e0b",
    solar_flare_alt: "#fbbf24",
    earth_glow: "#3b82f6",
    success: "#22c55e",
    constellation_line: "rgba(255,255,255,0.08)",
    constellation_point: "rgba(255,255,255,0.25)",
    nav_backdrop: "rgba(10,10,10,0.95)",
    orb_glow: "rgba(255,255,255,0.03)",
    orb_accent_glow: "rgba(245,158,11,0.06)",
    window_surface: "#1c1c1e",
    window_chrome: "#2c2c2e",
    window_border: "#3a3a3c",
    window_text: "#f5f5f7",
    window_shadow: "0 50px 100px -20px rgba(0,0,0,0.6), 0 30px 60px -30px rgba(0,0,0,0.5), 0 0 0 1px rgba(255,255,255,0.05)",
    on_accent: "#000000",
};

pub static LIGHT: Palette = Palette {
    void: "#fafafa",
    nebula: "#f5f5f5",
    dust: "#eeeeee",
    cosmos: "#e8e8e8",
    starlight: "#0a0a0a",
    moonlight: "#555555",
    distant: "#888888",
    border: "#d4d4d4",
    border_light: "#e0e0e0",
    solar_flare: "#d97706",
    solar_flare_alt: "#b45309",
    earth_glow: "#2563eb",
    success: "#16a34a",
    constellation_line: "rgba(0,0,0,0.08)",
    constellation_point: "rgba(0,0,0,0.2)",
    nav_backdrop: "rgba(250,250,250,0.95)",
    orb_glow: "rgba(0,0,0,0.015)",
    orb_accent_glow: "rgba(217,119,6,0.04)",
    window_surface: "#ffffff",
    window_chrome: "#f5f5f7",
    window_border: "#d1d1d6",
    window_text: "#1d1d1f",
    window_shadow: "0 50px 100px -20px rgba(0,0,0,0.15), 0 30px 60px -30px rgba(0,0,0,0.1), 0 0 0 1px rgba(0,0,0,0.05)",
    on_accent: "#ffffff",
};

impl Palette {
    pub fn tokens(&self) -> [(&'static str, &'static str); 24] {
        [
            ("void", self.void),
            ("nebula", self.nebula),
            ("dust", self.dust),
            ("cosmos", self.cosmos),
            ("starlight", self.starlight),
            ("moonlight", self.moonlight),
            ("distant", self.distant),
            ("border", self.border),
            ("border-light", self.border_light),
            ("solar-flare", self.solar_flare),
            ("solar-flare-alt", self.solar_flare_alt),
            ("earth-glow", self.earth_glow),
            ("success", self.success),
            ("constellation-line", self.constellation_line),
            ("constellation-point", self.constellation_point),
            ("nav-backdrop", self.nav_backdrop),
            ("orb-glow", self.orb_glow),
            ("orb-accent-glow", self.orb_accent_glow),
            ("window-surface", self.window_surface),
            ("window-chrome", self.window_chrome),
            ("window-border", self.window_border),
            ("window-text", self.window_text),
            ("window-shadow", self.window_shadow),
            ("on-accent", self.on_accent),
        ]
    }

    pub fn css_variables(&self) -> String {
        self.tokens()
            .iter()
            .map(|(name, value)| format!("--{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_system() {
        assert_eq!(Theme::resolve(Some("light"), false), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), true), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_system() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, false), Theme::Dark);
    }

    #[test]
    fn toggle_round_trips_and_labels_next_theme() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }

    #[test]
    fn palettes_differ_in_every_base_color() {
        let dark = Theme::Dark.palette().tokens();
        let light = Theme::Light.palette().tokens();

        for ((name, dark_value), (_, light_value)) in dark.iter().zip(light.iter()) {
            assert_ne!(dark_value, light_value, "token {name} should change with the theme");
        }
    }

    #[test]
    fn css_variables_are_prefixed_and_terminated() {
        let css = DARK.css_variables();

        assert!(css.starts_with("--void: #0a0a0a;"));
        assert!(css.contains("--solar-flare: #f59e0b;"));
        assert_eq!(css.matches("--").count(), DARK.tokens().len());
    }
}
