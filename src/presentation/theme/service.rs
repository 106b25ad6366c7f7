use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Orange used for the banner while a payment is in flight.
const PROCESSING_COLOR: Color = Color::Indexed(208);

/// Colours and styles shared by every widget.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent colour from the config.
    pub accent: Color,
    /// Banner background for regular notifications.
    pub info_banner: Color,
    /// Banner background while a payment is in flight.
    pub processing_banner: Color,
    /// Highlighted row.
    pub selection_style: Style,
    /// Secondary text.
    pub dimmed_style: Style,
    /// Prices.
    pub price_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Red")
    }
}

impl Theme {
    /// Builds a theme from a colour name or `#rrggbb` code. Unknown values fall back to red.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme around `accent`.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            info_banner: Color::Blue,
            processing_banner: PROCESSING_COLOR,
            selection_style: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            price_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
        }
    }

    /// Banner background for the given urgency.
    #[must_use]
    pub const fn banner_color(&self, urgent: bool) -> Color {
        if urgent {
            self.processing_banner
        } else {
            self.info_banner
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Some((r, g, b)) = s.strip_prefix('#').and_then(parse_hex_color) {
        return Color::Rgb(r, g, b);
    }

    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    match s.to_lowercase().as_str() {
        "orange" => PROCESSING_COLOR,
        _ => Color::Red,
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
            parse_hex_color(&doubled)
        }
        _ => None,
    }
}
