use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Styles for [`HeaderBar`].
#[allow(missing_docs)]
pub struct HeaderBarStyle {
    pub title: Style,
    pub subtitle: Style,
    pub version: Style,
}

impl HeaderBarStyle {
    /// Derives the styles from `theme`.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            title: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            subtitle: Style::default().fg(Color::Gray),
            version: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Two centred title lines with the version on the right.
pub struct HeaderBar<'a> {
    title: &'a str,
    subtitle: &'a str,
    version: Option<&'a str>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Creates a header with the two title lines.
    #[must_use]
    pub fn new(title: &'a str, subtitle: &'a str) -> Self {
        Self {
            title,
            subtitle,
            version: None,
            style: HeaderBarStyle::default(),
        }
    }

    /// Shows `v{version}` on the right of the title line.
    #[must_use]
    pub const fn version(mut self, version: &'a str) -> Self {
        self.version = Some(version);
        self
    }

    /// Overrides the default styles.
    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        Paragraph::new(vec![
            Line::styled(self.title, self.style.title),
            Line::styled(self.subtitle, self.style.subtitle),
        ])
        .alignment(Alignment::Center)
        .render(area, buf);

        if let Some(version) = self.version {
            Paragraph::new(Line::styled(format!("v{version}"), self.style.version))
                .alignment(Alignment::Right)
                .render(Rect::new(area.x, area.y, area.width, 1), buf);
        }
    }
}
