use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::Notification;
use crate::presentation::theme::Theme;

/// Transient status banner, centred along the bottom edge of `area`.
pub struct NotificationBanner<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
    urgent: bool,
}

impl<'a> NotificationBanner<'a> {
    /// Colours the banner from the notification level unless overridden.
    #[must_use]
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
            urgent: notification.is_urgent(),
        }
    }

    /// Overrides the colour the notification's own level would pick.
    #[must_use]
    pub const fn urgent(mut self, urgent: bool) -> Self {
        self.urgent = urgent;
        self
    }

    /// Where the banner lands inside `area`.
    #[must_use]
    pub fn area(&self, area: Rect) -> Rect {
        let message = &self.notification.text;

        let max_width = 60.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_width);

        let inner_width = width.saturating_sub(4).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let lines = content_width.div_ceil(inner_width).max(1);
        let height = lines.saturating_add(2).min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.bottom().saturating_sub(height);

        area.intersection(Rect::new(x, y, width, height))
    }
}

impl Widget for NotificationBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let banner_area = self.area(area);
        if banner_area.area() == 0 {
            return;
        }

        let style = Style::default()
            .bg(self.theme.banner_color(self.urgent))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .style(style);

        let para = Paragraph::new(self.notification.text.as_str())
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(style);

        Clear.render(banner_area, buf);
        para.render(banner_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NotificationId, NotificationLevel};
    use crate::presentation::widgets::test_utils::{buffer_lines, find_text};

    fn render(level: NotificationLevel, text: &str) -> Buffer {
        let notification = Notification::new(NotificationId(1), level, text);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        NotificationBanner::new(&notification, &theme).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_banner_sits_at_bottom_centre() {
        let buf = render(NotificationLevel::Info, "Samosa added.");
        let (x, y) = find_text(&buf, "Samosa added.").unwrap();

        assert_eq!(y, 18);
        assert!(x > 30 && x < 40);
        assert!(buffer_lines(&buf)[..17].iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_banner_variants() {
        let info = render(NotificationLevel::Info, "Samosa added.");
        let processing = render(NotificationLevel::Processing, "Processing payment of $7.35...");

        let (x, y) = find_text(&info, "Samosa").unwrap();
        assert_eq!(info[(x, y)].bg, Color::Blue);

        let (x, y) = find_text(&processing, "Processing").unwrap();
        assert_eq!(processing[(x, y)].bg, Color::Indexed(208));
    }

    #[test]
    fn test_urgency_override() {
        let notification =
            Notification::new(NotificationId(2), NotificationLevel::Info, "Samosa added.");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        NotificationBanner::new(&notification, &theme)
            .urgent(true)
            .render(area, &mut buf);

        let (x, y) = find_text(&buf, "Samosa").unwrap();
        assert_eq!(buf[(x, y)].bg, Color::Indexed(208));
    }

    #[test]
    fn test_long_text_wraps() {
        let text = "Order successfully processed! Total: $1234.56 and some more words to wrap";
        let buf = render(NotificationLevel::Info, text);

        assert!(find_text(&buf, "Order successfully").is_some());
        assert!(find_text(&buf, "wrap").is_some());
    }
}
