use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

pub struct StatusBar<'a> {
    pub hints: &'a [(String, &'static str)],
    pub message: Option<&'a str>,
    pub editing: bool,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.message {
            let line = Line::from(Span::styled(
                format!(" {} ", msg),
                Style::default().fg(Color::Yellow),
            ));
            line.render(area, buf);
            return;
        }

        if self.editing {
            let line = Line::from(Span::styled(
                " -- EDITING -- (Esc to return to the file tree) ",
                Style::default().fg(Color::Green),
            ));
            line.render(area, buf);
            return;
        }

        let mut spans = Vec::new();
        spans.push(Span::raw(" "));

        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                action.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ));
        }

        let line = Line::from(spans);
        line.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, area: Rect) -> String {
        (0..area.width)
            .map(|x| {
                buf.cell((x, 0))
                    .unwrap()
                    .symbol()
                    .chars()
                    .next()
                    .unwrap_or(' ')
            })
            .collect()
    }

    #[test]
    fn status_bar_renders_hints() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        let hints = vec![("q".to_string(), "quit"), ("b".to_string(), "sidebar")];
        StatusBar {
            hints: &hints,
            message: None,
            editing: false,
        }
        .render(area, &mut buf);

        let content = row_text(&buf, area);
        assert!(content.contains("[q]"));
        assert!(content.contains("quit"));
        assert!(content.contains("[b]"));
        assert!(content.contains("sidebar"));
    }

    #[test]
    fn message_takes_precedence_over_hints() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        let hints = vec![("q".to_string(), "quit")];
        StatusBar {
            hints: &hints,
            message: Some("Opened ideas.note"),
            editing: true,
        }
        .render(area, &mut buf);

        let content = row_text(&buf, area);
        assert!(content.contains("Opened ideas.note"));
        assert!(!content.contains("[q]"));
    }

    #[test]
    fn editing_mode_is_announced() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        StatusBar {
            hints: &[],
            message: None,
            editing: true,
        }
        .render(area, &mut buf);

        assert!(row_text(&buf, area).contains("EDITING"));
    }
}
