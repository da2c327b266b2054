use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

pub struct Header<'a> {
    pub file_label: Option<&'a str>,
    pub date: &'a str,
}

impl<'a> Widget for Header<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Span::styled(
            " note-tui ",
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        let label = match self.file_label {
            Some(name) => format!(" Editing: {} ", name),
            None => " Welcome ".to_string(),
        };
        let file = Span::styled(label, Style::default().fg(Color::Cyan).bg(Color::DarkGray));

        let spacer_len = area.width.saturating_sub(
            title.width() as u16 + file.width() as u16 + self.date.len() as u16 + 1,
        );
        let bg = Style::default().bg(Color::DarkGray);
        let spacer = Span::styled(" ".repeat(spacer_len as usize), bg);

        let date = Span::styled(
            format!("{} ", self.date),
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        );

        let line = Line::from(vec![title, file, spacer, date]);
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
    fn header_shows_open_file_and_date() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        let header = Header {
            file_label: Some("ideas.note"),
            date: "Aug 27, 2026",
        };
        header.render(area, &mut buf);

        let content = row_text(&buf, area);
        assert!(content.contains("note-tui"));
        assert!(content.contains("Editing: ideas.note"));
        assert!(content.contains("Aug 27, 2026"));
    }

    #[test]
    fn header_without_file_shows_welcome() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        let header = Header {
            file_label: None,
            date: "Jan 01, 2026",
        };
        header.render(area, &mut buf);

        assert!(row_text(&buf, area).contains("Welcome"));
    }
}
