use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::tree::FileNode;

pub struct Welcome<'a> {
    pub notes: &'a [FileNode],
    pub date: &'a str,
}

impl<'a> Widget for Welcome<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Good to see you.",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", self.date),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));

        // display-only placeholder
        lines.push(Line::from(Span::styled(
            "  [ Search notes… ]",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            "  Quick actions",
            Style::default().fg(Color::Cyan),
        )));
        for action in [
            "Open a note from the sidebar",
            "Type / inside a note for block commands",
        ] {
            lines.push(Line::from(vec![
                Span::styled("    • ", Style::default().fg(Color::DarkGray)),
                Span::styled(action, Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::from(""));

        if let Some(pinned) = self.notes.first() {
            lines.push(Line::from(Span::styled(
                "  Pinned",
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(vec![
                Span::styled("    ★ ", Style::default().fg(Color::Yellow)),
                Span::styled(pinned.name.clone(), Style::default().fg(Color::White)),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "  Recent notes",
            Style::default().fg(Color::Cyan),
        )));
        if self.notes.is_empty() {
            lines.push(Line::from(Span::styled(
                "    No notes yet",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for note in self.notes {
            lines.push(Line::from(vec![
                Span::styled("    • ", Style::default().fg(Color::DarkGray)),
                Span::styled(note.name.clone(), Style::default().fg(Color::White)),
            ]));
        }

        for (i, line) in lines.into_iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            line.render(Rect::new(area.x, area.y + i as u16, area.width, 1), buf);
        }
    }
}
