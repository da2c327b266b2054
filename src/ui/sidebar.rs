use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::tree::{NodeKind, VisibleRow};

pub struct Sidebar<'a> {
    pub rows: &'a [VisibleRow],
    pub selected: usize,
    pub focused: bool,
}

impl<'a> Widget for Sidebar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let title = Line::from(Span::styled(
            " Files",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ));
        title.render(Rect::new(area.x, area.y, area.width, 1), buf);

        for (i, row) in self.rows.iter().enumerate() {
            let y = i as u16 + 1;
            if y >= area.height {
                break;
            }

            let indent = "  ".repeat(row.depth);
            let marker = match row.kind {
                NodeKind::Folder if row.expanded => "▾ ",
                NodeKind::Folder => "▸ ",
                NodeKind::File => "  ",
            };

            let mut style = match row.kind {
                NodeKind::Folder => Style::default().fg(Color::Cyan),
                NodeKind::File if row.name.ends_with(".note") => {
                    Style::default().fg(Color::White)
                }
                NodeKind::File => Style::default().fg(Color::DarkGray),
            };
            if i == self.selected {
                style = if self.focused {
                    style.bg(Color::DarkGray).add_modifier(Modifier::BOLD)
                } else {
                    style.add_modifier(Modifier::BOLD)
                };
            }

            let text = format!(" {}{}{}", indent, marker, row.name);
            let padding = (area.width as usize).saturating_sub(text.chars().count());
            let padded = format!("{}{}", text, " ".repeat(padding));

            let line = Line::from(Span::styled(padded, style));
            line.render(Rect::new(area.x, area.y + y, area.width, 1), buf);
        }
    }
}
