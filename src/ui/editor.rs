use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::caret::rendered_rows;
use crate::document::{BlockKind, Document};
use crate::markdown;

pub struct EditorPane<'a> {
    pub document: &'a Document,
    pub scroll: usize,
}

fn block_style(kind: BlockKind) -> Style {
    match kind {
        BlockKind::Heading1 => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        BlockKind::Heading2 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        BlockKind::Heading3 => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        BlockKind::Paragraph => Style::default().fg(Color::Gray),
    }
}

impl<'a> Widget for EditorPane<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let doc = self.document;

        // Row accounting mirrors the caret tracker: every block occupies
        // rendered_rows(raw_char_count) rows regardless of how inline
        // markdown shortens the styled text. The active block reserves a
        // cell for the cursor, which sits on row cursor / width even when
        // the text length is an exact multiple of the width.
        let mut row = 0usize;
        for (index, block) in doc.blocks.iter().enumerate() {
            let active = index == doc.active;
            let raw_count = if active {
                doc.buffer.chars.len().max(doc.buffer.cursor + 1)
            } else {
                block.text.chars().count()
            };
            let rows_used = rendered_rows(raw_count, width);
            let base = if block.text == "---" {
                Style::default().fg(Color::DarkGray)
            } else {
                block_style(block.kind)
            };

            let cells: Vec<(char, Style)> = if active {
                let mut cells: Vec<(char, Style)> =
                    doc.buffer.chars.iter().map(|&c| (c, base)).collect();
                if doc.buffer.cursor >= cells.len() {
                    cells.push((' ', base));
                }
                cells[doc.buffer.cursor].1 =
                    cells[doc.buffer.cursor].1.add_modifier(Modifier::REVERSED);
                cells
            } else if block.kind == BlockKind::Paragraph {
                markdown::render_spans(&block.text, base)
                    .into_iter()
                    .flat_map(|span| {
                        let style = span.style;
                        span.content.chars().map(move |c| (c, style)).collect::<Vec<_>>()
                    })
                    .collect()
            } else {
                block.text.chars().map(|c| (c, base)).collect()
            };

            for chunk_row in 0..rows_used {
                if row + chunk_row < self.scroll {
                    continue;
                }
                let y = (row + chunk_row - self.scroll) as u16;
                if y >= area.height {
                    break;
                }
                let start = chunk_row * width;
                for x in 0..width {
                    if start + x >= cells.len() {
                        break;
                    }
                    let (ch, style) = cells[start + x];
                    if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + y)) {
                        cell.set_char(ch);
                        cell.set_style(style);
                    }
                }
            }
            row += rows_used;
        }
    }
}
