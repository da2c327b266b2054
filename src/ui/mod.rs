pub mod editor;
pub mod header;
pub mod sidebar;
pub mod status_bar;
pub mod welcome;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block as WidgetBlock, BorderType, Borders, Clear};
use ratatui::Frame;

use crate::app::{AppState, Focus, MenuState, Screen};
use crate::app::commands::Command;

use editor::EditorPane;
use header::Header;
use sidebar::Sidebar;
use status_bar::StatusBar;
use welcome::Welcome;

pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    let file_label = match &state.screen {
        Screen::Editor { file } => Some(file.name.as_str()),
        Screen::Welcome => None,
    };
    let header = Header {
        file_label,
        date: &state.date_display,
    };
    frame.render_widget(header, chunks[0]);

    let body = chunks[1];
    let sidebar_width = if state.sidebar_open {
        sidebar_cells(body.width, state.sidebar_width_percent)
    } else {
        0
    };
    let panes =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(1)]).split(body);

    if state.sidebar_open {
        let rows = state.tree.visible_rows();
        let sidebar = Sidebar {
            rows: &rows,
            selected: state.tree.selected,
            focused: state.focus == Focus::Tree,
        };
        frame.render_widget(sidebar, panes[0]);
    }

    let main = panes[1];
    match &state.screen {
        Screen::Welcome => {
            let notes = state.tree.note_files();
            let welcome = Welcome {
                notes: &notes,
                date: &state.date_display,
            };
            frame.render_widget(welcome, main);
        }
        Screen::Editor { file } => match &state.document {
            Some(doc) => {
                let pane = EditorPane {
                    document: doc,
                    scroll: state.scroll,
                };
                frame.render_widget(pane, main);
            }
            None => render_preview(frame, &file.name, main),
        },
    }

    if state.menu.mounted && state.document.is_some() {
        render_menu_popup(frame, &state.menu, &state.commands, main);
    }

    if state.show_help {
        render_help_popup(frame, &state.hints, main);
    }

    let status = StatusBar {
        hints: &state.hints,
        message: state.status_message.as_deref(),
        editing: state.focus == Focus::Editor,
    };
    frame.render_widget(status, chunks[2]);
}

/// Sidebar width in cells for a given pane width. The product is widened so
/// very wide terminals cannot overflow u16.
pub(crate) fn sidebar_cells(width: u16, percent: u8) -> u16 {
    (width as u32 * percent as u32 / 100) as u16
}

/// Read-only placeholder for files the block editor does not handle.
fn render_preview(frame: &mut Frame, name: &str, area: Rect) {
    let lines = [
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  No preview available for this file type.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    for (i, line) in lines.into_iter().enumerate() {
        if i as u16 >= area.height {
            break;
        }
        frame.render_widget(line, Rect::new(area.x, area.y + i as u16, area.width, 1));
    }
}

/// The slash command menu, anchored next to the caret.
///
/// While `entered` is false the popup renders dimmed; the same dimmed style
/// covers the exit grace window after `visible` drops, so the menu fades
/// rather than vanishing mid-keystroke.
fn render_menu_popup(frame: &mut Frame, menu: &MenuState, commands: &[Command], area: Rect) {
    if commands.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }

    let popup_width = 34.min(area.width);
    let max_items = commands.len().min(area.height.saturating_sub(2) as usize);
    if max_items == 0 {
        return;
    }
    let popup_height = (max_items + 2) as u16;

    let (anchor_x, anchor_y) = menu.anchor;
    let x = (area.x + anchor_x).min(area.x + area.width.saturating_sub(popup_width));
    // Prefer below the caret, flip above when there is no room
    let below = area.y + anchor_y + 1;
    let y = if below + popup_height <= area.y + area.height {
        below
    } else {
        (area.y + anchor_y).saturating_sub(popup_height).max(area.y)
    };

    let popup_area = Rect::new(x, y, popup_width, popup_height);
    frame.render_widget(Clear, popup_area);

    let settled = menu.visible && menu.entered;
    let border_style = if settled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    let block = WidgetBlock::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(" Blocks ");

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let scroll_offset = if menu.selected >= max_items {
        menu.selected - max_items + 1
    } else {
        0
    };

    for (i, command) in commands
        .iter()
        .skip(scroll_offset)
        .take(max_items)
        .enumerate()
    {
        if i as u16 >= inner.height {
            break;
        }
        let is_selected = (i + scroll_offset) == menu.selected;
        let mut style = if is_selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        if !settled {
            style = style.add_modifier(Modifier::DIM);
        }

        let text = format!("{} {}  {}", command.icon, command.label, command.description);
        let max_text_width = inner.width as usize;
        let display: String = text.chars().take(max_text_width).collect();
        let padding = max_text_width.saturating_sub(display.chars().count());
        let padded = format!("{}{}", display, " ".repeat(padding));

        let line = Line::from(Span::styled(padded, style));
        let line_area = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        frame.render_widget(line, line_area);
    }
}

fn render_help_popup(frame: &mut Frame, hints: &[(String, &'static str)], area: Rect) {
    let line_count = hints.len();
    let popup_height = (line_count + 3).min(area.height as usize) as u16; // +2 borders +1 footer
    let popup_width = (area.width as u32 * 60 / 100).max(30).min(area.width as u32) as u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(x, y, popup_width, popup_height);
    frame.render_widget(Clear, popup_area);

    let block = WidgetBlock::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Help ");

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    for (i, (key_str, action_name)) in hints.iter().enumerate() {
        if i as u16 >= inner.height.saturating_sub(1) {
            break;
        }
        let key_span = Span::styled(
            format!("{:>12}", key_str),
            Style::default().fg(Color::Yellow),
        );
        let sep = Span::styled("  ", Style::default());
        let action_span = Span::styled(*action_name, Style::default().fg(Color::White));
        let line = Line::from(vec![key_span, sep, action_span]);
        let line_area = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        frame.render_widget(line, line_area);
    }

    if inner.height > 0 {
        let footer_y = inner.y + inner.height - 1;
        let footer = Line::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        );
        let footer_area = Rect::new(inner.x, footer_y, inner.width, 1);
        frame.render_widget(footer, footer_area);
    }
}
