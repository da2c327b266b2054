use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Parse inline note markdown into styled ratatui Spans.
///
/// Supports: **bold**, `inline code`, and [label](url) links. This is a pure
/// function of the text; block structure (headings, rules, markers) is the
/// editor's concern, not this renderer's.
pub fn render_spans(text: &str, base_style: Style) -> Vec<Span<'static>> {
    if text.is_empty() {
        return vec![];
    }

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < len {
        // `inline code`
        if chars[i] == '`' {
            if let Some(end) = find_char(&chars, i + 1, '`') {
                flush_plain(&mut plain, base_style, &mut spans);
                let content: String = chars[i + 1..end].iter().collect();
                spans.push(Span::styled(
                    content,
                    base_style.fg(Color::Green).bg(Color::DarkGray),
                ));
                i = end + 1;
                continue;
            }
        }

        // **bold**
        if chars[i] == '*' && i + 1 < len && chars[i + 1] == '*' {
            if let Some(end) = find_double(&chars, i + 2, '*') {
                flush_plain(&mut plain, base_style, &mut spans);
                let content: String = chars[i + 2..end].iter().collect();
                spans.push(Span::styled(
                    content,
                    base_style.fg(Color::White).add_modifier(Modifier::BOLD),
                ));
                i = end + 2;
                continue;
            }
        }

        // *italic* (single asterisk, checked after the bold case)
        if chars[i] == '*' {
            if let Some(end) = find_char(&chars, i + 1, '*') {
                if end > i + 1 {
                    flush_plain(&mut plain, base_style, &mut spans);
                    let content: String = chars[i + 1..end].iter().collect();
                    spans.push(Span::styled(
                        content,
                        base_style.add_modifier(Modifier::ITALIC),
                    ));
                    i = end + 1;
                    continue;
                }
            }
        }

        // [label](url)
        if chars[i] == '[' {
            if let Some((label_end, url_end)) = find_link(&chars, i) {
                flush_plain(&mut plain, base_style, &mut spans);
                let label: String = chars[i + 1..label_end].iter().collect();
                spans.push(Span::styled(
                    label,
                    base_style
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                i = url_end + 1;
                continue;
            }
        }

        plain.push(chars[i]);
        i += 1;
    }

    flush_plain(&mut plain, base_style, &mut spans);
    spans
}

fn flush_plain(plain: &mut String, style: Style, spans: &mut Vec<Span<'static>>) {
    if !plain.is_empty() {
        spans.push(Span::styled(std::mem::take(plain), style));
    }
}

fn find_char(chars: &[char], from: usize, target: char) -> Option<usize> {
    chars[from..].iter().position(|&c| c == target).map(|p| from + p)
}

fn find_double(chars: &[char], from: usize, target: char) -> Option<usize> {
    let mut i = from;
    while i + 1 < chars.len() {
        if chars[i] == target && chars[i + 1] == target {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// For `[label](url)` starting at `open`, return (index of `]`, index of `)`).
fn find_link(chars: &[char], open: usize) -> Option<(usize, usize)> {
    let label_end = find_char(chars, open + 1, ']')?;
    if chars.get(label_end + 1) != Some(&'(') {
        return None;
    }
    let url_end = find_char(chars, label_end + 2, ')')?;
    Some((label_end, url_end))
}
