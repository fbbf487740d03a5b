#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN_WIDTH: usize = 6;

fn display_width(value: &str) -> usize {
    value.chars().count()
}

/// Render an aligned plain-text table.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(first_line(cell)))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(&header_line));

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", |cell| first_line(cell));
                let text = pad(&truncate_text(value, *width), *width);
                if options.color {
                    colorize(value, text)
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    lines.extend(row_lines);
    lines.join("\n")
}

/// Cells are single-line; anything after a newline is dropped.
fn first_line(value: &str) -> &str {
    value.lines().next().unwrap_or("")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(value));
    format!("{value}{}", " ".repeat(fill))
}

fn colorize(raw: &str, padded: String) -> String {
    let code = match raw.trim() {
        "valid" | "positive" | "200" | "✅" => "32",
        "info" | "notice" => "33",
        "invalid" | "negative" | "404" | "❌" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
