use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tokcount_core::{Breakdown, PaletteColor};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Header
            Constraint::Length(3),      // Model selector
            Constraint::Percentage(40), // Input text
            Constraint::Length(4),      // Stats
            Constraint::Min(3),         // Token breakdown
            Constraint::Length(3),      // Footer
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_model(f, app, chunks[1]);
    draw_input(f, app, chunks[2]);
    draw_stats(f, app.session.breakdown(), chunks[3]);
    draw_breakdown(f, app, chunks[4]);
    draw_footer(f, app, chunks[5]);

    if app.show_help {
        draw_help(f);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "GPT Tokenizer",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Estimate GPT costs and token count from your text!"),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_model(f: &mut Frame, app: &App, area: Rect) {
    let model = app.session.selected_model();
    let pipeline = app.session.pipeline();

    let price = if pipeline.pricing().contains(model) {
        format!("${} / 1K tokens", pipeline.pricing().lookup(model))
    } else {
        "no price configured".to_string()
    };

    let line = Line::from(vec![
        Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            model.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("   {}", price)),
        Span::styled(
            format!("   tokens counted with {}", pipeline.encoding_name()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let selector =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Model "));
    f.render_widget(selector, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let text = app.session.input_text();
    let mut content = Text::raw(text.to_string());

    // Cursor marker at the end of the text
    let cursor = Span::styled("▏", Style::default().fg(Color::Green));
    if text.is_empty() || text.ends_with('\n') {
        content.lines.push(Line::from(cursor));
    } else if let Some(line) = content.lines.last_mut() {
        line.spans.push(cursor);
    }

    let block = Block::default().borders(Borders::ALL).title(" Text ");
    let inner = block.inner(area);
    let input = Paragraph::new(content).wrap(Wrap { trim: false });

    // Keep the end of the text visible, counting wrapped rows
    let rows = input.line_count(inner.width);
    let scroll = rows.saturating_sub(inner.height as usize);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    f.render_widget(input.block(block).scroll((scroll, 0)), area);
}

fn draw_stats(f: &mut Frame, breakdown: &Breakdown, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let stats = [
        ("Number of Characters", breakdown.char_count.to_string()),
        ("Number of Tokens", breakdown.token_count.to_string()),
        ("Estimated Cost", breakdown.formatted_cost()),
    ];

    for ((label, value), column) in stats.into_iter().zip(columns.iter()) {
        let text = vec![
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        let stat = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(stat, *column);
    }
}

fn draw_breakdown(f: &mut Frame, app: &mut App, area: Rect) {
    let breakdown = app.session.breakdown();
    let title = format!(" Tokens ({}) ", breakdown.token_count);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);

    let paragraph = Paragraph::new(token_lines(breakdown)).wrap(Wrap { trim: false });
    let overflow = paragraph
        .line_count(inner.width)
        .saturating_sub(inner.height as usize);
    app.set_max_scroll(u16::try_from(overflow).unwrap_or(u16::MAX));

    let paragraph = paragraph.block(block).scroll((app.breakdown_scroll, 0));
    f.render_widget(paragraph, area);
}

/// Colored spans for every token; newlines inside a token start a new line
pub fn token_lines(breakdown: &Breakdown) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for token in &breakdown.tokens {
        let style = token_style(token.color);
        let mut parts = token.text.split('\n').peekable();

        while let Some(part) = parts.next() {
            if !part.is_empty() {
                current.push(Span::styled(part.replace('\t', "    "), style));
            }
            if parts.peek().is_some() {
                // Show the newline itself so newline-only tokens stay visible
                current.push(Span::styled("⏎", style));
                lines.push(Line::from(std::mem::take(&mut current)));
            }
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

fn token_style(color: PaletteColor) -> Style {
    let (r, g, b) = color.rgb();
    Style::default().bg(Color::Rgb(r, g, b)).fg(Color::Black)
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(msg) = &app.status_message {
        msg.clone()
    } else {
        "Ready".to_string()
    };

    let help_text = vec![
        Span::raw(status),
        Span::raw(" | "),
        Span::styled("esc", Style::default().fg(Color::Yellow)),
        Span::raw(":quit "),
        Span::styled("tab", Style::default().fg(Color::Yellow)),
        Span::raw(":model "),
        Span::styled("^E", Style::default().fg(Color::Yellow)),
        Span::raw(":example "),
        Span::styled("^L", Style::default().fg(Color::Yellow)),
        Span::raw(":clear "),
        Span::styled("F1", Style::default().fg(Color::Yellow)),
        Span::raw(":help"),
    ];

    let footer = Paragraph::new(Line::from(help_text))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let help = "Type or paste to edit the text.\n\n\
                tab / shift-tab    next / previous model\n\
                ctrl-e             show example\n\
                ctrl-l             clear\n\
                ctrl-up/down       scroll tokens\n\
                pgup/pgdn          scroll tokens faster\n\
                esc / ctrl-c       quit\n\n\
                Tokens are groups of characters often seen together.\n\
                Cost = tokens / 1000 x price of the selected model.";

    let paragraph = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
