use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::TuiApp;

pub fn render(frame: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Article list
            Constraint::Min(8),         // Detail pane
            Constraint::Length(1),      // Status bar
        ])
        .split(frame.area());

    render_article_list(frame, app, chunks[0]);
    render_detail_pane(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_article_list(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let items: Vec<ListItem> = app
        .feed
        .state
        .articles
        .iter()
        .map(|article| {
            let badge = if article.is_local { "●" } else { "○" };
            let line = Line::from(vec![
                Span::styled(badge, Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::raw(article.title.clone()),
                Span::styled(
                    format!("  {}", article.published_date()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = format!(
        " News ({} loaded, page {}) ",
        app.feed.state.articles.len(),
        app.feed.state.current_page
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_detail_pane(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Article ");

    let Some(article) = app.selected_article() else {
        let placeholder = Paragraph::new("No article selected").block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let origin = if article.is_local {
        "Local newsroom"
    } else {
        "Syndicated"
    };

    let mut lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} | {} | {}",
                article.author,
                article.published_date(),
                origin
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(article.description.clone()),
    ];

    if let Some(url) = article.media_url() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Image: {}", url),
            Style::default().fg(Color::Blue),
        )));
    }

    let detail = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let state = &app.feed.state;

    let (text, style) = if let Some(error) = &state.error {
        (
            format!(" Error: {} (Esc to dismiss) ", error),
            Style::default().bg(Color::Red).fg(Color::White),
        )
    } else if state.is_loading {
        (
            " Loading... ".to_string(),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        )
    } else if state.is_loading_more {
        (
            " Loading more... ".to_string(),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        )
    } else if !state.has_more {
        (
            " End of feed | j/k: move | R: refresh | q: quit ".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            " j/k: move | R: refresh | q: quit ".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
