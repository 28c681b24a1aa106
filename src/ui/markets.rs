//! Innovation market board view

use super::render_scrollable_list;
use crate::app::App;
use crate::state::{Market, StatTile, Trend, CATEGORY_FILTERS, STAT_TILES};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

const GOLD: Color = Color::Yellow;
const STATS_HEIGHT: u16 = 4;

/// Draw the market board
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(4)]; // Hero
    if app.state.show_stats {
        constraints.push(Constraint::Length(STATS_HEIGHT));
    }
    constraints.push(Constraint::Length(3)); // Filters
    constraints.push(Constraint::Min(0)); // Board

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    draw_hero(frame, chunks[next]);
    next += 1;
    if app.state.show_stats {
        draw_stats(frame, chunks[next]);
        next += 1;
    }
    draw_filters(frame, chunks[next], app);
    next += 1;

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[next]);
    draw_market_list(frame, body[0], app);
    draw_market_detail(frame, body[1], app);
}

fn draw_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Canadian Innovation ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Accelerated",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Back breakthrough SRED projects. Government funding kicks in at $100k liquidity.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("20% Taxpayer Returns", Style::default().fg(GOLD)),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled("Government Bonding Curve", Style::default().fg(Color::Blue)),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled("Collective Curation", Style::default().fg(Color::Cyan)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_stats(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(STAT_TILES.iter().map(|_| Constraint::Ratio(1, STAT_TILES.len() as u32)))
        .split(area);

    for (tile, chunk) in STAT_TILES.iter().zip(chunks.iter()) {
        draw_stat_tile(frame, *chunk, tile);
    }
}

fn draw_stat_tile(frame: &mut Frame, area: Rect, tile: &StatTile) {
    let accent = if tile.featured { GOLD } else { Color::DarkGray };
    let change_color = match tile.trend {
        Trend::Up => Color::Green,
        Trend::Neutral => Color::DarkGray,
    };

    let content = vec![
        Line::from(vec![
            Span::styled(tile.value, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(tile.change, Style::default().fg(change_color)),
        ]),
        Line::from(Span::styled(tile.title, Style::default().fg(Color::Gray))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_filters(frame: &mut Frame, area: Rect, app: &App) {
    let board = &app.state.market_board;
    let selected = board.filter();

    let mut spans = Vec::new();
    for filter in CATEGORY_FILTERS {
        let style = if filter == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(" {} {} ", filter.name, filter.count),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .title(format!(" Sort: {} [s] ", board.sort.label()))
        .title_alignment(Alignment::Right)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_market_list(frame: &mut Frame, area: Rect, app: &App) {
    let board = &app.state.market_board;
    let visible = board.visible();

    let block = Block::default()
        .title(format!(" Markets ({}) ", visible.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if visible.is_empty() {
        let message = Paragraph::new("No projects in this category.\nPress h/l to change category.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, market)| {
            let is_selected = idx == board.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::styled(prefix, style),
                Span::styled(market.title, style.add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(
                    format!("${:.2}", market.current_price),
                    Style::default().fg(Color::White),
                ),
                Span::raw(" "),
                price_change_span(market),
            ];
            if market.is_near_government_funding() {
                spans.push(Span::styled(" ⚡", Style::default().fg(GOLD)));
            }

            ListItem::new(vec![
                Line::from(spans),
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(market.category, Style::default().fg(Color::Blue)),
                    Span::styled(
                        format!(
                            "  {} backers  {} left  {:.0}% funded",
                            market.backers,
                            market.time_left,
                            market.progress_percent()
                        ),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ])
        })
        .collect();

    render_scrollable_list(frame, area, List::new(items).block(block), board.selected_index);
}

fn draw_market_detail(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(market) = app.state.market_board.selected() else {
        frame.render_widget(block, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Header and price
            Constraint::Length(1), // Progress label
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Remaining
            Constraint::Length(2), // Stats
        ])
        .split(inner);

    let mut badges = vec![Span::styled(
        format!("[{}]", market.category),
        Style::default().fg(Color::Blue),
    )];
    if market.is_near_government_funding() {
        badges.push(Span::styled(" ⚡ Near Gov Funding", Style::default().fg(GOLD)));
    }

    let probability_style = if market.is_probability_high() {
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let header = vec![
        Line::from(badges),
        Line::from(Span::styled(
            market.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            market.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Current Price ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("${:.2} ", market.current_price),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            price_change_span(market),
            Span::styled("   Success Rate ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}%", market.probability), probability_style),
        ]),
    ];
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), chunks[0]);

    let progress = market.progress_percent();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Funding Progress ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!(
                "{} / {}",
                format_compact(market.raised),
                format_compact(market.funding_goal)
            )),
        ])),
        chunks[1],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(GOLD).bg(Color::Black))
            .ratio((progress / 100.0).clamp(0.0, 1.0))
            .label(format!("{progress:.1}% Complete")),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "{} to go",
                format_dollars(market.funding_goal.saturating_sub(market.raised))
            ),
            Style::default().fg(GOLD),
        ))
        .alignment(Alignment::Right),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", format_compact(market.liquidity)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<10}", market.backers),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(market.time_left, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(
                format!("{:<10}{:<10}{}", "Liquidity", "Backers", "Left"),
                Style::default().fg(Color::DarkGray),
            )),
        ]),
        chunks[4],
    );
}

fn price_change_span(market: &Market) -> Span<'static> {
    if market.is_positive() {
        Span::styled(
            format!("▲ +{:.2}%", market.price_change),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::styled(
            format!("▼ {:.2}%", market.price_change),
            Style::default().fg(Color::Red),
        )
    }
}

/// `$87.5k` style amount; values under 1000 are shown whole
fn format_compact(amount: u64) -> String {
    if amount >= 1000 {
        format!("${:.1}k", amount as f64 / 1000.0)
    } else {
        format!("${amount}")
    }
}

/// `$112,500` style amount
fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(87_500), "$87.5k");
        assert_eq!(format_compact(1_420_000), "$1420.0k");
        assert_eq!(format_compact(999), "$999");
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(112_500), "$112,500");
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(1_000_000), "$1,000,000");
    }

    #[test]
    fn test_price_change_sign() {
        let markets = crate::state::mock_markets();
        assert_eq!(price_change_span(&markets[0]).content, "▲ +8.20%");
        assert_eq!(price_change_span(&markets[1]).content, "▼ -2.40%");
    }
}
