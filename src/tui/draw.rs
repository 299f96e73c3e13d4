use crate::analysis::summary::{LoadStatus, ProfessorSummary, summarize};
use crate::simulation::engine::RunResult;
use crate::state::report::{Report, describe_action};
use crate::tui::app::{App, SortMode};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Padding, Paragraph, Row, Table};

pub fn draw_app(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(10),
        ])
        .split(frame.area());

    frame.render_widget(build_header(app), chunks[0]);

    match app.engine.current() {
        Some(Ok(report)) => {
            frame.render_widget(build_professor_table(report, &app.sort_mode), chunks[2]);
            frame.render_widget(build_action_list(report), chunks[3]);
        }
        Some(Err(e)) => {
            let body = Paragraph::new(e.to_string())
                .style(Style::default().red().bold())
                .block(Block::default().borders(Borders::ALL).title(" Run aborted "));
            frame.render_widget(body, chunks[2]);
        }
        None => frame.render_widget(build_hint(), chunks[2]),
    }
}

fn status_style(status: LoadStatus) -> Style {
    match status {
        LoadStatus::Satisfied => Style::default().fg(Color::Green),
        LoadStatus::Under => Style::default().fg(Color::Yellow),
        LoadStatus::Over => Style::default().light_red(),
        LoadStatus::Unresolved => Style::default().red().bold(),
    }
}

fn flow_label(result: Option<&RunResult>) -> String {
    match result {
        Some(Ok(report)) => format!("{}/{}", report.max_flow(), report.course_count()),
        Some(Err(_)) => "failed".to_string(),
        None => "-".to_string(),
    }
}

fn build_header(app: &'_ App) -> Block<'_> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    Block::new()
        .title(Line::from(vec![
            Span::raw(" Courseflow ").style(Style::default().bold().cyan()),
            Span::raw(app.engine.source().name().to_string()).style(dim),
            Span::raw(" Run: ").style(dim),
            Span::raw(format!("{}", app.engine.runs())).style(Style::default().bold()),
            Span::raw(" Flow: ").style(dim),
            Span::raw(flow_label(app.engine.current())).style(Style::default().bold()),
            Span::raw(" prev ").style(dim),
            Span::raw(flow_label(app.engine.previous())).style(dim),
            Span::raw(" Sort: ").style(dim),
            Span::raw(app.sort_mode.label()),
            Span::raw(" "),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_hint() -> Paragraph<'static> {
    Paragraph::new("space: solve   s: sort   q: quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn sort_summaries(summaries: &mut [ProfessorSummary], mode: &SortMode) {
    match mode {
        SortMode::Id => summaries.sort_by_key(|s| s.id()),
        SortMode::Load => summaries.sort_by(|a, b| b.final_load().total_cmp(&a.final_load())),
        SortMode::Status => summaries.sort_by_key(|s| match s.status() {
            LoadStatus::Unresolved => 0,
            LoadStatus::Under => 1,
            LoadStatus::Over => 2,
            LoadStatus::Satisfied => 3,
        }),
    }
}

fn build_professor_table(report: &Report, mode: &SortMode) -> Table<'static> {
    let mut summaries = summarize(report);
    sort_summaries(&mut summaries, mode);

    Table::new(
        summaries.iter().map(|summary| {
            let courses = summary
                .courses()
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(",");
            Row::new(vec![
                Cell::from(summary.id().to_string()),
                Cell::from(format!("{:>4.1}", summary.min_load())),
                Cell::from(format!("{:>4.1}", summary.max_load())),
                Cell::from(format!("{:>5.1}", summary.flow_load())),
                Cell::from(format!("{:>5.1}", summary.final_load())),
                Cell::from(format!("{:>4}", summary.new_courses())),
                Cell::from(courses),
                Cell::from(format!("{:?}", summary.status())).style(status_style(summary.status())),
            ])
        }),
        [
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Min(12),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new([
            Cell::from("ID"),
            Cell::from(" Min"),
            Cell::from(" Max"),
            Cell::from(" Flow"),
            Cell::from("Final"),
            Cell::from(" New"),
            Cell::from("Courses"),
            Cell::from("Status"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Professors ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_action_list(report: &Report) -> List<'static> {
    let items = report.repair().actions().iter().map(|action| {
        let style = if action.course().is_some() {
            Style::default()
        } else {
            Style::default().red()
        };
        ListItem::new(describe_action(action)).style(style)
    });

    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Repairs ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

