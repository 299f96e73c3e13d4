use crate::cli::Args;
use crate::flow::solver::MaxFlowSolver;
use crate::scenario::basic::BasicSource;
use crate::scenario::csv::CsvSource;
use crate::scenario::random::RandomSource;
use crate::scenario::scenario::{RecordSource, default_courses};
use crate::simulation::engine::AssignmentEngine;
use crate::tui::app::App;
use crate::tui::draw::draw_app;
use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use std::env;
use std::io;
use std::time::Duration;

mod analysis;
mod cli;
mod flow;
mod graph;
mod model;
mod network;
mod repair;
mod scenario;
mod simulation;
mod state;
mod tui;

fn record_source(args: &Args) -> Box<dyn RecordSource> {
    let courses = args.courses.clone().unwrap_or_else(default_courses);
    match (&args.professors, args.random) {
        (Some(path), _) => Box::new(CsvSource::new(path.clone(), courses)),
        (None, Some(seed)) => {
            let count = args.professor_count.unwrap_or(courses.len() + 2);
            Box::new(RandomSource::new(seed, courses, count))
        }
        (None, None) => Box::new(BasicSource::new()),
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // stderr output would tear the dashboard
    if !args.tui || env::var_os("RUST_LOG").is_some() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let engine = AssignmentEngine::new(record_source(&args), MaxFlowSolver::seeded(args.seed));

    if args.tui {
        run_tui(App::new(engine))
    } else {
        run_plain(engine, args.runs);
        Ok(())
    }
}

fn run_plain(mut engine: AssignmentEngine<rand::rngs::StdRng>, runs: usize) {
    for _ in 0..runs {
        engine.step();
        match engine.current() {
            Some(Ok(report)) => println!("{}", report),
            Some(Err(e)) => println!("Run {} aborted: {}\n", engine.runs(), e),
            None => {}
        }
    }
}

fn run_tui(mut app: App) -> io::Result<()> {
    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|frame| draw_app(frame, &app))?;

        if crossterm::event::poll(Duration::from_millis(16))? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char(' ') => app.engine.step(),
                    KeyCode::Char('s') => app.cycle_sort(),
                    _ => continue,
                },
                _ => continue,
            }
        }
    }
    Ok(())
}
