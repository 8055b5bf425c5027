use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flap::constants::{CONFIG_FILE, INPUT_POLL_MS};
use flap::engine::{Config, GameSession};
use flap::persistence::{load_json_or_default, FileStore};
use flap::ui::render_game;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Optional ~/.flap/config.json overrides the default tuning
    let config: Config = load_json_or_default(CONFIG_FILE);
    let store = FileStore::new()?;
    let mut session = match GameSession::new(config, Box::new(store)) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Invalid config in ~/.flap/{}: {}", CONFIG_FILE, e);
            std::process::exit(1);
        }
    };

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut session);

    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();

    loop {
        // Poll briefly for input; the timeout paces the loop
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => session.flap(),
                    KeyCode::Char('r') => session.reset(),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        session.flap();
                    }
                }
                _ => {}
            }
        }

        let delta_ms = last_tick.elapsed().as_secs_f64() * 1000.0;
        last_tick = Instant::now();
        session.tick(delta_ms, &mut rng);

        terminal.draw(|frame| {
            let area = frame.size();
            render_game(frame, area, session);
        })?;
    }
}
