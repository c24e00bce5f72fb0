use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use todo_client::HttpTodoService;
use todo_tui::{ui, TodoApp};

fn main() -> Result<()> {
    if !io::stdout().is_tty() {
        eprintln!("this application requires a TTY to run");
        return Ok(());
    }

    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let mut app = TodoApp::new(HttpTodoService::new(&base_url));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B>(terminal: &mut Terminal<B>, app: &mut TodoApp<HttpTodoService>) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}
