use crate::config::Config;
use crate::events::submission::{Event as SubmissionEvent, Handler as SubmissionEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::form::{DraftPersistence, FormController, FormKind};
use crate::logger::{self, LogBuffer};
use crate::state::State;
use crate::storage::FileStore;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SubmissionEventSender = std::sync::mpsc::Sender<SubmissionEvent>;
type SubmissionEventReceiver = std::sync::mpsc::Receiver<SubmissionEvent>;

/// Options picked on the command line.
///
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub form: FormKind,
    pub clear_draft: bool,
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, options: Options) -> Result<()> {
        let log_buffer = LogBuffer::new();
        logger::init(log_buffer.clone(), LevelFilter::Debug)?;

        info!("Starting application...");
        let drafts = App::drafts(&config, options)?;
        let stored = drafts.as_ref().and_then(|d| d.load());
        if stored.is_some() {
            info!("Restoring saved {} form data...", options.form);
        }
        let controller = FormController::bind(options.form, stored);

        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', using default (available: {})",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let (tx, rx) = std::sync::mpsc::channel::<SubmissionEvent>();
        let state = State::new(
            controller,
            drafts,
            Some(tx.clone()),
            config.notification_timeout(),
        )
        .with_theme(theme)
        .with_log_buffer(log_buffer);

        let app = App {
            state: Arc::new(Mutex::new(state)),
            config,
        };
        let worker = app.start_submissions(rx);
        let result = app.start_ui().await;

        // Cancel pending work before the worker goes away
        app.state.lock().await.teardown();
        drop(tx);
        if worker.join().is_err() {
            error!("Submission worker panicked");
        }

        info!("Exiting application...");
        result
    }

    /// Return draft persistence for forms that keep drafts.
    ///
    fn drafts(config: &Config, options: Options) -> Result<Option<DraftPersistence>> {
        let key = match options.form.draft_key() {
            Some(key) => key,
            None => return Ok(None),
        };
        let store = FileStore::new(&config.storage_dir()?);
        let mut drafts = DraftPersistence::new(Box::new(store), key);
        if options.clear_draft {
            info!("Clearing saved {} form data...", options.form);
            drafts.clear()?;
        }
        Ok(Some(drafts))
    }

    /// Start a separate thread for submissions and their timers.
    ///
    fn start_submissions(&self, receiver: SubmissionEventReceiver) -> std::thread::JoinHandle<()> {
        debug!("Creating new thread for asynchronous submissions...");
        let cloned_state = Arc::clone(&self.state);
        let config = self.config.clone();
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to start submission runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let mut handler = SubmissionEventHandler::new(&cloned_state, config);
                while let Ok(event) = receiver.recv() {
                    let teardown = matches!(event, SubmissionEvent::Teardown);
                    if let Err(e) = handler.handle(event).await {
                        error!("Failed to handle submission event: {}", e);
                    }
                    if teardown {
                        break;
                    }
                }
            })
        })
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        let result: Result<()> = loop {
            let mut state = self.state.lock().await;
            if let Err(e) = terminal.draw(|frame| crate::ui::render(frame, &state)) {
                break Err(e.into());
            }
            match terminal_event_handler.handle_next(&mut state) {
                Ok(true) => (),
                Ok(false) => {
                    debug!("Received application exit request.");
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}
