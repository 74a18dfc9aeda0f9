use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use gallery_core::{update, AppState, Msg};
use gallery_logging::{gallery_debug, gallery_info};

use super::config::GalleryConfig;
use super::effects::EffectRunner;
use super::location::Location;
use super::ui;
use super::ui::input::Command;

/// Everything that can wake the event loop.
#[derive(Debug)]
pub enum AppInput {
    /// A line typed by the user.
    Line(String),
    /// A message produced off-thread (fetch completions).
    Msg(Msg),
    /// Stdin closed.
    Closed,
}

/// Runs the gallery until the user quits or stdin closes.
///
/// All state transitions happen on the calling thread.
pub fn run_app(config: &GalleryConfig, location: Location) -> anyhow::Result<()> {
    let (inbox_tx, inbox_rx) = mpsc::channel::<AppInput>();
    let runner = EffectRunner::new(config.source_settings(), location, inbox_tx.clone())?;
    spawn_stdin_reader(inbox_tx);

    let mut gallery = Gallery::new(AppState::with_options(config.gallery_options()), runner);
    println!("{}", ui::input::help_text());
    let query = gallery.runner.location().query().to_string();
    gallery.dispatch_msg(Msg::Mounted { query });
    prompt();

    for input in inbox_rx {
        match input {
            AppInput::Msg(msg) => gallery.dispatch_msg(msg),
            AppInput::Line(line) => match ui::input::parse_command(&line) {
                Ok(Command::Dispatch(msg)) => gallery.dispatch_input(msg),
                Ok(Command::ShowUrl) => println!("{}", gallery.runner.location().as_str()),
                Ok(Command::Help) => println!("{}", ui::input::help_text()),
                Ok(Command::Quit) => break,
                Err(message) => println!("{message}"),
            },
            AppInput::Closed => break,
        }
        prompt();
    }

    gallery.dispatch_msg(Msg::Unmounted);
    gallery_info!("Gallery closed at {}", gallery.runner.location().as_str());
    Ok(())
}

struct Gallery {
    state: AppState,
    runner: EffectRunner,
}

impl Gallery {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self { state, runner }
    }

    /// User input; navigation also moves the address bar.
    fn dispatch_input(&mut self, msg: Msg) {
        if let Msg::Navigated { query } = &msg {
            self.runner.location_mut().navigate(query);
        }
        self.dispatch_msg(msg);
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        if state.consume_dirty() {
            print!("{}", ui::render::render(&state.view()));
        }
        self.state = state;
    }
}

fn spawn_stdin_reader(inbox: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if inbox.send(AppInput::Line(line)).is_err() {
                return;
            }
        }
        gallery_debug!("Stdin closed");
        let _ = inbox.send(AppInput::Closed);
    });
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
