//! FOLIO console host.
//!
//! Runs the portfolio terminal against an in-memory page. Type commands on
//! stdin; end a line with a tab character to request completion instead of
//! submitting it. The header typing effect is played out in real time.

mod console;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use console::{Console, keys_for};
use folio_platform::{
    DesktopClock, FilePreferences, MemoryPage, MemoryPreferences, PageService, PreferenceStore,
    Services,
};
use folio_terminal::TerminalSession;
use folio_types::config::TerminalConfig;
use folio_types::input::Key;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg, FOLIO_CONFIG env var, or built-in defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
    {
        Some(path) => TerminalConfig::load(&PathBuf::from(path))?,
        None => {
            log::info!("Using built-in terminal config");
            TerminalConfig::default()
        },
    };

    let mut page = MemoryPage::from_config(&config);
    let mut prefs: Box<dyn PreferenceStore> = match &config.preferences_path {
        Some(path) => Box::new(FilePreferences::open(path.clone())?),
        None => Box::new(MemoryPreferences::new()),
    };
    let clock = DesktopClock::new();
    let headers = config.targets.headers.clone();
    let interval = Duration::from_millis(config.typing_interval_ms.max(1));

    let mut session = TerminalSession::with_builtins(config)?;
    let mut console = Console::default();
    let mut stdout = io::stdout();

    session.boot(&mut Services::new(&mut page, prefs.as_mut(), Some(&clock)));
    console.flush(session.output(), &mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut services = Services::new(&mut page, prefs.as_mut(), Some(&clock));
        for key in keys_for(&line) {
            session.handle_key(key, &mut services);
            if key == Key::Tab {
                console.flush(session.output(), &mut stdout)?;
                println!("{}{}", session.config().prompt, session.input().text());
            }
        }

        if session.is_typing() {
            while session.is_typing() {
                std::thread::sleep(interval);
                session.tick(interval, &mut services);
            }
            for id in &headers {
                match services.page.text(id) {
                    Ok(text) => println!("[{id}] {text}"),
                    Err(e) => log::warn!("Header '{id}' unreadable: {e}"),
                }
            }
        }
        console.flush(session.output(), &mut stdout)?;
    }

    log::info!("Input closed, exiting");
    Ok(())
}
