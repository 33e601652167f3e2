//! verdash: a client version analytics dashboard for the terminal.
//!
//! Entry point: opens the preference database, resolves consent and
//! language, applies the display controls given on the command line,
//! runs one fetch-and-render cycle, and exits non-zero on a failed
//! fetch.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use verdash::app::App;
use verdash::managers::consent_manager::ConsentManagerTrait;
use verdash::managers::dashboard_manager::DashboardManagerTrait;
use verdash::managers::view_state_manager::ViewStateManagerTrait;
use verdash::services::localization_engine::LocalizationEngineTrait;
use verdash::services::transform;
use verdash::types::dashboard::DashboardState;
use verdash::types::preferences::{Language, PageSize, SortMode};
use verdash::ui::console;

const DEFAULT_DB_PATH: &str = "verdash.db";
const DB_PATH_ENV: &str = "VERDASH_DB";

const USAGE: &str = "usage: verdash [--sort default|asc|desc] [--items 10|20|30|50] \
                     [--offset N] [--lang zh|en|ja]";

/// Display controls accepted on the command line.
///
/// Unset controls fall back to the persisted preference (when consented)
/// or the built-in default; set controls go through the view-state
/// manager, so they persist under the same consent gate as interactive
/// changes would.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    sort: Option<SortMode>,
    items: Option<PageSize>,
    offset: Option<usize>,
    lang: Option<Language>,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let mut value_for = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", flag))
        };
        match flag.as_str() {
            "--sort" => {
                let value = value_for("--sort")?;
                options.sort = Some(
                    SortMode::from_str(&value)
                        .ok_or_else(|| format!("unknown sort mode '{}'", value))?,
                );
            }
            "--items" => {
                let value = value_for("--items")?;
                options.items = Some(
                    value
                        .parse()
                        .ok()
                        .and_then(PageSize::from_value)
                        .ok_or_else(|| format!("unsupported item count '{}'", value))?,
                );
            }
            "--offset" => {
                let value = value_for("--offset")?;
                options.offset = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid offset '{}'", value))?,
                );
            }
            "--lang" => {
                let value = value_for("--lang")?;
                options.lang = Some(
                    Language::from_code(&value)
                        .ok_or_else(|| format!("unsupported language '{}'", value))?,
                );
            }
            other => return Err(format!("unknown flag '{}'", other)),
        }
    }

    Ok(options)
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let db_path = std::env::var(DB_PATH_ENV).unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

    let mut app = match App::new(&db_path) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to initialize: {}", e);
            std::process::exit(1);
        }
    };

    // The consent prompt blocks the rest of the page on first load
    if app.consent_manager.is_dialog_open() {
        prompt_for_consent(&mut app);
    }

    app.startup();

    // Command-line controls override the resolved preferences; writes
    // stay gated on the consent decision taken above.
    if let Some(lang) = options.lang {
        let _ = app.view_state.set_language(lang, &app.consent_manager);
        let _ = app.localization_engine.set_locale(lang.code());
    }
    if let Some(mode) = options.sort {
        if let Err(e) = app.view_state.set_sort_mode(mode, &app.consent_manager) {
            eprintln!("{}", e);
        }
    }
    if let Some(size) = options.items {
        if let Err(e) = app.view_state.set_page_size(size, &app.consent_manager) {
            eprintln!("{}", e);
        }
    }

    app.dashboard.load(&app.api_client).await;

    // The offset clamps against the fetched data, so it is applied after
    // the fetch and never persisted.
    if let Some(offset) = options.offset {
        let total = app.dashboard.state().data().map_or(0, |data| {
            transform::sorted_entries(data, app.view_state.sort_mode()).len()
        });
        app.view_state.set_offset(offset, total);
    }

    if let Some(notice) = app.dashboard.take_notice() {
        println!("[{}]", app.localization_engine.t(&notice, None));
    }

    let output = console::render_dashboard(
        app.dashboard.state(),
        app.view_state.sort_mode(),
        app.view_state.window(),
        &app.localization_engine,
    );
    print!("{}", output);

    if matches!(app.dashboard.state(), DashboardState::Failed(_)) {
        std::process::exit(1);
    }
}

/// Asks the consent question on stdin. Anything other than an explicit
/// yes declines; an unreadable stdin just closes the prompt and leaves
/// the session without persistence.
fn prompt_for_consent(app: &mut App) {
    let loc = &app.localization_engine;
    println!("{}", loc.t("cookies.title", None));
    println!("{}", loc.t("cookies.description", None));

    let mut params = HashMap::new();
    params.insert("yes".to_string(), "y".to_string());
    params.insert("no".to_string(), "n".to_string());
    print!("{} ", loc.t("cookies.prompt", Some(&params)));
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => {
            let answer = line.trim().to_lowercase();
            let result = if answer == "y" || answer == "yes" {
                app.consent_manager.accept_all()
            } else {
                app.consent_manager.decline_all()
            };
            // A failed write still leaves the in-memory decision in place
            if let Err(e) = result {
                eprintln!("{}", e);
            }
        }
        Err(_) => app.consent_manager.close_dialog(),
    }
}
