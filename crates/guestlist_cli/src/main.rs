//! Terminal host for the guest list core.
//!
//! # Responsibility
//! - Map line commands onto id-keyed session actions.
//! - Redraw the whole list and banner after every command.
//!
//! Rows are addressed by their 1-based position in the visible list.

use clap::Parser;
use guestlist_core::{
    default_log_level, init_logging, Action, GuestId, ListView, NameCell, Screen, Session,
    SessionConfig, StoreConfig, DEFAULT_CATEGORIES, MAX_GUESTS,
};
use log::info;
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)]
#[command(name = "guestlist", version, about = "Manage a guest list from the terminal")]
struct Args {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,
    /// Maximum number of guests.
    #[arg(long, default_value_t = MAX_GUESTS)]
    max_guests: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Add { name: String, category: String },
    Filter(String),
    Toggle(usize),
    Edit(usize),
    Draft(usize, String),
    Save(usize),
    Rename(usize, String),
    Cancel(usize),
    Remove(usize),
    List,
    Help,
    Quit,
}

const HELP: &str = "commands:
  add <name> [| <category>]   filter <text>     list
  toggle <n>   edit <n>   draft <n> <text>   save <n>
  rename <n> <name>   cancel <n>   remove <n>   help   quit";

fn main() {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let config = SessionConfig {
        store: StoreConfig {
            max_guests: args.max_guests,
        },
        ..SessionConfig::default()
    };
    let mut session = Session::new(config);
    info!("event=cli_start module=cli status=ok max_guests={}", args.max_guests);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    draw(&mut stdout, &session.screen());
    prompt(&mut stdout);

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", help_text()),
            Ok(Command::List) => {
                session.tick();
                draw(&mut stdout, &session.screen());
            }
            Ok(command) => {
                session.tick();
                let visible = session.view();
                match to_action(command, &visible) {
                    Ok(action) => {
                        session.dispatch(action);
                    }
                    Err(message) => println!("{message}"),
                }
                draw(&mut stdout, &session.screen());
            }
            Err(message) => println!("{message}"),
        }
        prompt(&mut stdout);
    }
}

fn help_text() -> String {
    format!("{HELP}\ncategories: {}", DEFAULT_CATEGORIES.join(", "))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_start();
    let (verb, raw_rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));
    let rest = raw_rest.trim();

    match verb {
        "add" => {
            let (name, category) = rest.split_once('|').unwrap_or((rest, ""));
            Ok(Command::Add {
                name: name.to_string(),
                category: category.to_string(),
            })
        }
        // The store keeps the filter verbatim, surrounding spaces included.
        "filter" => Ok(Command::Filter(raw_rest.to_string())),
        "toggle" => parse_row(rest).map(Command::Toggle),
        "edit" => parse_row(rest).map(Command::Edit),
        "save" => parse_row(rest).map(Command::Save),
        "cancel" => parse_row(rest).map(Command::Cancel),
        "remove" => parse_row(rest).map(Command::Remove),
        "draft" | "rename" => {
            let (row, text) = rest.split_once(' ').unwrap_or((rest, ""));
            let row = parse_row(row)?;
            if verb == "draft" {
                Ok(Command::Draft(row, text.to_string()))
            } else {
                Ok(Command::Rename(row, text.to_string()))
            }
        }
        "list" | "" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}

fn parse_row(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(format!("expected a row number, got `{raw}`")),
    }
}

fn to_action(command: Command, visible: &ListView) -> Result<Action, String> {
    let row_id = |row: usize| -> Result<GuestId, String> {
        visible
            .rows
            .get(row - 1)
            .map(|row| row.id)
            .ok_or_else(|| format!("no visible row {row}"))
    };

    Ok(match command {
        Command::Add { name, category } => Action::AddGuest { name, category },
        Command::Filter(text) => Action::SetFilter { text },
        Command::Toggle(row) => Action::ToggleStatus { id: row_id(row)? },
        Command::Edit(row) => Action::BeginEdit { id: row_id(row)? },
        Command::Draft(row, text) => Action::UpdateDraft {
            id: row_id(row)?,
            text,
        },
        Command::Save(row) => Action::SaveEdit { id: row_id(row)? },
        Command::Rename(row, name) => Action::SubmitRename {
            id: row_id(row)?,
            name,
        },
        Command::Cancel(row) => Action::CancelEdit { id: row_id(row)? },
        Command::Remove(row) => Action::Remove { id: row_id(row)? },
        Command::List | Command::Help | Command::Quit => {
            return Err("command has no list action".to_string())
        }
    })
}

fn draw(out: &mut impl Write, screen: &Screen) {
    let _ = write!(out, "{}", format_screen(screen));
    let _ = out.flush();
}

fn format_screen(screen: &Screen) -> String {
    let list = &screen.list;
    let mut text = String::new();

    if let Some(notification) = &screen.notification {
        text.push_str(&format!(
            "[{}] {}\n",
            notification.kind.as_str(),
            notification.message
        ));
    }
    text.push_str(&format!(
        "Guests: {}/{} ({} attending)",
        list.total_count, list.capacity, list.attending_count
    ));
    if !list.filter.is_empty() {
        text.push_str(&format!("  filter: \"{}\"", list.filter));
    }
    text.push('\n');

    if let Some(message) = &list.empty_message {
        text.push_str(&format!("  {message}\n"));
    }
    for (index, row) in list.rows.iter().enumerate() {
        let line = match &row.name {
            NameCell::Display { name } => format!(
                "{:>3}. {name} [{}] {} ({})  toggle/edit/remove",
                index + 1,
                row.category,
                row.created_label,
                row.status.label()
            ),
            NameCell::Editing { draft } => {
                format!("{:>3}. > {draft}_  (editing: save/cancel)", index + 1)
            }
        };
        text.push_str(&line);
        text.push('\n');
    }
    text
}

fn prompt(out: &mut impl Write) {
    let _ = write!(out, "> ");
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::{format_screen, help_text, parse_command, to_action, Command};
    use guestlist_core::{Action, ManualClock, Session, SessionConfig};

    #[test]
    fn parses_add_with_category() {
        assert_eq!(
            parse_command("add Alice Smith | Family").unwrap(),
            Command::Add {
                name: "Alice Smith ".to_string(),
                category: " Family".to_string()
            }
        );
    }

    #[test]
    fn rejects_row_zero_and_unknown_verbs() {
        assert!(parse_command("toggle 0").is_err());
        assert!(parse_command("dance").is_err());
        assert_eq!(
            parse_command("rename 2 Dana Lee").unwrap(),
            Command::Rename(2, "Dana Lee".to_string())
        );
    }

    #[test]
    fn filter_text_is_kept_verbatim() {
        assert_eq!(
            parse_command("filter  fam ").unwrap(),
            Command::Filter(" fam ".to_string())
        );
        assert_eq!(parse_command("filter").unwrap(), Command::Filter(String::new()));
        assert_eq!(parse_command("  list  ").unwrap(), Command::List);
    }

    #[test]
    fn help_lists_default_categories() {
        let text = help_text();
        assert!(text.contains("Family, Friends, Work, Other"));
        assert!(text.contains("add <name> [| <category>]"));
    }

    #[test]
    fn row_numbers_map_to_visible_ids() {
        let mut session = Session::with_clock(SessionConfig::default(), ManualClock::new(0));
        session.dispatch(Action::AddGuest {
            name: "Eve".to_string(),
            category: "Family".to_string(),
        });
        let view = session.view();
        let id = view.rows[0].id;

        assert_eq!(
            to_action(Command::Toggle(1), &view).unwrap(),
            Action::ToggleStatus { id }
        );
        assert!(to_action(Command::Remove(2), &view).is_err());
    }

    #[test]
    fn screen_shows_empty_message_and_count() {
        let session = Session::with_clock(SessionConfig::default(), ManualClock::new(0));
        let text = format_screen(&session.screen());
        assert!(text.contains("Guests: 0/10"));
        assert!(text.contains("No guests added yet. Start by adding one!"));
    }
}
