use crate::cli::parser::Commands;
use crate::cli::session_command::{HELP, SessionCommand};
use crate::config::Config;
use crate::core::{Phase, Planner};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::render;
use std::io::{self, BufRead, IsTerminal, Write};

enum Flow {
    Continue,
    Quit,
}

/// Start an interactive planning session on stdin.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan { trip } = cmd {
        let mut planner = Planner::with_draft(trip.to_draft()?);
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        run_session(&mut planner, stdin.lock(), cfg, interactive)?;
    }

    Ok(())
}

/// Drive a planner from line input until `quit` or end of input.
/// Rejected commands are reported and the session goes on.
pub fn run_session<R: BufRead>(
    planner: &mut Planner,
    input: R,
    cfg: &Config,
    interactive: bool,
) -> AppResult<()> {
    if planner.draft().is_some_and(|d| d.is_complete()) {
        submit(planner, cfg);
    } else {
        intake_hint(planner);
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("{}", cfg.prompt);
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let cmd = match SessionCommand::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                warning(format!("{e} (type `help` for commands)"));
                continue;
            }
        };

        if let Flow::Quit = apply(planner, cmd, cfg) {
            break;
        }
    }

    Ok(())
}

fn apply(planner: &mut Planner, cmd: SessionCommand, cfg: &Config) -> Flow {
    match cmd {
        SessionCommand::Set { field, value } => match planner.draft_mut() {
            Ok(draft) => match draft.set_field(field, &value) {
                Ok(()) => success(format!("{field} set")),
                Err(e) => warning(e),
            },
            Err(e) => warning(e),
        },
        SessionCommand::Show => match planner.draft() {
            Some(draft) => print!("{}", render::draft(draft)),
            None => {
                if let Some(trip) = planner.trip() {
                    print!("{}", render::trip_details(trip));
                }
            }
        },
        SessionCommand::Submit => submit(planner, cfg),
        SessionCommand::List => match planner.checklist() {
            Some(list) => print_list(planner, list, cfg),
            None => intake_hint(planner),
        },
        SessionCommand::Toggle(id) => match planner.toggle(&id) {
            Ok(true) => success(format!("Packed {id}")),
            Ok(false) => info(format!("Unpacked {id}")),
            Err(e) => warning(e),
        },
        SessionCommand::Add { category, name } => {
            match planner.add_custom_item(&name, &category) {
                Ok(item) => success(format!(
                    "Added {} ({}) as {}",
                    item.name, item.category, item.id
                )),
                Err(e) => {
                    warning(e);
                    if let Some(list) = planner.checklist() {
                        info(format!("Categories: {}", render::category_choices(list)));
                    }
                }
            }
        }
        SessionCommand::Categories => match planner.checklist() {
            Some(list) => println!("{}", render::category_choices(list)),
            None => intake_hint(planner),
        },
        SessionCommand::Progress => match planner.checklist() {
            Some(list) => println!("{}", render::progress_line(list, cfg)),
            None => intake_hint(planner),
        },
        SessionCommand::Details => match planner.trip() {
            Some(trip) => print!("{}", render::trip_details(trip)),
            None => intake_hint(planner),
        },
        SessionCommand::Back => {
            if planner.back() {
                info("Packing list discarded. Fill in a new trip.");
            } else {
                intake_hint(planner);
            }
        }
        SessionCommand::Export => {
            if let Err(e) = planner.export() {
                warning(e);
            }
        }
        SessionCommand::Share => {
            if let Err(e) = planner.share() {
                warning(e);
            }
        }
        SessionCommand::Reset => {
            planner.reset();
            info("Starting over.");
        }
        SessionCommand::Help => println!("{HELP}"),
        SessionCommand::Quit => return Flow::Quit,
    }

    Flow::Continue
}

fn submit(planner: &mut Planner, cfg: &Config) {
    match planner.submit() {
        Ok(trip) => {
            let subtitle = render::trip_subtitle(trip);
            header("Your Packing List", &cfg.separator_char);
            println!("{subtitle}\n");
            if let Some(list) = planner.checklist() {
                print!("{}", render::checklist(list, cfg));
            }
        }
        Err(e) => warning(e),
    }
}

fn print_list(planner: &Planner, list: &crate::core::Checklist, cfg: &Config) {
    if let Some(trip) = planner.trip() {
        println!("{}\n", render::trip_subtitle(trip));
    }
    print!("{}", render::checklist(list, cfg));
}

fn intake_hint(planner: &Planner) {
    if planner.phase() != Phase::Intake {
        return;
    }
    if let Some(draft) = planner.draft() {
        let missing: Vec<&str> = draft.missing_fields().iter().map(|f| f.name()).collect();
        if missing.is_empty() {
            info("Trip form complete. Type `submit` to generate your packing list.");
        } else {
            info(format!("Plan your trip. Still needed: {}", missing.join(", ")));
        }
    }
}
