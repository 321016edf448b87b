use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::ScorecardError;
use crate::model::{HoleCount, ParPreset, Theme};
use crate::session::{Phase, Session};
use crate::storage::Storage;
use crate::view;

mod commands;
mod parse;

use commands::{CommandId, build_repl_help, find_command};
use parse::{format_parse_error, parse_delta, parse_items, parse_position};

pub enum LineOutcome {
    Continue(String),
    Exit,
}

/// Interactive loop over stdin. Ctrl-C / Ctrl-D leave without losing the round.
///
/// # Errors
/// Returns an error if the terminal cannot be read.
pub fn run_repl<S: Storage>(session: &mut Session<S>) -> Result<()> {
    let mut rl = DefaultEditor::new().context("init repl")?;
    println!("Golf scorecard. Type `help` for commands, Ctrl-D to quit.");
    println!("{}", landing(session));
    loop {
        match rl.readline("golf> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(input)?;
                let mut confirm = |question: &str| -> Result<bool> {
                    match rl.readline(&format!("{question} [y/N] ")) {
                        Ok(answer) => Ok(matches!(answer.trim(), "y" | "Y" | "yes")),
                        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(false),
                        Err(err) => Err(err).context("read confirmation"),
                    }
                };
                match handle_line(session, input, &mut confirm)? {
                    LineOutcome::Continue(output) => {
                        if !output.is_empty() {
                            println!("{}", output.trim_end());
                        }
                    }
                    LineOutcome::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("read repl input"),
        }
    }
    Ok(())
}

fn landing<S: Storage>(session: &Session<S>) -> String {
    match (session.phase(), session.current_round()) {
        (Phase::RoundInProgress, Some(round)) => {
            format!("Resuming round in progress.\n{}", view::render_scorecard(round))
        }
        _ => "No round in progress. Type `new` to start one.".to_string(),
    }
}

/// Runs one command line against the session. `confirm` is asked before destructive steps.
///
/// # Errors
/// Only if `confirm` itself fails; refused commands are reported in the output text.
pub fn handle_line<S, F>(
    session: &mut Session<S>,
    line: &str,
    confirm: &mut F,
) -> Result<LineOutcome>
where
    S: Storage,
    F: FnMut(&str) -> Result<bool>,
{
    let items = match parse_items(line) {
        Ok(items) => items,
        Err(err) => return Ok(LineOutcome::Continue(format_parse_error(line, err.index))),
    };
    let Some((command_token, args)) = items.split_first() else {
        return Ok(LineOutcome::Continue(String::new()));
    };
    let Some(command) = find_command(command_token) else {
        return Ok(LineOutcome::Continue(format!(
            "Unknown command: {command_token}\n{}",
            build_repl_help()
        )));
    };
    let arg = |i: usize| args.get(i).map(String::as_str);

    let output = match command.id {
        CommandId::Help => build_repl_help(),
        CommandId::Exit => return Ok(LineOutcome::Exit),
        CommandId::NewRound => {
            if session.phase() == Phase::RoundInProgress
                && !confirm("A round is in progress. Discard it and start over?")?
            {
                return Ok(LineOutcome::Continue("Kept the current round.".to_string()));
            }
            report(session.start_new_round(), || setup_text(session))
        }
        CommandId::Again => {
            if session.phase() == Phase::RoundInProgress
                && !confirm("A round is in progress. Clear its scores and start again?")?
            {
                return Ok(LineOutcome::Continue("Kept the current round.".to_string()));
            }
            report(session.start_new_round_keeping_settings(), || {
                scorecard_text(session)
            })
        }
        CommandId::Setup => setup_text(session),
        CommandId::AddPlayer => report(session.add_player(), || setup_text(session)),
        CommandId::RemovePlayer => match parse_position(arg(0), "player") {
            Ok(index) => report(session.remove_player(index), || setup_text(session)),
            Err(msg) => msg,
        },
        CommandId::RenamePlayer => match parse_position(arg(0), "player") {
            Ok(index) => {
                let name = args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
                report(session.rename_player(index, &name), || setup_text(session))
            }
            Err(msg) => msg,
        },
        CommandId::Holes => {
            let holes = arg(0)
                .and_then(|s| s.parse::<u8>().ok())
                .and_then(|n| HoleCount::try_from(n).ok());
            match holes {
                Some(holes) => match session.set_hole_count(holes, false) {
                    Err(ScorecardError::ConfirmationRequired(why)) => {
                        if confirm(&format!("Switching to 9 holes: {why}. Continue?"))? {
                            report(session.set_hole_count(holes, true), || setup_text(session))
                        } else {
                            "Kept 18 holes.".to_string()
                        }
                    }
                    other => report(other, || setup_text(session)),
                },
                None => "usage: holes <9|18>".to_string(),
            }
        }
        CommandId::Par => match (parse_position(arg(0), "hole"), parse_delta(arg(1))) {
            (Ok(hole), Ok(delta)) => report(session.set_par(hole, delta), || setup_text(session)),
            (Err(msg), _) | (_, Err(msg)) => msg,
        },
        CommandId::Preset => match arg(0).map(str::parse::<ParPreset>) {
            Some(Ok(preset)) => report(session.apply_par_preset(preset), || setup_text(session)),
            Some(Err(rejection)) => rejection.to_string(),
            None => "usage: preset <standard18|standard9>".to_string(),
        },
        CommandId::Course => {
            let value = args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
            let result = match arg(0) {
                Some("name") => session.set_course_name(&value),
                Some("rating") => session.set_course_rating(&value),
                Some("slope") => session.set_course_slope(&value),
                _ => {
                    return Ok(LineOutcome::Continue(
                        "usage: course <name|rating|slope> <value>".to_string(),
                    ));
                }
            };
            report(result, || setup_text(session))
        }
        CommandId::Stroke => {
            match (parse_position(arg(0), "player"), parse_position(arg(1), "hole")) {
                (Ok(player), Ok(hole)) => {
                    let raw = arg(2).unwrap_or_default();
                    report(session.set_stroke(player, hole, raw), || {
                        player_text(session, player)
                    })
                }
                (Err(msg), _) | (_, Err(msg)) => msg,
            }
        }
        CommandId::Card => match arg(0) {
            Some(_) => match parse_position(arg(0), "player") {
                Ok(index) => player_text(session, index),
                Err(msg) => msg,
            },
            None => scorecard_text(session),
        },
        CommandId::EndRound => {
            if session.phase() == Phase::RoundComplete
                && !confirm("This round was already finished. Record it again?")?
            {
                return Ok(LineOutcome::Continue(String::new()));
            }
            match session.finalize_round() {
                Ok(result) => view::render_summary(result),
                Err(ScorecardError::RoundIncomplete) => {
                    "Enter every hole for every player before ending the round.".to_string()
                }
                Err(e) => e.to_string(),
            }
        }
        CommandId::Summary => session
            .last_result()
            .or_else(|| session.history().last())
            .map_or_else(|| "No finished rounds yet.".to_string(), view::render_summary),
        CommandId::History => view::render_history(session.history()),
        CommandId::Theme => match arg(0).map(str::parse::<Theme>) {
            Some(Ok(theme)) => report(session.set_theme(theme), || {
                view::render_settings(session.settings())
            }),
            Some(Err(rejection)) => rejection.to_string(),
            None => "usage: theme <light|dark>".to_string(),
        },
        CommandId::Settings => view::render_settings(session.settings()),
        CommandId::Reset => {
            if confirm("This will erase all saved data on this device. Are you sure?")? {
                report(session.reset_all(true), || "All data erased.".to_string())
            } else {
                "Nothing erased.".to_string()
            }
        }
    };
    Ok(LineOutcome::Continue(output))
}

fn report<F: FnOnce() -> String>(result: Result<(), ScorecardError>, on_ok: F) -> String {
    match result {
        Ok(()) => on_ok(),
        Err(ScorecardError::NoRound) => "No round in progress. Type `new` to start one.".to_string(),
        Err(ScorecardError::RoundFinished) => {
            "This round is finished. Type `again` or `new` to start another.".to_string()
        }
        Err(e) => e.to_string(),
    }
}

fn setup_text<S: Storage>(session: &Session<S>) -> String {
    session
        .current_round()
        .map_or_else(|| ScorecardError::NoRound.to_string(), view::render_setup)
}

fn scorecard_text<S: Storage>(session: &Session<S>) -> String {
    session
        .current_round()
        .map_or_else(|| ScorecardError::NoRound.to_string(), view::render_scorecard)
}

fn player_text<S: Storage>(session: &Session<S>, index: usize) -> String {
    let Some(round) = session.current_round() else {
        return ScorecardError::NoRound.to_string();
    };
    round.players.get(index).map_or_else(
        || format!("no player {}", index + 1),
        |player| view::render_player_card(round, player),
    )
}
