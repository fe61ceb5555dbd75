//! Interactive session loop
//!
//! ```text
//! analyze <possession> <da> <tc> <tnc> <corners> <league...>
//! win | loss | weights | help | quit
//! ```

use anyhow::{anyhow, bail, Context, Result};
use std::io::{BufRead, Write};
use validator::Validate;

use sba_core::{FeedbackReport, KeyValueStore, MatchStats, Outcome, Session};

const HELP: &str = "Commands:
  analyze <possession> <da> <tc> <tnc> <corners> <league...>
  win        report the last bet as won
  loss       report the last bet as lost
  weights    show current weights
  help       show this message
  quit       leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Analyze(MatchStats),
    Feedback(Outcome),
    Weights,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "analyze" | "a" => {
            let args: Vec<&str> = parts.collect();
            if args.len() < 6 {
                bail!("usage: analyze <possession> <da> <tc> <tnc> <corners> <league...>");
            }
            let possession: f64 =
                args[0].parse().with_context(|| format!("bad possession: {}", args[0]))?;
            let mut counts = [0i32; 4];
            for (slot, raw) in counts.iter_mut().zip(&args[1..5]) {
                *slot = raw.parse().with_context(|| format!("bad number: {}", raw))?;
            }
            let league = args[5..].join(" ");
            Command::Analyze(MatchStats::new(
                possession, counts[0], counts[1], counts[2], counts[3], league,
            ))
        }
        "win" | "w" => Command::Feedback(Outcome::Win),
        "loss" | "l" => Command::Feedback(Outcome::Loss),
        "weights" => Command::Weights,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(anyhow!("unknown command: {} (try `help`)", other)),
    };
    Ok(Some(command))
}

pub fn run<S, R, W>(session: &mut Session<S>, input: R, mut out: W) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Bankroll: {:.0}. Type `help` for commands.", session.bankroll())?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {}", err)?;
                continue;
            }
        };

        match command {
            Command::Analyze(stats) => {
                if let Err(err) = stats.validate() {
                    writeln!(out, "error: invalid statistics: {}", err)?;
                    continue;
                }
                let result = session.analyze(stats);
                writeln!(out, "{}", crate::format_result(&result))?;
            }
            Command::Feedback(outcome) => match session.record_outcome(outcome) {
                Ok(Some(report)) => write_report(&mut out, &report)?,
                Ok(None) => writeln!(out, "No analysis to give feedback on.")?,
                Err(err) => {
                    log::error!("Feedback not saved: {}", err);
                    writeln!(out, "error: feedback not saved ({}), try again", err)?;
                }
            },
            Command::Weights => {
                let w = session.weights();
                writeln!(
                    out,
                    "DA {:.4} | TC {:.4} | TNC {:.4} | corners {:.4} | bias {:.4}",
                    w.attack_weight,
                    w.shots_on_target_weight,
                    w.shots_off_target_weight,
                    w.corners_weight,
                    w.bias
                )?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    Ok(())
}

fn write_report<W: Write>(out: &mut W, report: &FeedbackReport) -> Result<()> {
    writeln!(out, "{}", report.message)?;
    writeln!(
        out,
        "Weights updated: DA {:.2} -> {:.2}, TC {:.2} -> {:.2}, TNC {:.2} -> {:.2}",
        report.previous.attack_weight,
        report.updated.attack_weight,
        report.previous.shots_on_target_weight,
        report.updated.shots_on_target_weight,
        report.previous.shots_off_target_weight,
        report.updated.shots_off_target_weight
    )?;
    Ok(())
}
