use std::io::{self, BufRead};
use std::time::Duration;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::retry::RetryPolicy;
use crate::core::session::SessionLogic;
use crate::core::submit::{SubmitLogic, SubmitOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::station::Station;
use crate::sink::CsvWorkbook;
use crate::ui::messages;
use crate::utils::table::Table;
use crate::utils::time::now_utc;

/// Sign in and process swipes from stdin until EOF.
///
/// Each line is one raw swipe (card track or typed netID). The table is
/// reprinted after every confirmed swipe; parse and write failures only
/// affect the line that caused them.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { ta, course } = cmd {
        //
        // 1. Sign in (validation errors propagate and end the run)
        //
        let mut station = Station::new();
        SessionLogic::sign_in(&mut station, ta, course, &cfg.courses, now_utc())?;

        if let Some(session) = &station.session {
            messages::banner(&session.ta_name, &session.course_number, &session.section_label);
        }
        messages::info("Students must swipe their ID. One swipe per line, Ctrl-D to sign out.");

        //
        // 2. Open the workbook and build the retry policy
        //
        let mut sink = CsvWorkbook::open(&cfg.workbook)?;
        let retry = RetryPolicy::new(
            cfg.retry_attempts,
            Duration::from_secs(cfg.retry_delay_secs),
        );

        //
        // 3. One swipe per line, fully processed before the next
        //
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let raw = line?;
            if raw.trim().is_empty() {
                continue;
            }

            let outcome = SubmitLogic::submit(
                &mut station,
                &raw,
                &cfg.courses,
                &mut sink,
                &retry,
                cfg.session_timeout_hours,
                now_utc(),
            )?;

            match outcome {
                SubmitOutcome::SessionExpired => {
                    messages::warning(AppError::StaleSession(cfg.session_timeout_hours));
                    return Ok(());
                }
                SubmitOutcome::Rejected(msg) => messages::error(msg),
                SubmitOutcome::Logged(record) => {
                    messages::success(format!("Swipe recorded: {}", record.identifier));
                    print!("{}", Table::from_entries(&station.entries).render());
                }
                SubmitOutcome::WriteFailed(msg) => messages::error(msg),
            }
        }

        //
        // 4. EOF: explicit sign-out
        //
        SessionLogic::sign_out(&mut station);
        messages::info("TA signed out");
    }

    Ok(())
}
