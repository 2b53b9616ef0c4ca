//! Command handlers. Each handler opens the ledger, invokes exactly one
//! operation and prints the result; every rule lives in the core.

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::core::Ledger;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, FileExportSink, default_target};
use crate::models::Role;
use crate::store::Store;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::now_local;
use std::io;
use std::path::{Path, PathBuf};

fn open_ledger(cfg: &Config) -> AppResult<Ledger> {
    let store = Store::open(Path::new(&cfg.data_dir))?;
    Ledger::open(store, cfg.retention)
}

/// Identity flags are mandatory for every operation that acts on behalf of
/// a user.
fn identity(cli: &Cli) -> AppResult<(String, String)> {
    match (&cli.user, &cli.name) {
        (Some(u), Some(n)) => Ok((u.clone(), n.clone())),
        _ => Err(AppError::from(io::Error::other(
            "--user and --name are required for this command",
        ))),
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin",
        Role::Elevated => "Elevated User",
        Role::Regular => "Regular User",
    }
}

pub fn handle_init(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.data_dir.clone(), cli.test)?;

    // Opening the ledger seeds the reserved admin account
    open_ledger(cfg)?;
    success("Attendance store initialized.");
    Ok(())
}

pub fn handle_login(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (user, name) = identity(cli)?;
    let mut ledger = open_ledger(cfg)?;

    let outcome = ledger.login(&user, &name)?;
    success(format!(
        "Logged in as: {} ({}) - {}",
        outcome.display_name,
        outcome.user_id,
        role_label(outcome.role)
    ));

    match outcome.open_session {
        Some(s) => info(format!(
            "Active session: {} since {} {}",
            s.session_id, s.date, s.time_in
        )),
        None => info("No open session."),
    }

    Ok(())
}

pub fn handle_register(
    cli: &Cli,
    cfg: &Config,
    user_id: &str,
    display_name: &str,
    role: Role,
) -> AppResult<()> {
    let mut ledger = open_ledger(cfg)?;

    // Regular accounts are self-service; privileged roles are handed out
    // by an administrator.
    if role != Role::Regular {
        let (caller, caller_name) = identity(cli)?;
        let caller_login = ledger.login(&caller, &caller_name)?;
        if !caller_login.role.is_admin() {
            return Err(AppError::Forbidden(
                "only administrators can register elevated or admin accounts".into(),
            ));
        }
    }

    let account = ledger.register(user_id, display_name, role)?;
    success(format!(
        "Registered '{}' ({}) as {}",
        account.display_name, account.user_id, account.role
    ));
    Ok(())
}

pub fn handle_users(cli: &Cli, cfg: &Config, delete: &Option<String>) -> AppResult<()> {
    let mut ledger = open_ledger(cfg)?;

    if let Some(target) = delete {
        let (caller, caller_name) = identity(cli)?;
        ledger.login(&caller, &caller_name)?;
        let removed = ledger.delete_user(&caller, target)?;
        success(format!(
            "User '{}' ({}) deleted and archived",
            removed.display_name, removed.user_id
        ));
        return Ok(());
    }

    println!("{:<16} {:<24} {:<10} {}", "USER ID", "DISPLAY NAME", "ROLE", "REGISTERED");
    for user in ledger.users() {
        println!(
            "{:<16} {:<24} {:<10} {}",
            user.user_id,
            user.display_name,
            user.role,
            user.registered_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
    Ok(())
}

pub fn handle_in(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (user, name) = identity(cli)?;
    let mut ledger = open_ledger(cfg)?;

    let session = ledger.clock_in(&user, &name, now_local())?;
    success(format!(
        "Time In recorded at {} (session {})",
        session.time_in.format("%H:%M:%S"),
        session.session_id
    ));
    Ok(())
}

pub fn handle_out(cli: &Cli, cfg: &Config, session: &Option<String>) -> AppResult<()> {
    let (user, name) = identity(cli)?;
    let mut ledger = open_ledger(cfg)?;

    let session_id = match session {
        Some(id) => id.clone(),
        None => ledger
            .open_session_for(&user)
            .map(|s| s.session_id.clone())
            .ok_or_else(|| AppError::SessionNotFound(format!("no open session for '{user}'")))?,
    };

    let record = ledger.clock_out(&session_id, &user, &name, now_local())?;
    success(format!(
        "Time Out recorded at {} (duration {})",
        record.time_out.format("%H:%M:%S"),
        record.duration
    ));
    Ok(())
}

pub fn handle_auto(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (user, name) = identity(cli)?;
    let mut ledger = open_ledger(cfg)?;

    let session = ledger.auto_new_session(&user, &name, now_local())?;
    success(format!(
        "Auto session opened at {} (session {})",
        session.time_in.format("%H:%M:%S"),
        session.session_id
    ));
    Ok(())
}

pub fn handle_force_out(cli: &Cli, cfg: &Config, session_id: &str) -> AppResult<()> {
    let (user, name) = identity(cli)?;
    let mut ledger = open_ledger(cfg)?;

    ledger.login(&user, &name)?;
    let record = ledger.force_clock_out(&user, session_id, now_local())?;
    success(format!(
        "Session for '{}' terminated at {} (duration {})",
        record.user_id,
        record.time_out.format("%H:%M:%S"),
        record.duration
    ));
    Ok(())
}

pub fn handle_sessions(cfg: &Config) -> AppResult<()> {
    let ledger = open_ledger(cfg)?;

    if ledger.open_sessions().is_empty() {
        info("No open sessions.");
        return Ok(());
    }

    println!("{:<28} {:<16} {:<24} {:<12} {}", "SESSION ID", "USER ID", "DISPLAY NAME", "DATE", "TIME IN");
    for s in ledger.open_sessions() {
        println!(
            "{:<28} {:<16} {:<24} {:<12} {}",
            s.session_id,
            s.user_id,
            s.display_name,
            s.date,
            s.time_in.format("%H:%M:%S")
        );
    }
    Ok(())
}

pub fn handle_records(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (user, name) = identity(cli)?;
    let mut ledger = open_ledger(cfg)?;

    let outcome = ledger.login(&user, &name)?;
    let records = ledger.records_for(outcome.role, &outcome.user_id);

    if records.is_empty() {
        info("No attendance records.");
        return Ok(());
    }

    println!("{:<16} {:<24} {:<12} {:<10} {:<10} {}", "USER ID", "DISPLAY NAME", "DATE", "TIME IN", "TIME OUT", "DURATION");
    for r in records {
        println!(
            "{:<16} {:<24} {:<12} {:<10} {:<10} {}",
            r.user_id,
            r.display_name,
            r.date,
            r.time_in.format("%H:%M:%S"),
            r.time_out.format("%H:%M:%S"),
            r.duration
        );
    }
    Ok(())
}

pub fn handle_export(
    cli: &Cli,
    cfg: &Config,
    format: ExportFormat,
    file: &Option<String>,
    force: bool,
) -> AppResult<()> {
    let (user, name) = identity(cli)?;
    let mut ledger = open_ledger(cfg)?;

    ledger.login(&user, &name)?;

    let now = now_local();
    let target: PathBuf = match file {
        Some(f) => PathBuf::from(f),
        None => default_target(&cfg.export_dir, format, now),
    };

    let sink = FileExportSink::new(format, force);
    let outcome = ledger.export_records(&user, &sink, &target, now)?;

    success(format!(
        "Exported {} records to {}",
        outcome.record_count, outcome.filepath
    ));
    if let Some(session) = outcome.new_session {
        info(format!(
            "New session opened for you: {} at {}",
            session.session_id,
            session.time_in.format("%H:%M:%S")
        ));
    }
    Ok(())
}

pub fn handle_exports(
    cli: &Cli,
    cfg: &Config,
    copy: &Option<usize>,
    file: &Option<String>,
) -> AppResult<()> {
    let mut ledger = open_ledger(cfg)?;

    if let Some(index) = copy {
        let (user, name) = identity(cli)?;
        ledger.login(&user, &name)?;

        // clap guarantees --file when --copy is present
        let dest = file.as_ref().map(PathBuf::from).unwrap_or_default();
        let event = ledger.copy_artifact(&user, *index, &dest)?;
        success(format!(
            "Copied artifact #{index} ({} records) to {}",
            event.record_count,
            dest.display()
        ));
        return Ok(());
    }

    if ledger.export_history().is_empty() {
        warning("No exports recorded yet.");
        return Ok(());
    }

    println!("{:<4} {:<20} {:<8} {:<16} {:<10} {}", "#", "TIMESTAMP", "RECORDS", "USER ID", "ROLE", "FILE");
    for (i, e) in ledger.export_history().iter().enumerate() {
        println!(
            "{:<4} {:<20} {:<8} {:<16} {:<10} {}",
            i + 1,
            e.timestamp.format("%Y-%m-%d %H:%M:%S"),
            e.record_count,
            e.user_id,
            e.role,
            e.filepath
        );
    }
    Ok(())
}
