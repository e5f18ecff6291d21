//! Command implementations.

use std::process::ExitCode;

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use shunt_core::{FeedbackLog, FeedbackSink, ShuntController, ShuntStatus};

use crate::sink::TerminalSink;

/// Envelope for JSON output.
#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct ListRow {
    name: String,
    status: ShuntStatus,
    description: String,
}

#[derive(Serialize)]
struct StatusReport {
    name: String,
    exists: bool,
    enabled: bool,
    description: Option<String>,
}

pub fn list(
    controller: &ShuntController,
    only_enabled: bool,
    only_disabled: bool,
    json: bool,
) -> Result<ExitCode> {
    let mut rows = Vec::new();
    for (name, description) in controller.registry().definitions() {
        let enabled = controller.is_enabled(name)?;
        if only_enabled && !enabled {
            continue;
        }
        if only_disabled && enabled {
            continue;
        }
        rows.push(ListRow {
            name: name.clone(),
            status: ShuntStatus::from_enabled(enabled),
            description: description.clone(),
        });
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: rows
            })?
        );
    } else {
        for row in &rows {
            println!("{}\t{}\t{}", row.name, row.status, row.description);
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn status(controller: &ShuntController, name: &str, json: bool) -> Result<ExitCode> {
    let report = StatusReport {
        name: name.to_string(),
        exists: controller.exists(name),
        enabled: controller.is_enabled(name)?,
        description: controller.registry().description(name).map(str::to_string),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: &report
            })?
        );
    } else if !report.exists {
        println!("disabled (undefined shunt)");
    } else if report.enabled {
        println!("enabled");
    } else {
        println!("disabled");
    }
    Ok(ExitCode::SUCCESS)
}

pub fn toggle(
    controller: &mut ShuntController,
    names: &[String],
    desired: bool,
    quiet: bool,
    json: bool,
) -> Result<ExitCode> {
    if json {
        let mut log = FeedbackLog::new();
        apply(controller, names, desired, quiet, &mut log)?;
        let ok = !log.has_errors();
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok,
                data: log.messages()
            })?
        );
        Ok(exit_code(ok))
    } else {
        let mut sink = TerminalSink::new();
        apply(controller, names, desired, quiet, &mut sink)?;
        Ok(exit_code(!sink.saw_error()))
    }
}

fn apply(
    controller: &mut ShuntController,
    names: &[String],
    desired: bool,
    quiet: bool,
    feedback: &mut dyn FeedbackSink,
) -> Result<()> {
    if names.is_empty() && !quiet {
        if desired {
            controller.enable(None, feedback)?;
        } else {
            controller.disable(None, feedback)?;
        }
        return Ok(());
    }

    let changes: IndexMap<String, bool> = if names.is_empty() {
        controller
            .registry()
            .names()
            .into_iter()
            .map(|name| (name.to_string(), desired))
            .collect()
    } else {
        names.iter().map(|name| (name.clone(), desired)).collect()
    };
    controller.set_status_multiple(&changes, !quiet, feedback)?;
    Ok(())
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
