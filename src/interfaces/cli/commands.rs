use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, error, info};

use super::{preview, status, Cli, Commands};
use crate::application::{FolderMaterializer, ProcessorState, TableLoader};
use crate::domain::app_config::AppConfig;
use crate::domain::error::AppError;
use crate::domain::grid::Grid;

#[derive(Serialize)]
struct LoadReport<'a> {
    file: &'a Path,
    rows: usize,
    columns: usize,
    grid: &'a Grid,
}

#[derive(Serialize)]
struct GenerateReport<'a> {
    file: &'a Path,
    destination: Option<&'a Path>,
    created: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a AppError>,
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: &'a AppError,
}

#[derive(Clone, Copy)]
struct Style<'a> {
    json: bool,
    accent: Option<&'a str>,
}

impl Style<'_> {
    fn status(&self, line: String) -> String {
        match self.accent {
            Some(color) => status::paint(&line, color),
            None => line,
        }
    }
}

/// Runs one command against a fresh session. Returns `Ok(false)` when the
/// command reported an error to `out`. With `color`, text status lines are
/// painted in the theme's accent color.
pub fn execute<W: Write>(
    cli: &Cli,
    config: &AppConfig,
    color: bool,
    out: &mut W,
) -> io::Result<bool> {
    let loader = TableLoader::default();
    let mut state = ProcessorState::new();
    let style = Style {
        json: cli.json,
        accent: (color && !cli.json).then(|| config.theme.palette().accent.as_str()),
    };

    let ok = match &cli.command {
        Commands::Preview { table } => {
            run_preview(&mut state, &loader, table, config, style, out)?
        }
        Commands::Generate { table, dest } => {
            let dest = dest.as_deref().or(config.default_destination.as_deref());
            run_generate(&mut state, &loader, table, dest, style, out)?
        }
    };

    state.clear();
    debug!("{}", status::cleared());
    Ok(ok)
}

fn run_preview<W: Write>(
    state: &mut ProcessorState,
    loader: &TableLoader,
    table: &Path,
    config: &AppConfig,
    style: Style<'_>,
    out: &mut W,
) -> io::Result<bool> {
    let Some(rows) = load(state, loader, table, style, out)? else {
        return Ok(false);
    };

    if style.json {
        let report = LoadReport {
            file: table,
            rows,
            columns: state.grid().column_count(),
            grid: state.grid(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", preview::render(state.grid(), &config.theme))?;
        writeln!(out, "{}", style.status(status::loaded(rows)))?;
    }
    Ok(true)
}

fn run_generate<W: Write>(
    state: &mut ProcessorState,
    loader: &TableLoader,
    table: &Path,
    dest: Option<&Path>,
    style: Style<'_>,
    out: &mut W,
) -> io::Result<bool> {
    if load(state, loader, table, style, out)?.is_none() {
        return Ok(false);
    }

    if let Some(dest) = dest {
        state.set_destination(dest);
        info!("{}", status::destination_selected(dest));
    }

    let (created, failure) = match state.generate(&FolderMaterializer::new()) {
        Ok(created) => {
            info!(created, destination = ?state.destination(), "Folders created");
            (created, None)
        }
        Err(failure) => {
            error!(
                created = failure.created,
                error = %failure.error,
                "Folder generation stopped"
            );
            (failure.created, Some(failure.error))
        }
    };

    if style.json {
        let report = GenerateReport {
            file: table,
            destination: state.destination(),
            created,
            error: failure.as_ref(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else if let Some(err) = &failure {
        writeln!(out, "{}", style.status(status::failed(err)))?;
        if created > 0 {
            writeln!(out, "{} folder(s) created before the error", created)?;
        }
    } else {
        writeln!(out, "{}", style.status(status::created(created)))?;
    }

    Ok(failure.is_none())
}

/// Loads `table` into the session, reporting a failure to `out`.
fn load<W: Write>(
    state: &mut ProcessorState,
    loader: &TableLoader,
    table: &Path,
    style: Style<'_>,
    out: &mut W,
) -> io::Result<Option<usize>> {
    match state.load_file(loader, table) {
        Ok(rows) => {
            info!(path = %table.display(), rows, "Table loaded");
            Ok(Some(rows))
        }
        Err(err) => {
            error!(path = %table.display(), error = %err, "Failed to load table");
            if style.json {
                serde_json::to_writer_pretty(&mut *out, &ErrorReport { error: &err })?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", style.status(status::load_failed(&err)))?;
            }
            Ok(None)
        }
    }
}
