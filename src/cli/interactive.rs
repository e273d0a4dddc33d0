use crate::error::{MapperError, Result};
use crate::processors::Session;
use crate::writers::GeoJsonWriter;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

const HELP: &str = "\
Commands:
  search <text>      set the name search text (empty to reset)
  segment [<name>]   set the market segment (no name = none)
  submit             apply the filters
  clear              reset filters and viewport
  select <n>         focus the map on the n-th visible outlet
  list               show visible outlets
  segments           show market segments
  viewport           show the current camera target
  export <path>      write the current map source
  help               show this message
  quit               leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Search(String),
    Segment(Option<String>),
    Submit,
    Clear,
    /// 1-based position in the visible list
    Select(usize),
    List,
    Segments,
    Viewport,
    Export(PathBuf),
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = MapperError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "search" => SessionCommand::Search(rest.to_string()),
            "segment" => {
                SessionCommand::Segment(Some(rest.to_string()).filter(|s| !s.is_empty()))
            }
            "submit" => SessionCommand::Submit,
            "clear" => SessionCommand::Clear,
            "select" => {
                let n = rest
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        MapperError::InvalidCommand(format!(
                            "select expects a positive number, got '{}'",
                            rest
                        ))
                    })?;
                SessionCommand::Select(n)
            }
            "list" => SessionCommand::List,
            "segments" => SessionCommand::Segments,
            "viewport" => SessionCommand::Viewport,
            "export" if !rest.is_empty() => SessionCommand::Export(PathBuf::from(rest)),
            "export" => {
                return Err(MapperError::InvalidCommand(
                    "export expects an output path".to_string(),
                ))
            }
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => {
                return Err(MapperError::InvalidCommand(format!(
                    "unknown command '{}'",
                    other
                )))
            }
        };

        Ok(command)
    }
}

/// Read commands line by line and apply them to `session` until `quit` or EOF.
pub async fn run_interactive<R, W>(session: &mut Session, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(output, "{} outlets loaded. Type 'help' for commands.", session.features().len())?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        if command == SessionCommand::Quit {
            break;
        }
        execute(session, command, output)?;
    }

    Ok(())
}

fn execute<W: Write>(session: &mut Session, command: SessionCommand, output: &mut W) -> Result<()> {
    match command {
        SessionCommand::Search(text) => session.set_search_text(text),
        SessionCommand::Segment(segment) => {
            if let Some(ref name) = segment {
                if !session.categories().iter().any(|c| c == name) {
                    writeln!(output, "Unknown segment '{}'", name)?;
                    return Ok(());
                }
            }
            session.set_category(segment);
        }
        SessionCommand::Submit => {
            if !session.panel().submit_enabled {
                writeln!(output, "No filter set")?;
                return Ok(());
            }
            let visible = session.submit_filters().len();
            writeln!(output, "{} outlets visible", visible)?;
        }
        SessionCommand::Clear => {
            if !session.panel().clear_enabled {
                writeln!(output, "No filter set")?;
                return Ok(());
            }
            session.clear_filters();
            writeln!(output, "{} outlets visible", session.visible().len())?;
        }
        SessionCommand::Select(n) => match session.select(n - 1) {
            Some(update) => writeln!(
                output,
                "Focused [{:.6}, {:.6}] at zoom {}",
                update.center.longitude, update.center.latitude, update.zoom
            )?,
            None => writeln!(output, "No visible outlet #{}", n)?,
        },
        SessionCommand::List => {
            for row in session.panel().rows {
                writeln!(output, "{:>4}. {}", row.index + 1, row.name)?;
                writeln!(output, "      {}", row.address_line)?;
            }
        }
        SessionCommand::Segments => {
            for segment in session.categories() {
                writeln!(output, "{}", segment)?;
            }
        }
        SessionCommand::Viewport => {
            let camera = session.camera();
            writeln!(output, "{}", serde_json::to_string(&camera)?)?;
        }
        SessionCommand::Export(path) => match session.map_view() {
            Some(view) => {
                GeoJsonWriter::new().write_map_view(&view, &path)?;
                writeln!(output, "Wrote {}", path.display())?;
            }
            None => warn!("Nothing to export before the dataset is loaded"),
        },
        SessionCommand::Help => writeln!(output, "{}", HELP)?,
        SessionCommand::Quit => {}
    }

    Ok(())
}
