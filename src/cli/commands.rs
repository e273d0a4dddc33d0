use crate::cli::args::{Cli, Commands, FilterArgs};
use crate::cli::interactive::run_interactive;
use crate::error::Result;
use crate::models::TextMatchMode;
use crate::processors::{LoadState, Session};
use crate::readers::DataSource;
use crate::settings::Settings;
use crate::utils::filename::generate_default_geojson_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::GeoJsonWriter;
use std::path::{Path, PathBuf};
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    info!(data = %settings.data.path.display(), "Settings loaded");

    match cli.command {
        Commands::Export {
            input,
            output_file,
            filters,
            bare,
            pretty,
        } => {
            apply_filter_mode(&mut settings, &filters);
            let mut session = open_session(settings, input.as_deref()).await;
            apply_filters(&mut session, &filters);

            let output_file = output_file.unwrap_or_else(generate_default_geojson_filename);
            let writer = GeoJsonWriter::new().with_pretty(pretty);

            if bare {
                writer.write_collection(session.visible(), &output_file)?;
            } else if let Some(view) = session.map_view() {
                writer.write_map_view(&view, &output_file)?;
            }

            println!(
                "Wrote {} of {} outlets to {}",
                session.visible().len(),
                session.features().len(),
                output_file.display()
            );
            println!("\n{}", writer.get_file_info(&output_file)?.summary());
        }

        Commands::Segments { input } => {
            let session = open_session(settings, input.as_deref()).await;
            for segment in session.categories() {
                println!("{}", segment);
            }
        }

        Commands::List {
            input,
            filters,
            limit,
        } => {
            apply_filter_mode(&mut settings, &filters);
            let mut session = open_session(settings, input.as_deref()).await;
            apply_filters(&mut session, &filters);

            let panel = session.panel();
            let shown = if limit == 0 { panel.rows.len() } else { limit };
            println!("Visible outlets: {}", panel.rows.len());
            for row in panel.rows.iter().take(shown) {
                println!("{:>4}. {}", row.index + 1, row.name);
                println!("      {}", row.address_line);
            }
        }

        Commands::Focus {
            input,
            filters,
            index,
        } => {
            apply_filter_mode(&mut settings, &filters);
            let mut session = open_session(settings, input.as_deref()).await;
            apply_filters(&mut session, &filters);

            let selected = index.checked_sub(1).and_then(|i| session.select(i));
            match selected {
                Some(update) => {
                    if let Some(feature) = session.visible_feature(index - 1) {
                        println!("{}", feature.name());
                    }
                    println!("{}", serde_json::to_string_pretty(&update)?);
                }
                None => println!(
                    "No visible outlet #{} ({} visible)",
                    index,
                    session.visible().len()
                ),
            }
        }

        Commands::Info { input, geojson } => {
            if let Some(path) = geojson {
                let file_info = GeoJsonWriter::new().get_file_info(&path)?;
                println!("{}", file_info.summary());
                return Ok(());
            }

            let session = open_session(settings, input.as_deref()).await;
            println!("{}", session.build_report().summary());
            println!("Market segments: {}", session.categories().len());
            for segment in session.categories() {
                let count = session
                    .features()
                    .iter()
                    .filter(|f| f.segment() == segment.as_str())
                    .count();
                println!("  {}: {}", segment, count);
            }
        }

        Commands::Interactive { input } => {
            let mut session = open_session(settings, input.as_deref()).await;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            run_interactive(&mut session, stdin, &mut stdout).await?;
        }
    }

    Ok(())
}

/// Load the dataset into a fresh session. A failed load still yields a usable, empty session.
async fn open_session(settings: Settings, input: Option<&Path>) -> Session {
    let path: PathBuf = input
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.data.path.clone());

    let progress = ProgressReporter::new_spinner(&format!("Loading {}...", path.display()), false);
    let mut session = Session::new(settings);
    let state = session.load(&DataSource::File(path)).await;

    match state {
        LoadState::Failed => {
            progress.finish_with_message("Load failed, continuing with no outlets")
        }
        _ => progress.finish_with_message(&format!(
            "Loaded {} outlets ({} rows skipped)",
            session.features().len(),
            session.build_report().skipped_rows()
        )),
    }

    session
}

fn apply_filter_mode(settings: &mut Settings, filters: &FilterArgs) {
    if filters.substring {
        settings.filter.text_match = TextMatchMode::Substring;
    }
}

fn apply_filters(session: &mut Session, filters: &FilterArgs) {
    session.set_search_text(filters.search.clone().unwrap_or_default());
    session.set_category(filters.segment.clone());
    if session.criteria().is_active() {
        session.submit_filters();
    }
}
