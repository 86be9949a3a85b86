use std::path::Path;

use clap::Parser;
use serde_json::json;

use crate::dialog;
use crate::dispatch;
use crate::dom::ImageData;
use crate::fetch::HttpSizeFetcher;
use crate::session::SessionContext;

use super::types::{Cli, Commands};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::View { inputs } => {
            crate::ui::run(inputs)?;
        }
        Commands::Inspect { input } => {
            let mut session = SessionContext::new();
            let image = load_image_element(&mut session, &input)?;
            let fetcher = HttpSizeFetcher;
            dialog::open(&mut session, image, &fetcher);
            let subject = session
                .dialog
                .subject
                .ok_or_else(|| format!("{} did not open", input.display()))?;
            let state = session.store.get(subject).cloned().unwrap_or_default();
            let report = json!({
                "metadata": session.dialog.metadata,
                "state": state,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&report).map_err(|error| error.to_string())?
            );
        }
        Commands::Menu => {
            let tree = dispatch::menu_tree();
            println!(
                "{}",
                serde_json::to_string_pretty(&tree).map_err(|error| error.to_string())?
            );
        }
    }

    Ok(())
}

fn load_image_element(
    session: &mut SessionContext,
    input: &Path,
) -> Result<crate::dom::NodeId, String> {
    let (width, height) = image::image_dimensions(input).map_err(|error| error.to_string())?;
    let data = ImageData {
        src: input.display().to_string(),
        alt: input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
        srcset: String::new(),
        natural_width: width,
        natural_height: height,
        complete: true,
    };
    let page = session.document.create_element("body");
    let figure = session.document.create_element("figure");
    let image = session.document.create_image(data);
    session.document.append_child(page, figure);
    session.document.append_child(figure, image);
    Ok(image)
}
