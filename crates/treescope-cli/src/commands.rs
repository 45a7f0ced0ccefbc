use crate::args::Cli;
use crate::config::Config;
use crate::ui;
use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use treescope_engine::Controller;
use treescope_providers::{detect_format, load_document};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;
    let page_margin = cli.page_margin.unwrap_or(config.page_margin);

    // Cheap argument validation only; reading and parsing the document
    // waits until the interactive gate has passed.
    let format = match cli.format {
        Some(arg) => arg.into(),
        None => detect_format(&cli.file).with_context(|| {
            format!("unknown format: {} (use --format)", cli.file.display())
        })?,
    };
    std::fs::metadata(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    if !std::io::stdout().is_terminal() {
        bail!("stdout is not a terminal; treescope is an interactive browser");
    }

    let (inspector, root) = load_document(&cli.file, Some(format))
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    let root_label = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string());

    let mut controller = Controller::new(inspector, root, &root_label, config.live_filter);

    // The terminal is restored before anything is printed.
    if let Some(text) = ui::tui::run(&mut controller, page_margin)? {
        println!("{}", text);
    }
    Ok(())
}
