//! Resolved invocation settings and the end-to-end run.
//!
//! One run owns its input bytes, directory and record arrays; nothing is
//! shared between runs. Output is only written once the whole document (or
//! listing) exists, so a failed run never leaves a partial file behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{RenderError, Result, WadError};
use crate::log::info;
use crate::render::{self, RenderOptions, SourceInfo, Theme, defaults};
use crate::wad::{MatchMode, Wad};

/// Everything a run needs, already parsed from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub map_name: Option<String>,
    /// `None` writes to standard output
    pub output_path: Option<PathBuf>,
    pub verbose: bool,
    pub draw_things: bool,
    pub scale: f64,
    pub padding: i32,
    pub list_only: bool,
    pub match_mode: MatchMode,
    pub theme: Theme,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            map_name: None,
            output_path: None,
            verbose: false,
            draw_things: false,
            scale: defaults::SCALE,
            padding: defaults::PADDING,
            list_only: false,
            match_mode: MatchMode::Prefix,
            theme: Theme::Dark,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            scale: self.scale,
            padding: self.padding,
            draw_things: self.draw_things,
            verbose: self.verbose,
            theme: self.theme,
        }
    }

    /// Reject settings that could only fail later, before touching any file
    pub fn validate(&self) -> Result<()> {
        if self.list_only {
            return Ok(());
        }
        match self.map_name.as_deref() {
            None | Some("") => return Err(RenderError::EmptyMapName.into()),
            Some(_) => {}
        }
        self.render_options().validate()?;
        Ok(())
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Listing(String),
    Document(String),
}

impl Output {
    pub fn text(&self) -> &str {
        match self {
            Output::Listing(text) | Output::Document(text) => text,
        }
    }
}

/// Read the input and produce the listing or document, without writing it
pub fn execute(config: &Config) -> Result<Output> {
    config.validate()?;
    let data = read_input(&config.input_path)?;
    let wad = Wad::parse(&data)?;

    if config.list_only {
        return Ok(Output::Listing(crate::format_listing(&wad.maps())));
    }

    let map_name = config.map_name.as_deref().unwrap_or_default();
    let map = wad.load_map(map_name, config.match_mode)?;
    let source_name = config.input_path.display().to_string();
    let document = render::render(
        &map,
        &config.render_options(),
        Some(SourceInfo {
            name: &source_name,
            requested: map_name,
            wad: &wad,
        }),
    )?;
    info!(
        map = %map.lumps.marker,
        linedefs = map.linedefs.len(),
        things = map.things.len(),
        "rendered map"
    );
    Ok(Output::Document(document))
}

/// Execute and write the result to the configured destination
pub fn run(config: &Config) -> Result<()> {
    let output = execute(config)?;
    match &config.output_path {
        Some(path) => std::fs::write(path, output.text()).map_err(|source| WadError::Io {
            action: "write",
            path: path.clone(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.text().as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| WadError::Io {
                    action: "write",
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| WadError::Io {
        action: "open",
        path: path.to_path_buf(),
        source,
    })
}
