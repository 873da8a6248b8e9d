use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

/// Terminal portfolio browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, g/G)
    #[arg(long)]
    vim: bool,

    /// Disable terminal image rendering in the lightbox
    #[arg(long)]
    no_images: bool,

    /// Path to portfolio file (default: ~/.config/foliotui/portfolio.yaml,
    /// falling back to the built-in sample portfolio)
    #[arg(short, long)]
    portfolio: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod app;
mod handlers;
mod ui;
mod utils;

use foliotui::config::Config;
use foliotui::logic;
use foliotui::model;

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub format: Option<String>,
    pub file_size: u64,
}

/// Load state of one slide image, keyed by its configured path
pub enum ImagePreviewState {
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        metadata: ImageMetadata,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Ready { metadata, .. } => f
                .debug_struct("Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { metadata } => {
                f.debug_struct("Failed").field("metadata", metadata).finish()
            }
        }
    }
}

pub struct App {
    pub model: model::Model,

    /// Terminal graphics protocol picker; None when image rendering is off
    image_picker: Option<ratatui_image::picker::Picker>,

    /// Directory slide paths are resolved against
    asset_root: PathBuf,

    /// Slide path -> image load state
    pub image_state_map: HashMap<String, ImagePreviewState>,

    /// Gallery column count used by the last render; grid cursor moves
    /// must agree with what is on screen
    pub last_gallery_cols: usize,
}

impl App {
    fn new(config: Config, args: &Args) -> Result<Self> {
        let vim_mode = config.vim_mode || args.vim;
        let images_enabled = config.image_preview_enabled && !args.no_images;

        // Initialize image preview protocol picker
        let image_picker = if images_enabled {
            let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
                Ok(p) => p,
                Err(e) => {
                    log_debug(&format!("Image preview: terminal query failed: {}", e));
                    ratatui_image::picker::Picker::from_fontsize((8, 16))
                }
            };

            match config.image_protocol.to_lowercase().as_str() {
                "auto" => {
                    log_debug("Image preview: auto-detected protocol");
                }
                "iterm2" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2);
                    log_debug("Image preview: using iTerm2 protocol");
                }
                "kitty" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty);
                    log_debug("Image preview: using Kitty protocol");
                }
                "sixel" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel);
                    log_debug("Image preview: using Sixel protocol");
                }
                "halfblocks" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks);
                    log_debug("Image preview: using Halfblocks protocol");
                }
                unknown => {
                    log_debug(&format!(
                        "Image preview: unknown protocol '{}', keeping auto-detect",
                        unknown
                    ));
                }
            }

            Some(picker)
        } else {
            log_debug("Image preview disabled");
            None
        };

        let asset_root = config
            .asset_root
            .clone()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let model = model::Model::new(config.into_portfolio(), vim_mode);

        Ok(App {
            model,
            image_picker,
            asset_root,
            image_state_map: HashMap::new(),
            last_gallery_cols: 1,
        })
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }
}

/// Determine the portfolio file path with fallback logic
///
/// Returns None when no file exists anywhere; the built-in sample
/// portfolio is used in that case.
fn get_portfolio_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Portfolio file not found at specified path: {}", path);
    }

    // Try ~/.config/foliotui/portfolio.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let portfolio_path = config_dir.join("foliotui").join("portfolio.yaml");
        if portfolio_path.exists() {
            return Ok(Some(portfolio_path));
        }
    }

    // Fallback to ./portfolio.yaml
    let local = PathBuf::from("portfolio.yaml");
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(None)
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load portfolio configuration (built-in sample when no file exists)
    let config = match get_portfolio_path(args.portfolio.clone())? {
        Some(path) => {
            log_debug(&format!("Loading portfolio from: {:?}", path));
            Config::load(&path)?
        }
        None => {
            log_debug("No portfolio file found, using built-in sample");
            Config::builtin()
        }
    };

    // Initialize app
    let mut app = App::new(config, &args)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Seed the compact flag from the initial terminal size
    if let Ok(size) = terminal.size() {
        app.model.ui.compact = logic::layout::is_compact(size.width);
    }

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Always render
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Everything is input-driven; the poll timeout only exists so the
        // toast can expire without a keypress
        if event::poll(std::time::Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key)?;
                }
                Event::Resize(width, _height) => {
                    app.model.ui.compact = logic::layout::is_compact(width);
                }
                _ => {}
            }
        }
    }

    Ok(())
}
