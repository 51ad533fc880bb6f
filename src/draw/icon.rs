//! Decoded zone icons and the store that owns them.

use super::color::Color;
use crate::layout::{Control, GameButton, MenuAction};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading an icon file.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to read icon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode icon {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("icon {path} has no pixels")]
    Empty { path: PathBuf },

    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    BadBuffer { len: usize, width: u32, height: u32 },

    #[error("icon {name} not found in any search path")]
    NotFound { name: String },
}

/// An RGBA8 image ready to be blitted.
#[derive(Debug, Clone, Default)]
pub struct Icon {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    loaded: bool,
}

impl Icon {
    /// Wraps a tightly packed RGBA8 buffer.
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self, IconError> {
        let expected = width as usize * height as usize * 4;
        if expected == 0 || pixels.len() != expected {
            return Err(IconError::BadBuffer {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            loaded: true,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns the texel at `(x, y)` or `None` when out of bounds or unloaded.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if !self.loaded || x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Frees the pixel buffer and marks the icon unloaded.
    pub fn release(&mut self) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
        self.loaded = false;
    }
}

/// Decodes an image file into an [`Icon`].
pub fn load_icon(path: &Path) -> Result<Icon, IconError> {
    let bytes = fs::read(path).map_err(|source| IconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(IconError::Empty {
            path: path.to_path_buf(),
        });
    }
    Icon::from_rgba(rgba.into_raw(), width, height)
}

/// Tries each directory in turn and returns the first icon that loads.
pub fn find_icon(search_paths: &[PathBuf], file_name: &str) -> Result<Icon, IconError> {
    let mut last_error = None;
    for dir in search_paths {
        let candidate = dir.join(file_name);
        if !candidate.is_file() {
            continue;
        }
        match load_icon(&candidate) {
            Ok(icon) => {
                debug!(
                    "Loaded icon {} ({}x{})",
                    candidate.display(),
                    icon.width(),
                    icon.height()
                );
                return Ok(icon);
            }
            Err(err) => {
                debug!("Skipping {}: {}", candidate.display(), err);
                last_error = Some(err);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| IconError::NotFound {
        name: file_name.to_string(),
    }))
}

/// Default file bound to each decorated control.
pub const DEFAULT_BINDINGS: [(Control, &str); 10] = [
    (Control::Menu(MenuAction::Up), "menu-up.png"),
    (Control::Menu(MenuAction::Down), "menu-down.png"),
    (Control::Menu(MenuAction::Left), "menu-backward.png"),
    (Control::Menu(MenuAction::Right), "menu-forward.png"),
    (Control::Menu(MenuAction::Ok), "control-circle.png"),
    (Control::Menu(MenuAction::Back), "control-cross.png"),
    (Control::Button(GameButton::Triangle), "control-triangle.png"),
    (Control::Button(GameButton::Circle), "control-circle.png"),
    (Control::Button(GameButton::Cross), "control-cross.png"),
    (Control::Button(GameButton::Square), "control-square.png"),
];

/// Owns every loaded icon, keyed by the control it decorates.
#[derive(Debug)]
pub struct IconStore {
    bindings: Vec<(Control, String)>,
    icons: HashMap<Control, Icon>,
}

impl Default for IconStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IconStore {
    /// Creates a store with the built-in bindings and nothing loaded.
    pub fn new() -> Self {
        Self::with_bindings(
            DEFAULT_BINDINGS
                .iter()
                .map(|(control, name)| (*control, (*name).to_string())),
        )
    }

    pub fn with_bindings(bindings: impl IntoIterator<Item = (Control, String)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            icons: HashMap::new(),
        }
    }

    /// Loads every bound icon from `search_paths`.
    ///
    /// Missing or undecodable files are logged and skipped; the zone keeps
    /// working without decoration. Returns how many icons loaded.
    pub fn load_all(&mut self, search_paths: &[PathBuf]) -> usize {
        self.icons.clear();
        for (control, name) in &self.bindings {
            match find_icon(search_paths, name) {
                Ok(icon) => {
                    self.icons.insert(*control, icon);
                }
                Err(err) => warn!("Icon for {:?} unavailable: {}", control, err),
            }
        }
        info!(
            "Loaded {}/{} overlay icons",
            self.icons.len(),
            self.bindings.len()
        );
        self.icons.len()
    }

    /// Inserts an already decoded icon.
    pub fn insert(&mut self, control: Control, icon: Icon) {
        self.icons.insert(control, icon);
    }

    /// Returns the loaded icon bound to `control`, if any.
    pub fn get(&self, control: Control) -> Option<&Icon> {
        self.icons.get(&control).filter(|icon| icon.is_loaded())
    }

    pub fn loaded_count(&self) -> usize {
        self.icons.values().filter(|icon| icon.is_loaded()).count()
    }

    /// Frees every icon buffer.
    pub fn release(&mut self) {
        for icon in self.icons.values_mut() {
            icon.release();
        }
        self.icons.clear();
    }
}
