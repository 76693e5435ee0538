use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{error, info};

use crate::constants::*;
use crate::error::AssetError;

/// An image with known pixel dimensions plus the glyph rows the terminal
/// surface draws for it.
#[derive(Debug, PartialEq, Eq)]
pub struct Sprite {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub art: Vec<String>,
}

pub type SpriteHandle = Rc<Sprite>;

impl Sprite {
    /// Parses the `.sprite` format: a `WIDTHxHEIGHT` header line in pixels,
    /// followed by one or more glyph rows.
    pub fn parse(name: &str, source: &str, path: &Path) -> Result<Sprite, AssetError> {
        let mut lines = source.lines().map(|l| l.trim_end_matches('\r'));
        let header = lines.next().unwrap_or("").trim();
        let malformed = || AssetError::MalformedHeader {
            path: path.to_path_buf(),
            line: header.to_string(),
        };

        let (w, h) = header.split_once('x').ok_or_else(malformed)?;
        let width: i32 = w.trim().parse().map_err(|_| malformed())?;
        let height: i32 = h.trim().parse().map_err(|_| malformed())?;
        if width <= 0 || height <= 0 {
            return Err(malformed());
        }

        let art: Vec<String> = lines.map(str::to_string).collect();
        if art.iter().all(|row| row.trim().is_empty()) {
            return Err(AssetError::EmptyArt { path: path.to_path_buf() });
        }

        Ok(Sprite { name: name.to_string(), width, height, art })
    }
}

pub trait AssetLoader {
    fn load(&self, id: &str) -> Result<SpriteHandle, AssetError>;
}

/// Reads `<dir>/<id>.sprite` from disk.
pub struct FileAssetLoader {
    dir: PathBuf,
}

impl FileAssetLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileAssetLoader { dir: dir.into() }
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(id).with_extension(ASSET_EXTENSION)
    }
}

impl AssetLoader for FileAssetLoader {
    fn load(&self, id: &str) -> Result<SpriteHandle, AssetError> {
        let path = self.path_for(id);
        let source = fs::read_to_string(&path).map_err(|e| {
            error!("Failed to read asset {}: {}", path.display(), e);
            AssetError::Io { path: path.clone(), source: e }
        })?;
        let sprite = Sprite::parse(id, &source, &path)?;
        info!("Loaded asset {} ({}x{} px)", id, sprite.width, sprite.height);
        Ok(Rc::new(sprite))
    }
}

/// Every image the game draws, loaded once before the loop starts.
#[derive(Clone, Debug)]
pub struct SpriteSet {
    pub alien_wings_down: SpriteHandle,
    pub alien_wings_up: SpriteHandle,
    pub cannon: SpriteHandle,
    pub laser: SpriteHandle,
}

impl SpriteSet {
    pub fn load(loader: &impl AssetLoader) -> Result<SpriteSet, AssetError> {
        Ok(SpriteSet {
            alien_wings_down: loader.load(ALIEN_WINGS_DOWN_ASSET)?,
            alien_wings_up: loader.load(ALIEN_WINGS_UP_ASSET)?,
            cannon: loader.load(PLAYER_ASSET)?,
            laser: loader.load(LASER_ASSET)?,
        })
    }

    /// Block-glyph sprites sized like the shipped asset files, for headless
    /// runs and tests that should not touch the filesystem.
    pub fn placeholder() -> SpriteSet {
        let make = |name: &str, width: i32, height: i32, glyph: &str| {
            Rc::new(Sprite {
                name: name.to_string(),
                width,
                height,
                art: vec![glyph.to_string()],
            })
        };
        SpriteSet {
            alien_wings_down: make(ALIEN_WINGS_DOWN_ASSET, 40, 20, "/oo\\"),
            alien_wings_up: make(ALIEN_WINGS_UP_ASSET, 40, 20, "\\oo/"),
            cannon: make(PLAYER_ASSET, 40, 20, "/MM\\"),
            laser: make(LASER_ASSET, 10, 20, "|"),
        }
    }
}
