//! Asset lookup and preloading
//!
//! Every file is read and decoded before the window opens, so a missing or
//! broken asset aborts startup instead of failing mid-game.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use macroquad::texture::Image;

use crate::error::{GameError, Result};

/// Environment variable naming an extra asset directory
pub const ASSETS_ENV: &str = "MEMORY_INVADERS_ASSETS";

/// The files the game expects to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Icon,
    Player,
    Bullet,
    Enemy,
    Particle,
    Music,
    FireSfx,
    HitSfx,
}

impl AssetKind {
    pub const ALL: [AssetKind; 8] = [
        AssetKind::Icon,
        AssetKind::Player,
        AssetKind::Bullet,
        AssetKind::Enemy,
        AssetKind::Particle,
        AssetKind::Music,
        AssetKind::FireSfx,
        AssetKind::HitSfx,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Icon => "love-always-wins.png",
            AssetKind::Player => "love-archery.png",
            AssetKind::Bullet => "cupid.png",
            AssetKind::Enemy => "teddy-bear.png",
            AssetKind::Particle => "heart.png",
            AssetKind::Music => "MusicaFondo.mp3",
            AssetKind::FireSfx => "disparo.mp3",
            AssetKind::HitSfx => "golpe.mp3",
        }
    }
}

/// Ordered list of directories searched for assets
#[derive(Debug, Clone)]
pub struct AssetPaths {
    dirs: Vec<PathBuf>,
}

impl AssetPaths {
    /// Search order: override, `<exe>/assets`, `<exe>`, `./assets`, `.`
    pub fn new(override_dir: Option<PathBuf>, exe_dir: Option<PathBuf>, cwd: PathBuf) -> Self {
        let mut dirs = Vec::new();
        dirs.extend(override_dir);
        if let Some(exe_dir) = exe_dir {
            dirs.push(exe_dir.join("assets"));
            dirs.push(exe_dir);
        }
        dirs.push(cwd.join("assets"));
        dirs.push(cwd);
        Self { dirs }
    }

    /// Search dirs for this process. `MEMORY_INVADERS_ASSETS` wins over `configured`.
    pub fn discover(configured: Option<PathBuf>) -> Self {
        let override_dir = std::env::var_os(ASSETS_ENV)
            .map(PathBuf::from)
            .or(configured);
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(override_dir, exe_dir, cwd)
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// First existing file with this name
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|path| path.is_file())
            .ok_or_else(|| GameError::AssetNotFound {
                name: name.to_string(),
                searched: self.dirs.clone(),
            })
    }

    /// Read the bytes of one asset
    pub fn read(&self, kind: AssetKind) -> Result<(PathBuf, Vec<u8>)> {
        let path = self.resolve(kind.file_name())?;
        let bytes = std::fs::read(&path).map_err(|source| GameError::ResourceLoad {
            path: path.clone(),
            source,
        })?;
        log::debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
        Ok((path, bytes))
    }
}

/// Encoded audio kept in memory and shared with playback sinks
pub type SoundBytes = Arc<[u8]>;

/// Everything loaded from disk at startup
pub struct Assets {
    pub icon: Image,
    pub player: Image,
    pub bullet: Image,
    pub enemy: Image,
    pub particle: Image,
    pub music: SoundBytes,
    /// Where the music was read from, for decode errors at playback start
    pub music_path: PathBuf,
    pub fire_sfx: SoundBytes,
    pub hit_sfx: SoundBytes,
}

impl Assets {
    /// Read and decode the full asset set
    pub fn load(paths: &AssetPaths) -> Result<Self> {
        let (music_path, music) = load_sound(paths, AssetKind::Music)?;
        Ok(Self {
            icon: load_image(paths, AssetKind::Icon)?,
            player: load_image(paths, AssetKind::Player)?,
            bullet: load_image(paths, AssetKind::Bullet)?,
            enemy: load_image(paths, AssetKind::Enemy)?,
            particle: load_image(paths, AssetKind::Particle)?,
            music,
            music_path,
            fire_sfx: load_sound(paths, AssetKind::FireSfx)?.1,
            hit_sfx: load_sound(paths, AssetKind::HitSfx)?.1,
        })
    }
}

fn load_image(paths: &AssetPaths, kind: AssetKind) -> Result<Image> {
    let (path, bytes) = paths.read(kind)?;
    Image::from_file_with_format(&bytes, None).map_err(|e| GameError::ImageDecode {
        path,
        reason: e.to_string(),
    })
}

fn load_sound(paths: &AssetPaths, kind: AssetKind) -> Result<(PathBuf, SoundBytes)> {
    let (path, bytes) = paths.read(kind)?;
    let bytes: SoundBytes = bytes.into();
    // Probe the format now so playback never meets a bad file
    if let Err(e) = rodio::Decoder::new(Cursor::new(bytes.clone())) {
        return Err(GameError::AudioDecode {
            path,
            reason: e.to_string(),
        });
    }
    Ok((path, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "memory-invaders-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_search_order() {
        let paths = AssetPaths::new(
            Some(PathBuf::from("/custom")),
            Some(PathBuf::from("/opt/game")),
            PathBuf::from("/home/me"),
        );
        let expected: Vec<PathBuf> = [
            "/custom",
            "/opt/game/assets",
            "/opt/game",
            "/home/me/assets",
            "/home/me",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(paths.dirs(), expected.as_slice());
    }

    #[test]
    fn test_resolve_prefers_earlier_dir() {
        let root = scratch_dir("resolve");
        let first = root.join("first");
        let second = root.join("second");
        std::fs::create_dir_all(&first).unwrap();
        std::fs::create_dir_all(&second).unwrap();
        std::fs::write(first.join("heart.png"), b"a").unwrap();
        std::fs::write(second.join("heart.png"), b"b").unwrap();
        std::fs::write(second.join("cupid.png"), b"c").unwrap();

        let paths = AssetPaths::new(Some(first.clone()), None, second.clone());
        assert_eq!(paths.resolve("heart.png").unwrap(), first.join("heart.png"));
        assert_eq!(paths.resolve("cupid.png").unwrap(), second.join("cupid.png"));

        let (path, bytes) = paths.read(AssetKind::Particle).unwrap();
        assert_eq!(path, first.join("heart.png"));
        assert_eq!(bytes, b"a");

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_missing_asset_is_fatal() {
        let root = scratch_dir("missing");
        let paths = AssetPaths::new(None, None, root.clone());
        let err = paths.resolve("teddy-bear.png").unwrap_err();
        assert!(matches!(err, GameError::AssetNotFound { .. }));
        assert!(Assets::load(&paths).is_err());
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_undecodable_image_is_fatal() {
        let root = scratch_dir("decode");
        for kind in AssetKind::ALL {
            std::fs::write(root.join(kind.file_name()), b"not an asset").unwrap();
        }
        let paths = AssetPaths::new(None, None, root.clone());
        let err = Assets::load(&paths).err().unwrap();
        assert!(matches!(err, GameError::ImageDecode { .. }));
        let _ = std::fs::remove_dir_all(&root);
    }
}
