use std::fs;
use std::path::PathBuf;

use vibe_invaders::assets::{AssetLoader, FileAssetLoader, SpriteSet};
use vibe_invaders::config::GameConfig;
use vibe_invaders::error::{AssetError, GameError};
use vibe_invaders::game::Game;

fn shipped_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vibe-invaders-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn shipped_assets_load_with_expected_sizes() {
    let sprites = SpriteSet::load(&FileAssetLoader::new(shipped_assets())).unwrap();
    assert_eq!((sprites.cannon.width, sprites.cannon.height), (40, 20));
    assert_eq!((sprites.laser.width, sprites.laser.height), (10, 20));
    assert_eq!(sprites.alien_wings_up.width, sprites.alien_wings_down.width);
    assert_ne!(sprites.alien_wings_up.art, sprites.alien_wings_down.art);
}

#[test]
fn shipped_assets_drive_entity_sizes() {
    let sprites = SpriteSet::load(&FileAssetLoader::new(shipped_assets())).unwrap();
    let game = Game::new(GameConfig::default(), sprites);
    assert_eq!(game.player.rect.bottom(), 400);
    assert!(game.fleet.aliens().all(|a| a.rect.width == 40 && a.rect.height == 20));
}

#[test]
fn missing_asset_aborts_startup() {
    let dir = scratch_dir("missing");
    let err = SpriteSet::load(&FileAssetLoader::new(&dir)).unwrap_err();
    assert!(matches!(err, AssetError::Io { .. }));
    assert!(err.to_string().contains("alien_wings_down.sprite"));

    let wrapped: GameError = err.into();
    assert!(wrapped.to_string().starts_with("asset error"));
}

#[test]
fn malformed_asset_is_reported_with_its_path() {
    let dir = scratch_dir("malformed");
    fs::write(dir.join("laser.sprite"), "ten by twenty\n|\n").unwrap();
    let err = FileAssetLoader::new(&dir).load("laser").unwrap_err();
    assert!(matches!(err, AssetError::MalformedHeader { .. }));
    assert!(err.to_string().contains("laser.sprite"));
}
