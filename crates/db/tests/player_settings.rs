//! Integration tests for the playback settings singleton.
//!
//! Covers replace-or-create semantics and the single-row invariant.

use sqlx::PgPool;

use livecast_db::models::player_settings::SaveSettings;
use livecast_db::repositories::PlayerSettingsRepo;

#[sqlx::test(migrations = "./migrations")]
async fn get_returns_none_before_first_save(pool: PgPool) {
    assert!(PlayerSettingsRepo::get(&pool).await.unwrap().is_none());
    assert_eq!(PlayerSettingsRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn save_with_empty_input_writes_defaults(pool: PgPool) {
    let saved = PlayerSettingsRepo::save(&pool, SaveSettings::default())
        .await
        .unwrap();

    assert_eq!(saved.rtsp_url, "");
    assert_eq!(saved.volume, 100.0);
    assert!(!saved.autoplay);
}

#[sqlx::test(migrations = "./migrations")]
async fn save_replaces_rather_than_merges(pool: PgPool) {
    let full = SaveSettings {
        rtsp_url: Some("rtsp://example.com/live".into()),
        volume: Some(55.0),
        autoplay: Some(true),
    };
    PlayerSettingsRepo::save(&pool, full).await.unwrap();

    // A save that only sets volume resets the other fields to defaults.
    let partial = SaveSettings {
        volume: Some(42.0),
        ..Default::default()
    };
    let saved = PlayerSettingsRepo::save(&pool, partial).await.unwrap();

    assert_eq!(saved.volume, 42.0);
    assert_eq!(saved.rtsp_url, "");
    assert!(!saved.autoplay);
}

#[sqlx::test(migrations = "./migrations")]
async fn repeated_saves_keep_exactly_one_row(pool: PgPool) {
    for volume in [10.0, 20.0, 30.0] {
        let input = SaveSettings {
            volume: Some(volume),
            ..Default::default()
        };
        PlayerSettingsRepo::save(&pool, input).await.unwrap();
    }

    assert_eq!(PlayerSettingsRepo::count(&pool).await.unwrap(), 1);

    let stored = PlayerSettingsRepo::get(&pool).await.unwrap().unwrap();
    assert_eq!(stored.volume, 30.0);
}
