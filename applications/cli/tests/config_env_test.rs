//! Environment overrides for the CLI configuration
//!
//! Kept in its own test binary: it sets process-wide `VMP_*` variables.
use std::env;
use std::fs;
use tempfile::TempDir;
use vmp_cli::AppConfig;
use vmp_playback::ForegroundResume;

const VARS: [(&str, &str); 3] = [
    ("VMP_PLAYBACK__SKIP_INTERVAL_SECS", "15"),
    ("VMP_PLAYBACK__FOREGROUND_RESUME", "restore_previous"),
    ("VMP_ASSETS__AUDIO_DURATION_SECS", "42"),
];

/// Prefixed variables override the file, with `__` separating nested keys
#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vmp.toml");
    fs::write(
        &path,
        "[playback]\nskip_interval_secs = 12.0\n\n[assets]\nvideo_duration_secs = 30\n",
    )
    .unwrap();

    for (key, value) in VARS {
        env::set_var(key, value);
    }
    let loaded = AppConfig::load(Some(&path));
    for (key, _) in VARS {
        env::remove_var(key);
    }

    let config = loaded.unwrap();
    assert_eq!(config.playback.skip_interval_secs, 15.0);
    assert_eq!(
        config.playback.foreground_resume,
        ForegroundResume::RestorePrevious
    );
    assert_eq!(config.assets.audio_duration_secs, 42);
    assert_eq!(config.assets.video_duration_secs, 30);
    assert!(config.validate().is_ok());
}
