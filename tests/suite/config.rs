//! Wiring from a config document to a working rotator.

use std::fs;

use rotaphrase_config::{CorpusLocation, RotaphraseConfig};
use rotaphrase_core::{BUNDLED_PHRASES, rotator_from_config};
use rotaphrase_types::Corpus;

#[test]
fn configured_paths_drive_the_rotator() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("mine.txt"), "hello\n").expect("write corpus");
    let raw = "[paths]\ncorpus = \"mine.txt\"\ntracking = \"state/left.json\"\n";
    let config = RotaphraseConfig::from_toml_str(raw, dir.path(), dir.path()).expect("config");

    let phrase = rotator_from_config(&config).get_post_text().expect("phrase");

    assert_eq!(phrase, "hello");
    let saved = fs::read_to_string(dir.path().join("state").join("left.json")).expect("saved");
    assert_eq!(
        serde_json::from_str::<Vec<String>>(&saved).expect("json"),
        Vec::<String>::new()
    );
}

#[test]
fn default_config_falls_back_to_bundled_phrases() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = RotaphraseConfig::defaults(dir.path());
    assert_eq!(config.corpus(), &CorpusLocation::Bundled);

    let phrase = rotator_from_config(&config).get_post_text().expect("phrase");

    let bundled = Corpus::parse(BUNDLED_PHRASES).expect("bundled");
    assert!(bundled.contains(&phrase));
    assert!(config.tracking_path().exists());
}
