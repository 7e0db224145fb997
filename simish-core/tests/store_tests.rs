// simish-core/tests/store_tests.rs
use anyhow::Result;
use std::fs;
use tempfile::TempDir;

use simish_core::{
    headless_respond, vote_uid, Candidate, CandidateStore, MatchConfig, PairsFile, VoteDirection,
};

fn seed(path: &std::path::Path) -> Result<()> {
    let mut file = PairsFile::open(path)?;
    file.save_pair(Candidate::new("hello there", "hi!", 1))?;
    file.save_pair(Candidate::new("goodbye", "bye!", 1))?;
    file.save_pair(Candidate::new("hello there", "howdy", 2))?;
    file.save()
}

#[test]
fn test_missing_file_opens_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let file = PairsFile::open(dir.path().join("pairs.yaml"))?;
    assert!(file.store().pairs().is_empty());
    assert!(file.fetch_candidates(1)?.is_empty());
    Ok(())
}

#[test]
fn test_yaml_round_trip_with_votes() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("pairs.yaml");
    seed(&path)?;

    {
        let mut file = PairsFile::open(&path)?;
        file.record_vote("hi", "hello there", 1, VoteDirection::Up)?;
        file.record_vote("hi", "hello there", 1, VoteDirection::Down)?;
        file.record_vote("hi", "hello there", 1, VoteDirection::Up)?;
        file.save()?;
    }

    let file = PairsFile::open(&path)?;
    assert_eq!(file.store().pairs().len(), 3);
    let record = file.store().vote("hi", "hello there").expect("vote persisted");
    assert_eq!(record.uid, vote_uid("hi", "hello there"));
    assert_eq!((record.up_votes, record.down_votes), (2.0, 1.0));

    let room_one = file.fetch_candidates(1)?;
    let hello = room_one.iter().find(|c| c.input == "hello there").unwrap();
    assert_eq!((hello.up_votes, hello.down_votes), (2.0, 1.0));
    Ok(())
}

#[test]
fn test_json_files_are_supported() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("pairs.json");
    seed(&path)?;

    let raw = fs::read_to_string(&path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(value["pairs"].as_array().map(Vec::len), Some(3));

    let file = PairsFile::open(&path)?;
    assert_eq!(file.fetch_candidates(2)?.len(), 1);
    Ok(())
}

#[test]
fn test_legacy_field_names_load() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("legacy.yaml");
    fs::write(
        &path,
        r#"
pairs:
  - pc_input: "where is the key"
    gm_response: "Under the mat."
    room_id: 4
    ai_col: 12
    result_type: 1
  - pc_input: "retired line"
    gm_response: "unused"
    room_id: 4
    disabled: true
"#,
    )?;
    let file = PairsFile::open(&path)?;
    let candidates = file.fetch_candidates(4)?;
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].ai_col, 12);
    assert_eq!(candidates[0].output, "Under the mat.");
    Ok(())
}

#[test]
fn test_malformed_file_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json")?;
    assert!(PairsFile::open(&path).is_err());
    Ok(())
}

#[test]
fn test_headless_respond_from_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("pairs.yaml");
    seed(&path)?;

    let file = PairsFile::open(&path)?;
    let config = MatchConfig::load_default()?;
    let response = headless_respond(&config, &file, "hello there!", 2)?;
    assert_eq!(response.response, "howdy");
    assert_eq!(response.room, "2");
    Ok(())
}
