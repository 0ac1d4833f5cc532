/// Session tests
/// Drive the headless player with command scripts and check its output
mod common;

use common::{write_temp_file, ROUND_MANIFEST};
use eptss_player::{Command, PlayerError, PlaylistManifest, Session};
use eptss_playlist::{PlaylistOptions, RepeatMode};
use std::io::Cursor;

fn session() -> Session {
    let manifest = PlaylistManifest::from_json(ROUND_MANIFEST).unwrap();
    Session::new(
        manifest,
        PlaylistOptions {
            seed: Some(3),
            ..Default::default()
        },
    )
}

fn run_script(session: &mut Session, script: &str) -> Vec<String> {
    let mut output = Vec::new();
    session.run(Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_script_plays_through_round() {
    let mut session = session();
    let output = run_script(
        &mut session,
        "# start on the second cover\nplay 1\nstatus\nnext\nended\nrepeat\nnext\n",
    );

    assert_eq!(
        output,
        vec![
            "event: track-changed 1 b (from 0)",
            "event: playing",
            "status: 2/3 b \"B\" playing shuffle=off repeat=none remaining=1",
            "event: track-changed 2 c (from 1)",
            "event: paused",
            "event: playlist-ended",
            "event: repeat all",
            "event: track-changed 0 a (from 2)",
            "event: playing",
        ]
    );
}

#[test]
fn test_quit_stops_reading() {
    let mut session = session();
    let output = run_script(&mut session, "play 2\nquit\nplay 0\n");

    assert_eq!(session.controller().current_index(), 2);
    assert_eq!(output.len(), 2);
}

#[test]
fn test_bad_lines_are_reported_and_skipped() {
    let mut session = session();
    let output = run_script(&mut session, "rewind\nplay x\nlike zz\nnext\n");

    assert_eq!(output.len(), 5);
    assert!(output[0].starts_with("error: Unknown command"));
    assert!(output[1].starts_with("error: Invalid argument for play"));
    assert!(output[2].contains("unknown track id: zz"));
    assert_eq!(output[3], "event: track-changed 1 b (from 0)");
    assert_eq!(output[4], "event: playing");
}

#[test]
fn test_negative_and_out_of_range_play_are_ignored() {
    let mut session = session();

    assert!(session.execute(&Command::Play(-1)).unwrap().is_empty());
    assert!(session.execute(&Command::Play(3)).unwrap().is_empty());
    assert_eq!(session.controller().current_index(), 0);
    assert!(!session.controller().is_playing());
}

#[test]
fn test_repeat_one_replays_current_track() {
    let mut session = session();
    session.execute(&Command::Play(0)).unwrap();
    session.execute(&Command::Repeat).unwrap();
    session.execute(&Command::Repeat).unwrap();
    assert_eq!(session.controller().repeat(), RepeatMode::One);

    let output = session.execute(&Command::Ended).unwrap();
    assert_eq!(output, vec!["event: track-restarted 0 a"]);
    assert_eq!(session.controller().current_index(), 0);
}

#[test]
fn test_pause_resume_and_toggle() {
    let mut session = session();

    assert_eq!(session.execute(&Command::Resume).unwrap(), vec!["event: playing"]);
    assert!(session.execute(&Command::Resume).unwrap().is_empty());
    assert_eq!(session.execute(&Command::Toggle).unwrap(), vec!["event: paused"]);
    assert!(session.execute(&Command::Pause).unwrap().is_empty());
}

#[test]
fn test_like_defaults_to_current_track() {
    let mut session = session();
    session.execute(&Command::Play(2)).unwrap();

    let output = session.execute(&Command::Like(None)).unwrap();
    assert_eq!(output.last().unwrap(), "liked: c");
    assert_eq!(session.likes().len(), 1);

    let output = session.execute(&Command::Like(Some("c".to_string()))).unwrap();
    assert_eq!(output, vec!["unliked: c"]);
    assert!(session.likes().is_empty());

    assert!(matches!(
        session.execute(&Command::Like(Some("nope".to_string()))),
        Err(PlayerError::InvalidArgument { .. })
    ));
}

#[test]
fn test_progress_reports_ratio_of_duration() {
    let mut session = session();
    session.execute(&Command::Play(1)).unwrap();

    let output = session.execute(&Command::Progress(50.0)).unwrap();
    assert_eq!(output, vec!["progress: b 25%"]);

    let output = session.execute(&Command::Progress(500.0)).unwrap();
    assert_eq!(output, vec!["progress: b 100%"]);
}

#[test]
fn test_summary_lines() {
    let session = session();

    assert_eq!(
        session.summary_lines(),
        vec![
            "title: Round 12",
            "description: Everyone covers the same song",
            "summary: 3 tracks, 7:35 total (3 with duration)",
        ]
    );
}

#[test]
fn test_empty_playlist_session() {
    let manifest = PlaylistManifest::from_json(r#"{"tracks": []}"#).unwrap();
    let mut session = Session::new(manifest, PlaylistOptions::default());

    assert_eq!(session.status_line(), "status: empty playlist");
    assert_eq!(session.summary_lines(), vec!["summary: 0 tracks"]);
    assert!(session.execute(&Command::Prev).unwrap().is_empty());
    assert!(matches!(
        session.execute(&Command::Like(None)),
        Err(PlayerError::InvalidArgument { .. })
    ));
}

#[test]
fn test_manifest_loaded_from_file() {
    let (_dir, path) = write_temp_file("round.json", ROUND_MANIFEST);

    let manifest = PlaylistManifest::load(&path).unwrap();
    assert_eq!(manifest.title.as_deref(), Some("Round 12"));
    assert_eq!(manifest.tracks.len(), 3);
    assert_eq!(manifest.tracks[2].artist, None);
}

#[test]
fn test_missing_manifest_is_io_error() {
    let (dir, _path) = write_temp_file("round.json", ROUND_MANIFEST);

    assert!(matches!(
        PlaylistManifest::load(&dir.path().join("missing.json")),
        Err(PlayerError::Io(_))
    ));
}
