use crate::learning::Outcome;
use crate::models::{MatchStats, Verdict, Weights};
use crate::session::Session;
use crate::store::{FileStore, KeyValueStore, BANKROLL_KEY, HISTORY_KEY, WEIGHTS_KEY};
use tempfile::TempDir;

#[test]
fn test_feedback_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    let mut session = Session::with_defaults(FileStore::new(temp_dir.path()));
    let result = session.analyze(MatchStats::new(40.0, 60, 8, 5, 6, "Brésil").with_score("1-1"));
    assert_eq!(result.verdict, Verdict::Over25);
    let report = session.on_win().unwrap().expect("pending analysis");
    drop(session);

    // a fresh session reads what the previous one wrote
    let mut session = Session::with_defaults(FileStore::new(temp_dir.path()));
    assert_eq!(*session.weights(), report.updated);
    assert!(session.last_analysis().is_none());

    session.analyze(MatchStats::new(70.0, 10, 1, 1, 2, "Togo"));
    let report = session.record_outcome(Outcome::Loss).unwrap().unwrap();
    assert!((report.updated.shots_off_target_weight + 0.55).abs() < 1e-12);
    assert!((report.updated.attack_weight - 0.72).abs() < 1e-12);

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].outcome, Outcome::Win);
    assert_eq!(history[1].verdict, Verdict::AvoidSterile);
    assert_eq!(history[1].league, "Togo");

    let backend = session.into_backend();
    assert!(backend.load(WEIGHTS_KEY).unwrap().is_some());
    assert!(backend.load(HISTORY_KEY).unwrap().is_some());
    // bankroll is read, never written
    assert!(backend.load(BANKROLL_KEY).unwrap().is_none());
}

#[test]
fn test_corrupt_weights_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let mut backend = FileStore::new(temp_dir.path());
    backend.save(WEIGHTS_KEY, "not json at all").unwrap();

    let mut session = Session::with_defaults(backend);
    assert_eq!(*session.weights(), Weights::default());

    session.analyze(MatchStats::new(50.0, 20, 1, 2, 1, "Togo"));
    session.on_loss().unwrap().unwrap();

    // the corrupt blob has been replaced by a valid one
    let reopened = Session::with_defaults(FileStore::new(temp_dir.path()));
    assert!((reopened.weights().shots_off_target_weight + 0.55).abs() < 1e-12);
}

#[test]
fn test_new_analysis_replaces_pending() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::with_defaults(FileStore::new(temp_dir.path()));

    session.analyze(MatchStats::new(40.0, 60, 8, 5, 6, "Brésil"));
    session.analyze(MatchStats::new(50.0, 40, 3, 3, 3, "Ghana"));
    assert_eq!(session.last_analysis().unwrap().stats.league, "Ghana");

    session.on_win().unwrap().unwrap();
    assert_eq!(session.history()[0].league, "Ghana");
}
