//! 完整的解析器集成测试
//!
//! 以一份多天的训练日志测试公共 API 的功能和边界情况

use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;
use workout_log_parser::{
    LogRecordParser, ParseError, ParserConfig, SetKind, WarningKind, parse_log_from_file,
    parse_log_from_reader, parse_log_from_str,
};

const FIXTURE: &str = include_str!("fixtures/workout_data.txt");

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_fixture_sessions() {
    let log = parse_log_from_str(FIXTURE).unwrap();

    let dates: Vec<NaiveDate> = log.sessions.iter().map(|s| s.date).collect();
    assert_eq!(
        dates,
        vec![
            ymd(2024, 5, 2),
            ymd(2024, 5, 3),
            ymd(2024, 5, 4),
            ymd(2024, 5, 6),
            ymd(2024, 5, 8),
        ]
    );

    let chest = log.session(ymd(2024, 5, 3)).unwrap();
    assert_eq!(chest.muscle_target.as_deref(), Some("Chest"));
    assert_eq!(chest.preworkout_meal.as_deref(), Some("2 banana & 1 coffee"));
    assert_eq!(chest.meal.quantity("banana"), 2.0);
    assert_eq!(chest.meal.quantity("coffee"), 1.0);
    assert_eq!(chest.hydration_ml, Some(750));
    assert_eq!(chest.duration_min, Some(55));
    assert_eq!(chest.avg_heart_rate, Some(118));
    assert_eq!(chest.calories, Some(390));

    let cardio = log.session(ymd(2024, 5, 4)).unwrap();
    assert_eq!(cardio.meal.quantity("coffee"), 1.0);
    assert_eq!(cardio.hydration_ml, None);
    assert_eq!(cardio.calories, Some(310));

    let back = log.session(ymd(2024, 5, 8)).unwrap();
    assert_eq!(back.preworkout_meal, None);
    assert!(back.meal.is_empty());
}

#[test]
fn test_fixture_exercises() {
    let log = parse_log_from_str(FIXTURE).unwrap();
    assert_eq!(log.exercises.len(), 14);

    let bench: Vec<_> = log
        .exercises
        .iter()
        .filter(|e| e.exercise_name == "Bench Press")
        .collect();
    assert_eq!(bench.len(), 3);
    assert_eq!(bench[1].set_index, 2);
    assert_eq!(bench[1].set, SetKind::Weighted { weight: 12.5, reps: 10 });
    assert_eq!(bench[2].reps(), Some(8));

    let treadmill: Vec<_> = log
        .exercises_on(ymd(2024, 5, 4))
        .filter(|e| e.exercise_name == "Treadmill")
        .collect();
    assert_eq!(treadmill.len(), 2);
    assert_eq!(treadmill[1].duration_min(), Some(5.0));
    assert_eq!(treadmill[1].weight(), None);

    // 无法解析的行整行跳过
    assert!(log.exercises.iter().all(|e| e.exercise_name != "Cable fly"));
    assert!(log.exercises.iter().all(|e| e.exercise_name != "Seated row"));
}

#[test]
fn test_fixture_warnings() {
    let log = parse_log_from_str(FIXTURE).unwrap();

    let lines: Vec<usize> = log.warnings.iter().map(|w| w.line).collect();
    assert_eq!(lines, vec![1, 16, 25, 32]);

    assert_eq!(
        log.warnings[0].kind,
        WarningKind::Recoverable(ParseError::UnrecognizedLine {
            raw: "Workout diary".into()
        })
    );
    assert_eq!(
        log.warnings[1].error(),
        Some(&ParseError::UnrecognizedSetToken { token: "many".into() })
    );
    assert_eq!(
        log.warnings[2].error(),
        Some(&ParseError::UnrecognizedTrackerLabel { label: "steps".into() })
    );
    assert_eq!(
        log.warnings[3].error(),
        Some(&ParseError::MixedSetTokens {
            raw: "Seated row: 25X12, 10min".into()
        })
    );
    assert_eq!(log.warnings[3].date, Some(ymd(2024, 5, 6)));
}

#[test]
fn test_every_exercise_belongs_to_one_session() {
    let log = parse_log_from_str(FIXTURE).unwrap();
    for entry in &log.exercises {
        let owners = log
            .sessions
            .iter()
            .filter(|s| s.date == entry.session_date)
            .count();
        assert_eq!(owners, 1, "orphan or ambiguous entry: {:?}", entry);
        assert!(entry.set_index >= 1);
    }
}

#[test]
fn test_parse_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", FIXTURE).unwrap();

    let from_file = parse_log_from_file(file.path()).unwrap();
    let from_str = parse_log_from_str(FIXTURE).unwrap();
    assert_eq!(from_file, from_str);
}

#[test]
fn test_parse_from_reader() {
    let log = parse_log_from_reader(FIXTURE.as_bytes()).unwrap();
    assert_eq!(log.sessions.len(), 5);
}

#[test]
fn test_missing_file() {
    let result = parse_log_from_file("/definitely/not/here/workout.txt");
    assert!(matches!(result, Err(ParseError::FileNotFound { .. })));
}

#[test]
fn test_non_utf8_input_is_io_error() {
    let bytes: &[u8] = b"02/05/24\nExercise:\nDips: 0X10\n\xff\xfe\n";
    let result = parse_log_from_reader(bytes);
    assert!(matches!(result, Err(ParseError::Io(_))));
}

#[test]
fn test_custom_config_vocabulary() {
    let config = ParserConfig {
        tracker_prefix: "Watch:".to_string(),
        ..ParserConfig::default()
    };
    let parser = LogRecordParser::new(config);

    let log = parser
        .parse_str("02/05/24\nExercise:\nDips: 0X10\nWatch: duration - 20 min")
        .unwrap();
    assert_eq!(log.sessions[0].duration_min, Some(20));
    assert!(log.warnings.is_empty());
}
