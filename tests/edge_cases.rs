use workout_log_parser::{
    ParseError, SetKind, SetToken, WarningKind, decompose_meal, parse_log_from_str,
    parse_set_token,
};

#[test]
fn weighted_tokens_parse_exactly() {
    let cases = [("1X7", 1.0, 7), ("2.5X4", 2.5, 4), ("0X20", 0.0, 20), ("102.25X1", 102.25, 1)];
    for (token, weight, reps) in cases {
        assert_eq!(
            parse_set_token(token),
            SetToken::Weighted { weight, reps },
            "token: {}",
            token
        );
    }
}

#[test]
fn duration_tokens_have_no_weight_or_reps() {
    let log = parse_log_from_str("02/05/24\nExercise:\nCross trainer: 12min").unwrap();
    let entry = &log.exercises[0];
    assert_eq!(entry.set, SetKind::Cardio { duration_min: 12.0 });
    assert_eq!(entry.weight(), None);
    assert_eq!(entry.reps(), None);
}

#[test]
fn bare_meal_item_is_quantity_one() {
    let meal = decompose_meal("Coffee");
    assert_eq!(meal.quantity("coffee"), 1.0);
}

#[test]
fn meal_quantities_sum_to_token_count() {
    let meal = decompose_meal("2 banana & 1 coffee");
    let total: f64 = meal.components().iter().map(|c| c.quantity).sum();
    assert_eq!(total, 3.0);
}

#[test]
fn empty_block_between_days_keeps_only_date() {
    let input = "01/05/24\n02/05/24\nExercise:\nDips: 0X10";
    let log = parse_log_from_str(input).unwrap();

    assert_eq!(log.sessions.len(), 2);
    let first = &log.sessions[0];
    assert_eq!(first.muscle_target, None);
    assert_eq!(first.hydration_ml, None);
    assert_eq!(first.duration_min, None);
    assert!(log.warnings.is_empty());
}

#[test]
fn exercise_lines_after_tracker_are_unrecognized() {
    let input = "02/05/24\nExercise:\nDips: 0X10\nAmazeFit log: duration - 20 min\nCurls: 5X10";
    let log = parse_log_from_str(input).unwrap();

    assert_eq!(log.exercises.len(), 1);
    assert_eq!(
        log.warnings[0].kind,
        WarningKind::Recoverable(ParseError::UnrecognizedLine {
            raw: "Curls: 5X10".into()
        })
    );
}

#[test]
fn invalid_date_block_is_dropped_with_warning() {
    let input = "02/05/24\nExercise:\nDips: 0X10\n31/02/24\nExercise:\nDips: 0X12";
    let log = parse_log_from_str(input).unwrap();

    assert_eq!(log.sessions.len(), 1);
    assert_eq!(log.exercises.len(), 1);
    assert_eq!(log.warnings.len(), 1);
    assert_eq!(log.warnings[0].line, 4);
    assert_eq!(
        log.warnings[0].error(),
        Some(&ParseError::InvalidDate { raw: "31/02/24".into() })
    );
}

#[test]
fn tracker_only_block_is_usable_structure() {
    let log = parse_log_from_str("02/05/24\nAmazeFit log: calories - 120kcal").unwrap();
    assert_eq!(log.sessions[0].calories, Some(120));
    assert!(log.exercises.is_empty());
}
