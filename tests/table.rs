use workout_log_parser::{ParserConfig, exercise_table, parse_log_from_str, session_table};

const FIXTURE: &str = include_str!("fixtures/workout_data.txt");

const SCENARIO: &str = "02/05/24
Muscle targeted: Mix
Fueling: Preworkout - 1 Sandwich, Workout Hydration - 500mL
Exercise:
Pull Ups: 1X7, 1X3
AmazeFit log: duration - 40 min, avg heart rate - 105, calories - 276kcal";

#[test]
fn test_scenario_tables() {
    let log = parse_log_from_str(SCENARIO).unwrap();

    let sessions = session_table(&log, &ParserConfig::default());
    assert_eq!(sessions.rows.len(), 1);
    assert_eq!(sessions.get(0, "date"), Some("2024-05-02"));
    assert_eq!(sessions.get(0, "muscle_target"), Some("Mix"));
    assert_eq!(sessions.get(0, "preworkout_meal_raw"), Some("1 Sandwich"));
    assert_eq!(sessions.get(0, "hydration_ml"), Some("500"));
    assert_eq!(sessions.get(0, "duration_min"), Some("40"));
    assert_eq!(sessions.get(0, "avg_heart_rate"), Some("105"));
    assert_eq!(sessions.get(0, "calories"), Some("276"));
    assert_eq!(sessions.get(0, "sandwich_qty"), Some("1"));
    assert_eq!(sessions.get(0, "banana_qty"), Some("0"));

    let exercises = exercise_table(&log);
    assert_eq!(
        exercises.to_csv_string().unwrap(),
        "date,exercise_name,set_index,weight,reps,duration_min\n\
         2024-05-02,Pull Ups,1,1,7,\n\
         2024-05-02,Pull Ups,2,1,3,\n"
    );
}

#[test]
fn test_session_csv() {
    let log = parse_log_from_str(FIXTURE).unwrap();
    let csv = session_table(&log, &ParserConfig::default())
        .to_csv_string()
        .unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "date,muscle_target,preworkout_meal_raw,unparsed_meal_text,hydration_ml,duration_min,avg_heart_rate,calories,banana_qty,apple_qty,coffee_qty,sandwich_qty"
    );
    assert_eq!(lines[1], "2024-05-02,Mix,1 Sandwich,,500,40,105,276,0,0,0,1");
    assert_eq!(lines[2], "2024-05-03,Chest,2 banana & 1 coffee,,750,55,118,390,2,0,1,0");
    assert_eq!(lines[3], "2024-05-04,Cardio,coffee,,,30,132,310,0,0,1,0");
    assert_eq!(lines[4], "2024-05-06,Back,1 apple and 1 banana,,1000,45,110,300,1,1,0,0");
    assert_eq!(lines[5], "2024-05-08,Back,,,,35,108,250,0,0,0,0");
}

#[test]
fn test_exercise_csv_nulls() {
    let log = parse_log_from_str(FIXTURE).unwrap();
    let csv = exercise_table(&log).to_csv_string().unwrap();

    assert!(csv.contains("2024-05-03,Bench Press,2,12.5,10,\n"));
    assert!(csv.contains("2024-05-03,Push Ups,1,0,15,\n"));
    assert!(csv.contains("2024-05-04,Treadmill,1,,,10\n"));
    assert!(csv.contains("2024-05-04,Cycle,1,,,15\n"));
    assert!(!csv.contains("Cable fly"));
}

#[test]
fn test_untracked_items_get_their_own_columns() {
    let input = "02/05/24
Fueling: Preworkout - 1 protein shake & 2 Dates & ???
Exercise:
Dips: 0X10";
    let log = parse_log_from_str(input).unwrap();
    let table = session_table(&log, &ParserConfig::default());

    // 固定列之后：固定餐食列，再按名称排序的其他餐食列
    let tail: Vec<&str> = table.columns[8..].iter().map(String::as_str).collect();
    assert_eq!(
        tail,
        vec!["banana_qty", "apple_qty", "coffee_qty", "sandwich_qty", "dates_qty", "protein_shake_qty"]
    );
    assert_eq!(table.get(0, "dates_qty"), Some("2"));
    assert_eq!(table.get(0, "protein_shake_qty"), Some("1"));
    assert_eq!(table.get(0, "unparsed_meal_text"), Some("???"));
}

#[test]
fn test_tables_are_idempotent() {
    let config = ParserConfig::default();
    let first = parse_log_from_str(FIXTURE).unwrap();
    let second = parse_log_from_str(FIXTURE).unwrap();

    assert_eq!(
        session_table(&first, &config).to_csv_string().unwrap(),
        session_table(&second, &config).to_csv_string().unwrap()
    );
    assert_eq!(
        exercise_table(&first).to_csv_string().unwrap(),
        exercise_table(&second).to_csv_string().unwrap()
    );
}

#[test]
fn test_write_csv_to_file() {
    let log = parse_log_from_str(SCENARIO).unwrap();
    let file = tempfile::NamedTempFile::new().unwrap();

    exercise_table(&log).write_csv(file.reopen().unwrap()).unwrap();
    let written = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(written.lines().count(), 3);
}
