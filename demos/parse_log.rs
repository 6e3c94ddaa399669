//! 解析训练日志并写出两张 CSV 表
//!
//! 用法: cargo run --example parse_log -- <workout_data.txt> [输出目录]
//!
//! 设置 `RUST_LOG=warn` 可看到逐行警告。

use std::env;
use std::fs::File;
use std::path::PathBuf;
use workout_log_parser::metrics::{detect_stalls, session_metrics};
use workout_log_parser::{LogRecordParser, exercise_table, session_table};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input = args.next().ok_or("usage: parse_log <workout_data.txt> [out_dir]")?;
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));

    let parser = LogRecordParser::default();
    let log = parser.parse_file(&input)?;

    let sessions_path = out_dir.join("session_log.csv");
    let exercises_path = out_dir.join("exercise_log.csv");
    session_table(&log, parser.config()).write_csv(File::create(&sessions_path)?)?;
    exercise_table(&log).write_csv(File::create(&exercises_path)?)?;

    println!("会话表已写入: {}", sessions_path.display());
    println!("训练明细表已写入: {}", exercises_path.display());
    println!(
        "共 {} 天, {} 组, {} 条警告",
        log.sessions.len(),
        log.exercises.len(),
        log.warnings.len()
    );

    for m in session_metrics(&log) {
        println!(
            "  {}: 训练量 {:.1}, 每分钟 {}, 补水 {}",
            m.date,
            m.total_volume,
            m.volume_per_minute
                .map(|v| format!("{v:.2}"))
                .unwrap_or_else(|| "-".to_string()),
            m.hydration_level
                .map(|h| h.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    let stalls = detect_stalls(&log, "Lat pulldown");
    if !stalls.is_empty() {
        println!("Lat pulldown 停滞点:");
        for s in stalls {
            println!("  {} @ {}", s.date, s.avg_weight);
        }
    }

    Ok(())
}
