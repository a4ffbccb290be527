//! Sonmal - 지문자 조합 재생 도구
//!
//! 분류기 예측 레코드(JSON Lines)를 파일이나 표준 입력에서 읽어
//! 조합기에 순서대로 제출하고, 줄마다 현재 조합 문자열을 출력한다.
//! 카메라/분류기 파이프라인 없이 기록된 세션을 재생/디버깅하는 용도.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use serde::Deserialize;

use sonmal::config::load_config;
use sonmal::core::composer::Composer;
use sonmal::core::prediction::Prediction;

/// 재생 입력 한 줄
///
/// 예측 레코드 또는 제어 레코드:
/// `{"time": 1.2, "box": {"x": 10, "y": 20, "w": 80, "h": 80}, "char": "ㄱ", "confidence": 0.93}`
/// `{"remove": 1}` / `{"clear": true}`
#[derive(Deserialize)]
#[serde(untagged)]
enum ReplayLine {
    Event(Prediction),
    Remove { remove: usize },
    Clear { clear: bool },
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();
    let mut composer = Composer::with_config(&config);

    let args: Vec<String> = std::env::args().collect();
    let reader: Box<dyn BufRead> = match args.get(1) {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                log::error!("입력 파일 열기 실패 ({}): {}", path, e);
                std::process::exit(1);
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 오류: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<ReplayLine>(&line) {
            Ok(ReplayLine::Event(prediction)) => composer.offer(&prediction),
            Ok(ReplayLine::Remove { remove }) => composer.remove_last(remove),
            Ok(ReplayLine::Clear { clear }) => {
                if clear {
                    composer.clear();
                }
            }
            Err(e) => {
                log::warn!("잘못된 입력 줄 무시: {}", e);
                continue;
            }
        }

        println!("{}", composer.text());
    }
}
