//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Sonmal 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SonmalConfig {
    /// 예측 채택 최소 신뢰도 (0.0 ~ 1.0)
    #[serde(default = "default_add_thresh")]
    pub add_thresh: f32,
    /// 조합 불가능한 다른 자모 등록까지 최소 대기 시간 (초)
    #[serde(default = "default_input_delay")]
    pub input_delay: f64,
    /// 겹자음/조합 글자 인정 임계 시간 (초)
    #[serde(default = "default_combination_delay")]
    pub combination_delay: f64,
    /// 같은 손모양 유지 인정 시간 (초)
    #[serde(default = "default_hold_duration")]
    pub hold_duration: f64,
}

fn default_add_thresh() -> f32 {
    0.7
}

fn default_input_delay() -> f64 {
    1.0
}

fn default_combination_delay() -> f64 {
    2.0
}

fn default_hold_duration() -> f64 {
    0.8
}

impl Default for SonmalConfig {
    fn default() -> Self {
        Self {
            add_thresh: default_add_thresh(),
            input_delay: default_input_delay(),
            combination_delay: default_combination_delay(),
            hold_duration: default_hold_duration(),
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/sonmal/config.json
/// (XDG_CONFIG_HOME 미설정 시 ~/.config 사용)
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .ok()
                .map(PathBuf::from)
                .filter(|p| p.is_absolute() && p.is_dir())
                .unwrap_or_else(|| {
                    // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
                    PathBuf::from("/var/tmp")
                });
            home.join(".config")
        });
    base.join("sonmal").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> SonmalConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| SonmalConfig::default()),
        Err(_) => SonmalConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &SonmalConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
