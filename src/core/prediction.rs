//! 외부 분류기 예측 결과 타입
//!
//! 카메라/검출기/분류기 파이프라인은 이 크레이트 바깥에 있으며,
//! 프레임마다 손 하나당 하나의 `Prediction` 레코드를 공급한다.

use serde::{Deserialize, Serialize};

use super::geometry::HandBox;

/// 검출된 손 구분 (MediaPipe 계열 검출기의 handedness 라벨)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandSide {
    Left,
    Right,
}

/// 프레임 단위 손모양 분류 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// 예측 시각 (단조 증가, 초)
    pub time: f64,
    /// 손 구분 (검출기가 주지 않으면 None)
    #[serde(default)]
    pub hand: Option<HandSide>,
    /// 손 영역
    #[serde(rename = "box")]
    pub hand_box: HandBox,
    /// 분류된 자모
    #[serde(rename = "char")]
    pub ch: char,
    /// 분류 확률 (0.0 ~ 1.0)
    pub confidence: f32,
}

/// 한 프레임의 결과 중 신뢰도가 가장 높은 예측 반환
pub fn best_of_frame(predictions: &[Prediction]) -> Option<&Prediction> {
    predictions
        .iter()
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
}
