//! 학습 세션 상태 기계
//!
//! 한 문제(자모 하나)를 내고 손모양 예측 스트림으로 진행을 판정합니다.
//! 학습 모드는 문제를 구성 지문자 단계로 분해해 순서대로 따라하게 하고,
//! 퀴즈 모드는 조합기의 결과가 문제와 일치하는지 확인합니다.

use crate::config::SonmalConfig;
use crate::core::composer::Composer;
use crate::core::jamo;
use crate::core::prediction::Prediction;
use crate::core::tables;
use crate::gate::HoldGate;

/// 퀴즈 모드에서 유지하는 최대 조합 글자 수
/// 초과 시 처음부터 다시 조합한다
const QUIZ_HISTORY_LIMIT: usize = 2;

/// 세션 진행 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMode {
    /// 구성 지문자를 한 단계씩 따라하는 학습 모드
    Study,
    /// 조합 결과로 문제를 맞히는 퀴즈 모드
    Quiz,
}

/// 세션 오류
#[derive(Debug)]
pub enum StudyError {
    /// 지문자 나열로 표현할 수 없는 문제
    NotSignable(char),
}

impl std::fmt::Display for StudyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudyError::NotSignable(c) => write!(f, "지문자로 표현할 수 없는 문자: {}", c),
        }
    }
}

impl std::error::Error for StudyError {}

/// 예측 제출 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyOutcome {
    /// 판정 없음 (유지 시간 미달 또는 문제 미설정)
    Waiting,
    /// 현재 단계 통과, 다음 단계 진행
    Matched(char),
    /// 틀린 손모양 (단계는 유지)
    Wrong(char),
    /// 문제 완료
    Complete,
}

/// 학습/퀴즈 세션
pub struct StudySession {
    mode: StudyMode,
    add_thresh: f32,
    /// 현재 문제
    target: Option<char>,
    /// 학습 모드의 단계 목록 (퀴즈 모드는 문제 하나)
    steps: Vec<char>,
    progress: usize,
    done: bool,
    composer: Composer,
    gate: HoldGate,
}

impl StudySession {
    pub fn new(mode: StudyMode, config: &SonmalConfig) -> Self {
        Self {
            mode,
            add_thresh: config.add_thresh,
            target: None,
            steps: Vec::new(),
            progress: 0,
            done: false,
            composer: Composer::with_config(config),
            gate: HoldGate::new(config.hold_duration),
        }
    }

    /// 새 문제 설정
    ///
    /// 문제는 자모이며 기본 지문자의 나열로 분해 가능해야 한다.
    /// 이전 문제의 진행 상태와 조합 내용은 전부 초기화된다.
    pub fn set_answer(&mut self, answer: char) -> Result<(), StudyError> {
        let parts = tables::decompose(answer).parts();
        if !jamo::is_jamo(answer) || parts.iter().any(|c| !jamo::is_base(*c)) {
            return Err(StudyError::NotSignable(answer));
        }

        self.steps = match self.mode {
            StudyMode::Study => parts,
            StudyMode::Quiz => vec![answer],
        };
        self.target = Some(answer);
        self.progress = 0;
        self.done = false;
        self.composer.clear();
        self.gate.reset();
        log::debug!("문제 변경: {:?} -> 단계 {:?}", answer, self.steps);
        Ok(())
    }

    /// 손모양 예측 제출
    ///
    /// 신뢰도 임계 미달 예측은 판정에 쓰지 않는다. 유지 시간을 채운
    /// 예측만 단계 판정(학습 모드) 또는 조합(퀴즈 모드)에 들어간다.
    pub fn offer(&mut self, prediction: &Prediction) -> StudyOutcome {
        if self.done {
            return StudyOutcome::Complete;
        }
        let Some(target) = self.target else {
            return StudyOutcome::Waiting;
        };

        let confidence = prediction.confidence;
        if confidence.is_nan() || confidence.clamp(0.0, 1.0) < self.add_thresh {
            return StudyOutcome::Waiting;
        }
        if !self.gate.offer(prediction.time, prediction.ch) {
            return StudyOutcome::Waiting;
        }

        match self.mode {
            StudyMode::Study => {
                let expected = self.steps[self.progress];
                if prediction.ch != expected {
                    return StudyOutcome::Wrong(prediction.ch);
                }

                self.progress += 1;
                if self.progress == self.steps.len() {
                    self.done = true;
                    log::debug!("문제 완료: {}", target);
                    StudyOutcome::Complete
                } else {
                    StudyOutcome::Matched(expected)
                }
            }
            StudyMode::Quiz => {
                if self.composer.len() > QUIZ_HISTORY_LIMIT {
                    self.composer.clear();
                }
                self.composer
                    .push(prediction.time, prediction.hand_box, prediction.ch);
                log::debug!("조합 문자열: {}", self.composer.text());

                if self.composer.last_char() == Some(target) {
                    self.done = true;
                    StudyOutcome::Complete
                } else {
                    StudyOutcome::Waiting
                }
            }
        }
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    /// 현재 문제
    pub fn target(&self) -> Option<char> {
        self.target
    }

    /// 문제의 단계 목록
    pub fn steps(&self) -> &[char] {
        &self.steps
    }

    /// 통과한 단계 수
    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.done
    }

    /// 퀴즈 모드에서 지금까지 조합된 문자열
    pub fn composed(&self) -> String {
        self.composer.text()
    }
}
