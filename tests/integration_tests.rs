//! 통합 테스트 - 지문자 조합 핵심 로직

use sonmal::{
    best_of_frame, decompose, Composer, Decomposition, HandBox, Prediction, SonmalConfig,
    StudyMode, StudyOutcome, StudySession,
};

fn pred(time: f64, x: i32, ch: char) -> Prediction {
    Prediction {
        time,
        hand: None,
        hand_box: HandBox::new(x, 100, 80, 80),
        ch,
        confidence: 0.9,
    }
}

#[test]
fn test_doubling_requires_movement() {
    // 같은 손모양을 자리만 옮겨 다시 취하면 겹자음
    let mut composer = Composer::new();
    composer.offer(&pred(0.0, 100, 'ㄱ'));
    composer.offer(&pred(0.5, 200, 'ㄱ'));
    assert_eq!(composer.text(), "ㄲ");

    // 같은 자리에 들고만 있으면 그대로
    let mut composer = Composer::new();
    composer.offer(&pred(0.0, 100, 'ㄱ'));
    composer.offer(&pred(0.5, 100, 'ㄱ'));
    assert_eq!(composer.text(), "ㄱ");
}

#[test]
fn test_vowel_combination_within_window() {
    let mut composer = Composer::new();
    composer.offer(&pred(0.0, 100, 'ㅗ'));
    composer.offer(&pred(0.3, 100, 'ㅏ'));
    assert_eq!(composer.text(), "ㅘ");
}

#[test]
fn test_combination_window_expiry() {
    // 임계시간(2초) 초과: 두 글자로 따로 등록
    let mut composer = Composer::new();
    composer.offer(&pred(0.0, 100, 'ㅗ'));
    composer.offer(&pred(3.0, 100, 'ㅏ'));
    assert_eq!(composer.text(), "ㅗㅏ");
}

#[test]
fn test_input_delay_drops_fast_input() {
    // ㄱㄴ은 조합 규칙이 없고 1초 이내의 입력은 노이즈로 버림
    let mut composer = Composer::new();
    composer.offer(&pred(0.0, 100, 'ㄱ'));
    composer.offer(&pred(0.2, 100, 'ㄴ'));
    assert_eq!(composer.text(), "ㄱ");
}

#[test]
fn test_compose_word_then_undo() {
    let mut composer = Composer::new();
    composer.offer(&pred(0.0, 100, 'ㄱ'));
    composer.offer(&pred(0.5, 200, 'ㄱ')); // ㄲ
    composer.offer(&pred(2.0, 200, 'ㅏ'));
    assert_eq!(composer.text(), "ㄲㅏ");

    composer.remove_last(1);
    assert_eq!(composer.text(), "ㄲ");

    composer.clear();
    assert_eq!(composer.text(), "");
}

#[test]
fn test_decompose_roundtrip() {
    assert_eq!(decompose('ㅘ'), Decomposition::Combined('ㅗ', 'ㅏ'));
    assert_eq!(decompose('ㄳ'), Decomposition::Combined('ㄱ', 'ㅅ'));
    assert_eq!(decompose('ㅆ'), Decomposition::Doubled('ㅅ'));
    assert_eq!(decompose('ㅏ'), Decomposition::Base('ㅏ'));
}

#[test]
fn test_best_of_frame_feeds_composer() {
    // 두 손이 검출된 프레임에서 신뢰도 높은 쪽만 사용
    let mut frame = vec![pred(0.0, 100, 'ㄱ'), pred(0.0, 400, 'ㅏ')];
    frame[0].confidence = 0.95;
    frame[1].confidence = 0.6;

    let mut composer = Composer::new();
    if let Some(best) = best_of_frame(&frame) {
        composer.offer(best);
    }
    assert_eq!(composer.text(), "ㄱ");
}

#[test]
fn test_study_session_flow() {
    // ㅄ 학습: ㅂ, ㅅ 두 단계를 순서대로 유지
    let config = SonmalConfig::default();
    let mut session = StudySession::new(StudyMode::Study, &config);
    session.set_answer('ㅄ').unwrap();
    assert_eq!(session.steps(), ['ㅂ', 'ㅅ']);

    assert_eq!(session.offer(&pred(0.0, 100, 'ㅂ')), StudyOutcome::Waiting);
    assert_eq!(
        session.offer(&pred(1.0, 100, 'ㅂ')),
        StudyOutcome::Matched('ㅂ')
    );
    assert_eq!(session.offer(&pred(2.0, 100, 'ㅅ')), StudyOutcome::Waiting);
    assert_eq!(session.offer(&pred(3.0, 100, 'ㅅ')), StudyOutcome::Complete);
    assert!(session.is_complete());
}

#[test]
fn test_quiz_session_composes_double_consonant() {
    // ㄲ 퀴즈: ㄱ 손모양을 자리를 옮겨 두 번 유지
    let config = SonmalConfig::default();
    let mut session = StudySession::new(StudyMode::Quiz, &config);
    session.set_answer('ㄲ').unwrap();

    assert_eq!(session.offer(&pred(0.0, 100, 'ㄱ')), StudyOutcome::Waiting);
    assert_eq!(session.offer(&pred(1.0, 100, 'ㄱ')), StudyOutcome::Waiting);
    assert_eq!(session.composed(), "ㄱ");

    assert_eq!(session.offer(&pred(1.2, 300, 'ㄱ')), StudyOutcome::Waiting);
    assert_eq!(session.offer(&pred(2.2, 300, 'ㄱ')), StudyOutcome::Complete);
    assert_eq!(session.composed(), "ㄲ");
}
