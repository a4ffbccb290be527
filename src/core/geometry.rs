//! 손 영역 사각형과 이동 판정

use serde::{Deserialize, Serialize};

/// 프레임 내 손 영역 (픽셀 좌표, 좌상단 기준)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl HandBox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// 영역 중심점
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// 직전 영역 대비 중심점 이동 여부
    ///
    /// 이동 임계는 현재 영역의 가로/세로 절반 중 작은 쪽이며,
    /// 가로나 세로 한 축이라도 임계를 초과해야 이동으로 본다.
    /// 손을 가만히 들고 있을 때의 프레임 흔들림은 이동이 아니다.
    pub fn moved_from(&self, last: &HandBox) -> bool {
        let move_range = (self.w / 2).min(self.h / 2);

        let (center_x, center_y) = self.center();
        let (last_center_x, last_center_y) = last.center();
        let diff_x = (center_x - last_center_x).abs();
        let diff_y = (center_y - last_center_y).abs();

        diff_x > move_range || diff_y > move_range
    }
}
