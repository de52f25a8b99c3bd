// src/components/entity.rs

use serde::{Deserialize, Serialize};

use super::vector2::Vector2;

/// プレイヤー・足場・背景オブジェクトが共通で持つ「形」だよ！
///
/// 左上の座標 `position` と、幅 `width` / 高さ `height` だけのシンプルな矩形。
/// Canvas と同じく y 軸は下向きなので、`bottom()` は `top()` より大きい値になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub position: Vector2,
    pub width: f64,
    pub height: f64,
}

impl Entity {
    pub fn new(position: Vector2, width: f64, height: f64) -> Self {
        Self { position, width, height }
    }

    pub fn left(&self) -> f64 {
        self.position.x
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.position.y
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.height
    }

    /// x 方向だけずらす。スクロールで足場や背景を動かす時に使う。
    pub fn shift_x(&mut self, dx: f64) {
        self.position.x += dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_canvas_orientation() {
        let e = Entity::new(Vector2::new(-1.0, 470.0), 580.0, 125.0);
        assert_eq!(e.left(), -1.0);
        assert_eq!(e.right(), 579.0);
        assert_eq!(e.top(), 470.0);
        assert_eq!(e.bottom(), 595.0);
    }

    #[test]
    fn shift_x_moves_only_horizontally() {
        let mut e = Entity::new(Vector2::new(10.0, 20.0), 30.0, 30.0);
        e.shift_x(-5.0);
        assert_eq!(e.position, Vector2::new(5.0, 20.0));
        assert_eq!(e.width, 30.0);
        assert_eq!(e.height, 30.0);
    }
}
