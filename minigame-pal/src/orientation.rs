//! # Orientation 模块
//!
//! 设备方向的数据模型与方向跟踪状态机。
//!
//! ## 设计说明
//!
//! - 竖屏/横屏的**分类**永远基于实时快照（方向提示或屏幕宽高比），不缓存
//! - 状态机只记录"最近一次处于哪个横屏方向"，竖屏事件不改变它
//! - 跟踪器是显式持有的状态单元，可在测试中直接注入初始方向
//!
//! ## 状态转换
//!
//! ```text
//! landscape        -> LandscapeDirection::Right
//! landscapeReverse -> LandscapeDirection::Left
//! portrait / 其他  -> 保持不变
//! ```

use serde::{Deserialize, Serialize};

/// 对外暴露的屏幕方向
///
/// 竖屏是读取时的分类结果，不是存储状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// 竖屏
    Portrait,
    /// 横屏（Home 键在右）
    LandscapeRight,
    /// 横屏（Home 键在左）
    LandscapeLeft,
}

/// 宿主侧的原始方向取值
///
/// 同时用于方向变化事件和快照中的 `deviceOrientation` 提示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceOrientationValue {
    /// 竖屏
    Portrait,
    /// 横屏
    Landscape,
    /// 反向横屏
    LandscapeReverse,
}

impl DeviceOrientationValue {
    /// 该取值是否属于横屏
    pub fn is_landscape(&self) -> bool {
        !matches!(self, Self::Portrait)
    }
}

/// 宿主方向变化事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationChangeEvent {
    /// 事件携带的方向取值
    pub value: DeviceOrientationValue,
}

impl OrientationChangeEvent {
    /// 创建方向变化事件
    pub fn new(value: DeviceOrientationValue) -> Self {
        Self { value }
    }
}

/// 横屏方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandscapeDirection {
    /// 正向横屏
    Right,
    /// 反向横屏
    Left,
}

impl LandscapeDirection {
    /// 坐标重映射使用的符号因子
    pub fn factor(&self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

/// 方向跟踪器
///
/// 记录最近一次生效的横屏方向，初始值为 [`LandscapeDirection::Right`]。
/// 竖屏期间保持上一次的横屏读数，回答的是"上一次处于哪个横屏方向"。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientationTracker {
    last_landscape: LandscapeDirection,
}

impl OrientationTracker {
    /// 创建跟踪器（种子方向为正向横屏）
    pub fn new() -> Self {
        Self {
            last_landscape: LandscapeDirection::Right,
        }
    }

    /// 以指定方向创建跟踪器（用于测试注入）
    pub fn with_direction(direction: LandscapeDirection) -> Self {
        Self {
            last_landscape: direction,
        }
    }

    /// 处理一次方向变化事件
    pub fn note_event(&mut self, event: &OrientationChangeEvent) {
        match event.value {
            DeviceOrientationValue::Landscape => {
                self.last_landscape = LandscapeDirection::Right;
            }
            DeviceOrientationValue::LandscapeReverse => {
                self.last_landscape = LandscapeDirection::Left;
            }
            // 竖屏不清除横屏读数
            DeviceOrientationValue::Portrait => {}
        }
    }

    /// 当前记录的横屏方向
    pub fn direction(&self) -> LandscapeDirection {
        self.last_landscape
    }

    /// 根据实时分类结果换算对外方向
    ///
    /// `landscape` 由调用方从实时快照分类得出；竖屏时返回
    /// [`Orientation::Portrait`]，否则返回记录的横屏方向。
    pub fn orientation(&self, landscape: bool) -> Orientation {
        if landscape {
            match self.last_landscape {
                LandscapeDirection::Right => Orientation::LandscapeRight,
                LandscapeDirection::Left => Orientation::LandscapeLeft,
            }
        } else {
            Orientation::Portrait
        }
    }
}

impl Default for OrientationTracker {
    fn default() -> Self {
        Self::new()
    }
}
