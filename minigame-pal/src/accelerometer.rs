//! # Accelerometer 模块
//!
//! 加速度计采样模型、坐标重映射与单订阅者槽位。
//!
//! ## 设计说明
//!
//! - 采样按值消费、按值重发：原始采样从不被持有或原地修改
//! - 同一时刻最多一个有效订阅者，注册即替换（不做多订阅者扇出）
//! - 重映射把传感器的竖屏坐标系旋转 ±90°，对齐横屏视觉坐标系，
//!   使消费方永远以"竖屏朝上"的规范坐标系读取重力相关轴

use serde::{Deserialize, Serialize};

use crate::orientation::LandscapeDirection;

/// 加速度计采样
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccelerometerSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AccelerometerSample {
    /// 创建采样
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// 按横屏方向重映射坐标轴
    ///
    /// 设 `f` 为方向因子（正向横屏 +1，反向横屏 -1）：
    ///
    /// ```text
    /// x' = -y * f
    /// y' =  x * f
    /// z' =  z
    /// ```
    pub fn rotated(self, direction: LandscapeDirection) -> Self {
        let f = direction.factor();
        Self {
            x: -self.y * f,
            y: self.x * f,
            z: self.z,
        }
    }
}

/// 采样频率档位
///
/// 启动时传给宿主的提示值，适配层原样透传。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccelerometerInterval {
    /// 游戏档（约 20ms）
    Game,
    /// 界面档（约 60ms）
    Ui,
    /// 普通档（约 200ms）
    #[default]
    Normal,
}

/// 加速度计启动参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelerometerStartParam {
    /// 采样频率档位
    #[serde(default)]
    pub interval: AccelerometerInterval,
}

impl AccelerometerStartParam {
    /// 以指定档位创建启动参数
    pub fn with_interval(interval: AccelerometerInterval) -> Self {
        Self { interval }
    }
}

/// 订阅者回调
pub type AccelerometerCallback = Box<dyn FnMut(AccelerometerSample)>;

/// 单订阅者槽位
///
/// 显式建模"设置当前订阅者"与"清除订阅者"两个操作，
/// 不依赖闭包捕获外部可变状态。
#[derive(Default)]
pub struct SubscriberSlot {
    callback: Option<AccelerometerCallback>,
}

impl SubscriberSlot {
    /// 创建空槽位
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置当前订阅者，返回是否替换了已有订阅者
    pub fn set(&mut self, callback: AccelerometerCallback) -> bool {
        self.callback.replace(callback).is_some()
    }

    /// 清除订阅者，返回之前是否存在订阅者
    pub fn clear(&mut self) -> bool {
        self.callback.take().is_some()
    }

    /// 是否有有效订阅者
    pub fn is_active(&self) -> bool {
        self.callback.is_some()
    }

    /// 向订阅者投递采样（无订阅者时为 no-op）
    pub fn deliver(&mut self, sample: AccelerometerSample) {
        if let Some(callback) = self.callback.as_mut() {
            callback(sample);
        }
    }
}
