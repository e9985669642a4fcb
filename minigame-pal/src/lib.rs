//! # Minigame PAL
//!
//! 小游戏宿主平台适配层（Platform Abstraction Layer）。
//!
//! ## 架构概述
//!
//! 宿主平台的原生 API 面随 SDK 版本和操作系统变化：旧代际只有一个
//! "一次查全部"的合并系统信息查询，新代际才拆分出细粒度查询；
//! 加速度计采样的坐标系还随物理横竖屏变化。本 crate 把这些差异
//! 归一成稳定、与版本无关的接口：
//!
//! ```text
//! 宿主平台                         适配器                        游戏引擎
//!   │                               │                              │
//!   │── 方向变化 / 采样事件 ───────►│ 状态机 + 坐标重映射          │
//!   │◄─ 查询 / 订阅 / 启动 ─────────│                              │
//!   │                               │◄── 细粒度查询 / 回调注册 ────│
//! ```
//!
//! 两个核心部件：
//!
//! - **能力派生**：构造时协商一次宿主能力表；宿主缺失的细粒度查询
//!   （设备/窗口/应用/系统设置/授权设置）由合并快照投影合成，
//!   原生实现永不被遮蔽
//! - **方向感知的传感器归一化**：跟踪最近的横屏方向，把原始加速度计
//!   采样重投影进"竖屏朝上"的规范坐标系
//!
//! ## 核心类型
//!
//! - [`MiniGamePal`]：适配器门面
//! - [`MiniGameHost`]：宿主平台契约（外部协作方边界）
//! - [`SystemInfo`]：旧版合并查询快照
//! - [`OrientationTracker`]：横屏方向状态机
//! - [`SubscriberSlot`]：加速度计单订阅者槽位
//!
//! ## 模块结构
//!
//! - [`host`]：宿主契约与平台检测
//! - [`capability`]：宿主能力表
//! - [`system_info`]：合并快照数据模型
//! - [`info`]：细粒度信息类型
//! - [`derive`]：快照到细粒度类型的投影
//! - [`orientation`]：方向模型与跟踪状态机
//! - [`accelerometer`]：采样模型、重映射与订阅槽位
//! - [`version`]：SDK 版本号比较
//! - [`config`]：适配层配置
//! - [`error`]：宿主边界错误
//! - [`pal`]：适配器门面

pub mod accelerometer;
pub mod capability;
pub mod config;
pub mod derive;
pub mod error;
pub mod host;
pub mod info;
pub mod orientation;
pub mod pal;
pub mod system_info;
pub mod version;

// 重导出核心类型
pub use accelerometer::{
    AccelerometerCallback, AccelerometerInterval, AccelerometerSample, AccelerometerStartParam,
    SubscriberSlot,
};
pub use capability::HostCapabilities;
pub use config::PalConfig;
pub use error::{HostError, PalResult};
pub use host::{MiniGameHost, Platform};
pub use info::{
    AppAuthorizeSetting, AppBaseInfo, AuthorizeStatus, BatteryInfo, DeviceInfo, SystemSetting,
    WindowInfo,
};
pub use orientation::{
    DeviceOrientationValue, LandscapeDirection, Orientation, OrientationChangeEvent,
    OrientationTracker,
};
pub use pal::MiniGamePal;
pub use system_info::{HostAppInfo, SafeArea, SystemInfo};
