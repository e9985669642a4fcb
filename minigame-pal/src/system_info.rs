//! # SystemInfo 模块
//!
//! 旧版合并查询返回的系统信息快照。
//!
//! ## 设计说明
//!
//! - 快照是**每次调用的不可变记录**：启动初期的几何/方向字段不可靠，
//!   因此适配层从不跨调用缓存快照
//! - 字段以 camelCase 序列化，宿主桥接层可直接从 JSON 解码
//! - 随宿主 SDK 代际变化的字段（授权标记、方向提示、安全区域等）
//!   建模为 `Option`，缺失即 `None`

use serde::{Deserialize, Serialize};

use crate::orientation::DeviceOrientationValue;

/// 宿主应用信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostAppInfo {
    /// 宿主应用 ID
    pub app_id: String,
}

/// 安全区域
///
/// 以屏幕坐标系表示的矩形，不随屏幕方向变化。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl SafeArea {
    /// 以整块屏幕合成安全区域
    ///
    /// 宿主未报告安全区域时使用，保证调用方始终拿到可用矩形。
    pub fn full_screen(screen_width: f64, screen_height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: screen_width,
            bottom: screen_height,
            width: screen_width,
            height: screen_height,
        }
    }
}

/// 旧版合并查询的系统信息快照
///
/// 对应宿主的 `getSystemInfoSync()`。新代际宿主已将其拆分为
/// 设备/窗口/应用/设置等细粒度查询，本类型保留完整字段集，
/// 供能力缺失时的派生投影使用（见 [`crate::derive`]）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemInfo {
    // ── 设备 ──
    pub abi: String,
    pub device_abi: String,
    pub brand: String,
    pub model: String,
    pub system: String,
    pub platform: String,
    pub cpu_type: String,
    pub memory_size: String,
    pub benchmark_level: i32,

    // ── 窗口几何（物理像素相关） ──
    pub pixel_ratio: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    pub window_width: f64,
    pub window_height: f64,
    pub status_bar_height: f64,
    pub screen_top: f64,
    pub safe_area: Option<SafeArea>,

    // ── 应用/运行时 ──
    #[serde(rename = "SDKVersion")]
    pub sdk_version: String,
    pub version: String,
    pub language: String,
    pub theme: String,
    pub mode: String,
    pub enable_debug: bool,
    pub font_size_setting: f64,
    pub font_size_scale_factor: f64,
    pub host: HostAppInfo,

    // ── 系统设置 ──
    pub bluetooth_enabled: bool,
    pub location_enabled: bool,
    pub wifi_enabled: bool,
    pub device_orientation: Option<DeviceOrientationValue>,

    // ── 授权标记（缺失表示宿主未暴露该类目） ──
    pub album_authorized: Option<bool>,
    pub bluetooth_authorized: Option<bool>,
    pub camera_authorized: Option<bool>,
    pub location_authorized: Option<bool>,
    pub location_reduced_accuracy: Option<bool>,
    pub microphone_authorized: Option<bool>,
    pub notification_authorized: Option<bool>,
    pub notification_alert_authorized: Option<bool>,
    pub notification_badge_authorized: Option<bool>,
    pub notification_sound_authorized: Option<bool>,
    pub phone_calendar_authorized: Option<bool>,
}
