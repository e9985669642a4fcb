//! # Info 模块
//!
//! 细粒度信息查询的返回类型。
//!
//! ## 设计说明
//!
//! - 每个类型都是 [`SystemInfo`](crate::system_info::SystemInfo) 的严格字段子集，
//!   新代际宿主原生提供同形查询，旧代际由 [`crate::derive`] 投影合成
//! - 授权设置使用三态域：缺失 / 已授权 / 已拒绝，映射是全函数

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::orientation::DeviceOrientationValue;
use crate::system_info::{HostAppInfo, SafeArea};

/// 设备信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub abi: String,
    pub device_abi: String,
    pub benchmark_level: i32,
    pub brand: String,
    pub model: String,
    pub system: String,
    pub platform: String,
    pub cpu_type: String,
    pub memory_size: String,
}

/// 窗口信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowInfo {
    pub pixel_ratio: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    pub window_width: f64,
    pub window_height: f64,
    pub status_bar_height: f64,
    pub safe_area: Option<SafeArea>,
    pub screen_top: f64,
}

/// 应用基础信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppBaseInfo {
    #[serde(rename = "SDKVersion")]
    pub sdk_version: String,
    pub enable_debug: bool,
    pub host: HostAppInfo,
    pub language: String,
    pub version: String,
    pub theme: String,
    pub mode: String,
    pub font_size_scale_factor: f64,
    pub font_size_setting: f64,
}

/// 系统设置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSetting {
    pub bluetooth_enabled: bool,
    pub location_enabled: bool,
    pub wifi_enabled: bool,
    pub device_orientation: Option<DeviceOrientationValue>,
}

/// 授权状态
///
/// 三态域中的两个显式取值；缺失用 `Option::None` 表达。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorizeStatus {
    /// 已授权
    Authorized,
    /// 已拒绝
    Denied,
}

impl AuthorizeStatus {
    /// 从旧版快照的布尔标记映射授权状态
    ///
    /// 映射是全函数：缺失 -> 缺失，真 -> 已授权，假 -> 已拒绝。
    pub fn from_flag(flag: Option<bool>) -> Option<Self> {
        flag.map(|granted| if granted { Self::Authorized } else { Self::Denied })
    }
}

impl fmt::Display for AuthorizeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authorized => write!(f, "authorized"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// 应用授权设置
///
/// `location_reduced_accuracy` 是例外：它不是授权类目，
/// 按布尔原样透传，不参与三态映射。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAuthorizeSetting {
    pub album_authorized: Option<AuthorizeStatus>,
    pub bluetooth_authorized: Option<AuthorizeStatus>,
    pub camera_authorized: Option<AuthorizeStatus>,
    pub location_authorized: Option<AuthorizeStatus>,
    pub location_reduced_accuracy: Option<bool>,
    pub microphone_authorized: Option<AuthorizeStatus>,
    pub notification_authorized: Option<AuthorizeStatus>,
    pub notification_alert_authorized: Option<AuthorizeStatus>,
    pub notification_badge_authorized: Option<AuthorizeStatus>,
    pub notification_sound_authorized: Option<AuthorizeStatus>,
    pub phone_calendar_authorized: Option<AuthorizeStatus>,
}

/// 电量信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryInfo {
    /// 电量百分比（1-100）
    pub level: i32,
    /// 是否在充电
    pub is_charging: bool,
}
