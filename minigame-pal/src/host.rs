//! # Host 模块
//!
//! 宿主平台边界。
//!
//! ## 架构说明
//!
//! 宿主是外部协作方：它提供设备/窗口/传感器等原生 API，
//! 并以推模型向适配器投递事件（方向变化、加速度计采样）。
//! 本模块只定义契约，不包含任何具体宿主实现。
//!
//! 事件流向：
//!
//! ```text
//! 宿主                          适配器
//!   │── 方向变化事件 ─────────► handle_orientation_change()
//!   │── 加速度计采样 ─────────► handle_accelerometer_sample()
//! ```

use crate::accelerometer::AccelerometerStartParam;
use crate::capability::HostCapabilities;
use crate::error::{HostError, PalResult};
use crate::info::{
    AppAuthorizeSetting, AppBaseInfo, BatteryInfo, DeviceInfo, SystemSetting, WindowInfo,
};
use crate::system_info::SystemInfo;

/// 检测到的宿主平台
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Windows,
    Mac,
    /// 开发者工具模拟器
    DevTools,
    /// 未识别的平台标识
    Other(String),
}

impl Platform {
    /// 从快照中的平台标识解析（大小写不敏感）
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.to_lowercase().as_str() {
            "android" => Self::Android,
            "ios" => Self::Ios,
            "windows" => Self::Windows,
            "mac" => Self::Mac,
            "devtools" => Self::DevTools,
            _ => Self::Other(identifier.to_string()),
        }
    }

    /// 是否为 Android 宿主
    pub fn is_android(&self) -> bool {
        matches!(self, Self::Android)
    }
}

/// 宿主平台契约
///
/// 细粒度查询带有默认实现（报告接口缺失）：旧代际宿主只需实现
/// 合并查询，并在能力表中如实声明。能力表声明支持的接口，
/// 适配器才会调用。
pub trait MiniGameHost {
    /// 宿主能力表（适配器构造时读取一次）
    fn capabilities(&self) -> HostCapabilities;

    /// 旧版合并查询，每次调用返回新快照
    ///
    /// 快照在启动初期的几何/方向字段不可靠，调用方不应跨帧缓存。
    fn system_info(&self) -> PalResult<SystemInfo>;

    // ── 细粒度原生查询（能力表声明支持时才会被调用） ──

    /// 原生 `getDeviceInfo`
    fn device_info(&self) -> PalResult<DeviceInfo> {
        Err(HostError::unsupported("getDeviceInfo"))
    }

    /// 原生 `getWindowInfo`
    fn window_info(&self) -> PalResult<WindowInfo> {
        Err(HostError::unsupported("getWindowInfo"))
    }

    /// 原生 `getAppBaseInfo`
    fn app_base_info(&self) -> PalResult<AppBaseInfo> {
        Err(HostError::unsupported("getAppBaseInfo"))
    }

    /// 原生 `getSystemSetting`
    fn system_setting(&self) -> PalResult<SystemSetting> {
        Err(HostError::unsupported("getSystemSetting"))
    }

    /// 原生 `getAppAuthorizeSetting`
    fn app_authorize_setting(&self) -> PalResult<AppAuthorizeSetting> {
        Err(HostError::unsupported("getAppAuthorizeSetting"))
    }

    // ── 其余宿主接口 ──

    /// 电量查询
    fn battery_info(&self) -> PalResult<BatteryInfo>;

    /// 订阅设备方向事件
    ///
    /// 订阅后宿主将方向变化送入适配器的 `handle_orientation_change`。
    fn subscribe_device_orientation(&mut self);

    /// 打开加速度计采样投递
    fn subscribe_accelerometer(&mut self);

    /// 关闭加速度计采样投递
    fn unsubscribe_accelerometer(&mut self);

    /// 启动加速度计
    fn start_accelerometer(&mut self, param: &AccelerometerStartParam) -> PalResult<()>;

    /// 停止加速度计
    fn stop_accelerometer(&mut self) -> PalResult<()>;

    /// 一次性渲染兼容补丁钩子
    ///
    /// 受画布存在性与平台/版本门控，至多被调用一次。
    fn patch_canvas_use_program(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parsing_case_insensitive() {
        assert_eq!(Platform::from_identifier("android"), Platform::Android);
        assert_eq!(Platform::from_identifier("Android"), Platform::Android);
        assert_eq!(Platform::from_identifier("iOS"), Platform::Ios);
        assert_eq!(Platform::from_identifier("windows"), Platform::Windows);
        assert_eq!(Platform::from_identifier("devtools"), Platform::DevTools);
        assert_eq!(
            Platform::from_identifier("harmony"),
            Platform::Other("harmony".to_string())
        );
    }

    #[test]
    fn test_platform_android_check() {
        assert!(Platform::Android.is_android());
        assert!(!Platform::Ios.is_android());
        assert!(!Platform::Other("android-like".to_string()).is_android());
    }
}
