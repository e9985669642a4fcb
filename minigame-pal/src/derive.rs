//! # Derive 模块
//!
//! 从旧版合并快照到细粒度信息类型的投影函数。
//!
//! ## 设计原则
//!
//! - 每个派生类型一个**显式、静态检查**的字段映射函数，不做动态字段拷贝
//! - 投影相对快照是纯函数：不缓存、不修改快照、不产生副作用
//! - 投影只在宿主能力表声明缺失对应原生查询时被调用（见 [`crate::pal`]）

use crate::info::{
    AppAuthorizeSetting, AppBaseInfo, AuthorizeStatus, DeviceInfo, SystemSetting, WindowInfo,
};
use crate::system_info::SystemInfo;

/// 从快照投影设备信息
pub fn device_info(info: &SystemInfo) -> DeviceInfo {
    DeviceInfo {
        abi: info.abi.clone(),
        device_abi: info.device_abi.clone(),
        benchmark_level: info.benchmark_level,
        brand: info.brand.clone(),
        model: info.model.clone(),
        system: info.system.clone(),
        platform: info.platform.clone(),
        cpu_type: info.cpu_type.clone(),
        memory_size: info.memory_size.clone(),
    }
}

/// 从快照投影窗口信息
pub fn window_info(info: &SystemInfo) -> WindowInfo {
    WindowInfo {
        pixel_ratio: info.pixel_ratio,
        screen_width: info.screen_width,
        screen_height: info.screen_height,
        window_width: info.window_width,
        window_height: info.window_height,
        status_bar_height: info.status_bar_height,
        safe_area: info.safe_area,
        screen_top: info.screen_top,
    }
}

/// 从快照投影应用基础信息
pub fn app_base_info(info: &SystemInfo) -> AppBaseInfo {
    AppBaseInfo {
        sdk_version: info.sdk_version.clone(),
        enable_debug: info.enable_debug,
        host: info.host.clone(),
        language: info.language.clone(),
        version: info.version.clone(),
        theme: info.theme.clone(),
        mode: info.mode.clone(),
        font_size_scale_factor: info.font_size_scale_factor,
        font_size_setting: info.font_size_setting,
    }
}

/// 从快照投影系统设置
pub fn system_setting(info: &SystemInfo) -> SystemSetting {
    SystemSetting {
        bluetooth_enabled: info.bluetooth_enabled,
        location_enabled: info.location_enabled,
        wifi_enabled: info.wifi_enabled,
        device_orientation: info.device_orientation,
    }
}

/// 从快照投影应用授权设置
///
/// 各授权类目按三态域映射；`location_reduced_accuracy` 按布尔原样透传。
pub fn app_authorize_setting(info: &SystemInfo) -> AppAuthorizeSetting {
    AppAuthorizeSetting {
        album_authorized: AuthorizeStatus::from_flag(info.album_authorized),
        bluetooth_authorized: AuthorizeStatus::from_flag(info.bluetooth_authorized),
        camera_authorized: AuthorizeStatus::from_flag(info.camera_authorized),
        location_authorized: AuthorizeStatus::from_flag(info.location_authorized),
        location_reduced_accuracy: info.location_reduced_accuracy,
        microphone_authorized: AuthorizeStatus::from_flag(info.microphone_authorized),
        notification_authorized: AuthorizeStatus::from_flag(info.notification_authorized),
        notification_alert_authorized: AuthorizeStatus::from_flag(info.notification_alert_authorized),
        notification_badge_authorized: AuthorizeStatus::from_flag(info.notification_badge_authorized),
        notification_sound_authorized: AuthorizeStatus::from_flag(info.notification_sound_authorized),
        phone_calendar_authorized: AuthorizeStatus::from_flag(info.phone_calendar_authorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::DeviceOrientationValue;
    use crate::system_info::{HostAppInfo, SafeArea};

    fn sample_snapshot() -> SystemInfo {
        SystemInfo {
            abi: "arm64".to_string(),
            device_abi: "arm64-v8a".to_string(),
            brand: "TestBrand".to_string(),
            model: "TestModel 12".to_string(),
            system: "iOS 17.0".to_string(),
            platform: "ios".to_string(),
            cpu_type: "A15".to_string(),
            memory_size: "6144".to_string(),
            benchmark_level: -1,
            pixel_ratio: 3.0,
            screen_width: 390.0,
            screen_height: 844.0,
            window_width: 390.0,
            window_height: 844.0,
            status_bar_height: 47.0,
            screen_top: 0.0,
            safe_area: Some(SafeArea {
                left: 0.0,
                top: 47.0,
                right: 390.0,
                bottom: 810.0,
                width: 390.0,
                height: 763.0,
            }),
            sdk_version: "2.25.3".to_string(),
            version: "8.0.30".to_string(),
            language: "zh_CN".to_string(),
            theme: "light".to_string(),
            mode: "default".to_string(),
            enable_debug: true,
            font_size_setting: 16.0,
            font_size_scale_factor: 1.0,
            host: HostAppInfo {
                app_id: "wx0123456789abcdef".to_string(),
            },
            bluetooth_enabled: true,
            location_enabled: false,
            wifi_enabled: true,
            device_orientation: Some(DeviceOrientationValue::Portrait),
            album_authorized: Some(true),
            bluetooth_authorized: None,
            camera_authorized: Some(false),
            location_authorized: Some(true),
            location_reduced_accuracy: Some(false),
            microphone_authorized: Some(false),
            notification_authorized: None,
            notification_alert_authorized: Some(true),
            notification_badge_authorized: Some(false),
            notification_sound_authorized: None,
            phone_calendar_authorized: Some(true),
        }
    }

    #[test]
    fn test_device_info_projection() {
        let snapshot = sample_snapshot();
        let device = device_info(&snapshot);

        // 九个字段逐一等于快照对应字段
        assert_eq!(device.abi, snapshot.abi);
        assert_eq!(device.device_abi, snapshot.device_abi);
        assert_eq!(device.benchmark_level, snapshot.benchmark_level);
        assert_eq!(device.brand, snapshot.brand);
        assert_eq!(device.model, snapshot.model);
        assert_eq!(device.system, snapshot.system);
        assert_eq!(device.platform, snapshot.platform);
        assert_eq!(device.cpu_type, snapshot.cpu_type);
        assert_eq!(device.memory_size, snapshot.memory_size);
    }

    #[test]
    fn test_window_info_projection() {
        let snapshot = sample_snapshot();
        let window = window_info(&snapshot);

        assert_eq!(window.pixel_ratio, snapshot.pixel_ratio);
        assert_eq!(window.screen_width, snapshot.screen_width);
        assert_eq!(window.screen_height, snapshot.screen_height);
        assert_eq!(window.window_width, snapshot.window_width);
        assert_eq!(window.window_height, snapshot.window_height);
        assert_eq!(window.status_bar_height, snapshot.status_bar_height);
        assert_eq!(window.safe_area, snapshot.safe_area);
        assert_eq!(window.screen_top, snapshot.screen_top);
    }

    #[test]
    fn test_app_base_info_projection() {
        let snapshot = sample_snapshot();
        let base = app_base_info(&snapshot);

        assert_eq!(base.sdk_version, snapshot.sdk_version);
        assert_eq!(base.enable_debug, snapshot.enable_debug);
        assert_eq!(base.host, snapshot.host);
        assert_eq!(base.language, snapshot.language);
        assert_eq!(base.version, snapshot.version);
        assert_eq!(base.theme, snapshot.theme);
        assert_eq!(base.mode, snapshot.mode);
        assert_eq!(base.font_size_scale_factor, snapshot.font_size_scale_factor);
        assert_eq!(base.font_size_setting, snapshot.font_size_setting);
    }

    #[test]
    fn test_system_setting_projection() {
        let snapshot = sample_snapshot();
        let setting = system_setting(&snapshot);

        assert_eq!(setting.bluetooth_enabled, snapshot.bluetooth_enabled);
        assert_eq!(setting.location_enabled, snapshot.location_enabled);
        assert_eq!(setting.wifi_enabled, snapshot.wifi_enabled);
        assert_eq!(setting.device_orientation, snapshot.device_orientation);
    }

    #[test]
    fn test_authorize_setting_tri_state_mapping() {
        let snapshot = sample_snapshot();
        let setting = app_authorize_setting(&snapshot);

        // 真 -> authorized，假 -> denied，缺失 -> 缺失
        assert_eq!(setting.album_authorized, Some(AuthorizeStatus::Authorized));
        assert_eq!(setting.camera_authorized, Some(AuthorizeStatus::Denied));
        assert_eq!(setting.bluetooth_authorized, None);
        assert_eq!(setting.notification_authorized, None);
        assert_eq!(
            setting.notification_alert_authorized,
            Some(AuthorizeStatus::Authorized)
        );
        assert_eq!(
            setting.notification_badge_authorized,
            Some(AuthorizeStatus::Denied)
        );
        assert_eq!(setting.notification_sound_authorized, None);
        assert_eq!(
            setting.microphone_authorized,
            Some(AuthorizeStatus::Denied)
        );
        assert_eq!(
            setting.location_authorized,
            Some(AuthorizeStatus::Authorized)
        );
        assert_eq!(
            setting.phone_calendar_authorized,
            Some(AuthorizeStatus::Authorized)
        );

        // 例外字段：布尔原样透传，不做三态映射
        assert_eq!(setting.location_reduced_accuracy, Some(false));
    }

    #[test]
    fn test_reduced_accuracy_absent_stays_absent() {
        let snapshot = SystemInfo {
            location_reduced_accuracy: None,
            ..sample_snapshot()
        };
        let setting = app_authorize_setting(&snapshot);
        assert_eq!(setting.location_reduced_accuracy, None);
    }

    #[test]
    fn test_projection_idempotence() {
        // 同一快照投影两次，结果结构相等
        let snapshot = sample_snapshot();
        assert_eq!(device_info(&snapshot), device_info(&snapshot));
        assert_eq!(window_info(&snapshot), window_info(&snapshot));
        assert_eq!(app_base_info(&snapshot), app_base_info(&snapshot));
        assert_eq!(system_setting(&snapshot), system_setting(&snapshot));
        assert_eq!(
            app_authorize_setting(&snapshot),
            app_authorize_setting(&snapshot)
        );
    }

    #[test]
    fn test_authorize_setting_wire_snapshot() {
        let setting = app_authorize_setting(&sample_snapshot());
        insta::assert_yaml_snapshot!(setting);
    }
}
