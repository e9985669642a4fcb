//! # Capability 模块
//!
//! 宿主能力表。
//!
//! ## 设计说明
//!
//! - 能力协商在适配器构造时执行**一次**，结果表此后不可变，
//!   即使宿主环境随后发生变化也不重新探测
//! - 细粒度查询的路由完全由能力表决定：宿主声明支持则原样转发，
//!   否则由合并快照投影合成，绝不遮蔽原生实现

use serde::{Deserialize, Serialize};

/// 宿主能力表
///
/// 每个标志对应一个宿主可能原生提供的接口；`false` 表示该接口
/// 需要由适配层从旧版合并查询派生。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostCapabilities {
    /// 原生 `getDeviceInfo`
    pub device_info: bool,
    /// 原生 `getWindowInfo`
    pub window_info: bool,
    /// 原生 `getAppBaseInfo`
    pub app_base_info: bool,
    /// 原生 `getSystemSetting`
    pub system_setting: bool,
    /// 原生 `getAppAuthorizeSetting`
    pub app_authorize_setting: bool,
    /// 是否存在可打补丁的画布对象
    pub canvas: bool,
}

impl HostCapabilities {
    /// 新代际宿主：全部细粒度查询原生可用
    pub fn modern() -> Self {
        Self {
            device_info: true,
            window_info: true,
            app_base_info: true,
            system_setting: true,
            app_authorize_setting: true,
            canvas: true,
        }
    }

    /// 旧代际宿主：只有合并查询，全部细粒度查询需要派生
    pub fn legacy() -> Self {
        Self {
            canvas: true,
            ..Self::default()
        }
    }
}
