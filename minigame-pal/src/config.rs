//! # Config 模块
//!
//! 适配层配置。
//!
//! ## 配置优先级
//!
//! 1. 调用方显式传入（最高）
//! 2. 配置文件反序列化
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};

/// 适配层配置
///
/// 所有开关只影响构造时的一次性决策，运行期间不再读取。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalConfig {
    /// 是否允许应用渲染兼容补丁
    ///
    /// 补丁本身还受平台与 SDK 版本门控，见 [`crate::pal`]。
    #[serde(default = "default_render_workaround")]
    pub render_workaround: bool,

    /// 是否订阅设备方向事件
    ///
    /// Android 宿主的方向事件不可靠，无论此开关如何都会跳过订阅。
    #[serde(default = "default_orientation_events")]
    pub orientation_events: bool,
}

impl Default for PalConfig {
    fn default() -> Self {
        Self {
            render_workaround: default_render_workaround(),
            orientation_events: default_orientation_events(),
        }
    }
}

fn default_render_workaround() -> bool {
    true
}

fn default_orientation_events() -> bool {
    true
}
