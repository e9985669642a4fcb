//! # Pal 模块
//!
//! 适配器门面：把宿主的版本相关 API 面归一成稳定接口。
//!
//! ## 执行模型
//!
//! 全部单线程、事件驱动，没有并发：宿主按序投递事件，
//! 每个处理函数运行到完成，读写共享状态无需任何同步原语。
//!
//! ```text
//! 构造（一次性）                     运行期（每次调用/每个事件）
//! ├── 能力协商，结果表不可变          ├── 细粒度查询：原生转发或快照投影
//! ├── 平台检测                       ├── orientation()：实时分类 + 记录的横屏方向
//! ├── 方向事件订阅（Android 跳过）    ├── handle_orientation_change()：更新方向状态
//! └── 渲染补丁（平台 + 版本门控）     └── handle_accelerometer_sample()：重映射后投递
//! ```

use tracing::{debug, info};

use crate::accelerometer::{AccelerometerSample, AccelerometerStartParam, SubscriberSlot};
use crate::capability::HostCapabilities;
use crate::config::PalConfig;
use crate::derive;
use crate::error::PalResult;
use crate::host::{MiniGameHost, Platform};
use crate::info::{
    AppAuthorizeSetting, AppBaseInfo, BatteryInfo, DeviceInfo, SystemSetting, WindowInfo,
};
use crate::orientation::{Orientation, OrientationChangeEvent, OrientationTracker};
use crate::system_info::{SafeArea, SystemInfo};
use crate::version;

/// 该版本起宿主的 `useProgram(null)` 行为已修复，不再需要补丁
const USE_PROGRAM_FIXED_VERSION: &str = "2.16.0";

/// 小游戏宿主适配器
///
/// 持有宿主句柄与全部适配状态：不可变能力表、方向跟踪器、
/// 加速度计订阅槽位。
pub struct MiniGamePal<H: MiniGameHost> {
    host: H,
    caps: HostCapabilities,
    platform: Platform,
    is_dev_tool: bool,
    track_orientation: bool,
    tracker: OrientationTracker,
    subscriber: SubscriberSlot,
}

impl<H: MiniGameHost> MiniGamePal<H> {
    /// 以默认配置创建适配器
    pub fn new(host: H) -> PalResult<Self> {
        Self::with_config(host, PalConfig::default())
    }

    /// 创建适配器并执行全部一次性初始化
    ///
    /// 依次完成能力协商、平台检测、方向事件订阅和渲染补丁。
    /// 能力表只在此处读取一次，此后不再重新探测。
    pub fn with_config(mut host: H, config: PalConfig) -> PalResult<Self> {
        let caps = host.capabilities();
        debug!(?caps, "宿主能力协商完成");

        let device = if caps.device_info {
            host.device_info()?
        } else {
            derive::device_info(&host.system_info()?)
        };
        let platform = Platform::from_identifier(&device.platform);
        let is_dev_tool = matches!(platform, Platform::DevTools);

        // 方向事件在 Android 宿主上不可靠，跳过订阅后
        // 方向状态将永远停留在正向横屏种子值
        let track_orientation = config.orientation_events && !platform.is_android();
        if track_orientation {
            host.subscribe_device_orientation();
        } else {
            info!(platform = ?platform, "跳过设备方向事件订阅");
        }

        if config.render_workaround && caps.canvas && platform == Platform::Windows {
            let base = if caps.app_base_info {
                host.app_base_info()?
            } else {
                derive::app_base_info(&host.system_info()?)
            };
            if version::is_older_than(&base.sdk_version, USE_PROGRAM_FIXED_VERSION) {
                info!(sdk = %base.sdk_version, "应用 useProgram 渲染兼容补丁");
                host.patch_canvas_use_program();
            }
        }

        Ok(Self {
            host,
            caps,
            platform,
            is_dev_tool,
            track_orientation,
            tracker: OrientationTracker::new(),
            subscriber: SubscriberSlot::new(),
        })
    }

    /// 宿主句柄（只读）
    pub fn host(&self) -> &H {
        &self.host
    }

    /// 宿主句柄（可变，供宿主胶水层转发透传接口）
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// 构造时协商得到的能力表
    pub fn capabilities(&self) -> HostCapabilities {
        self.caps
    }

    /// 检测到的宿主平台
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// 是否运行在开发者工具模拟器中
    pub fn is_dev_tool(&self) -> bool {
        self.is_dev_tool
    }

    // ── 信息查询 ──

    /// 旧版合并查询透传
    pub fn system_info(&self) -> PalResult<SystemInfo> {
        self.host.system_info()
    }

    /// 设备信息
    pub fn device_info(&self) -> PalResult<DeviceInfo> {
        if self.caps.device_info {
            self.host.device_info()
        } else {
            Ok(derive::device_info(&self.host.system_info()?))
        }
    }

    /// 窗口信息
    pub fn window_info(&self) -> PalResult<WindowInfo> {
        if self.caps.window_info {
            self.host.window_info()
        } else {
            Ok(derive::window_info(&self.host.system_info()?))
        }
    }

    /// 应用基础信息
    pub fn app_base_info(&self) -> PalResult<AppBaseInfo> {
        if self.caps.app_base_info {
            self.host.app_base_info()
        } else {
            Ok(derive::app_base_info(&self.host.system_info()?))
        }
    }

    /// 系统设置
    pub fn system_setting(&self) -> PalResult<SystemSetting> {
        if self.caps.system_setting {
            self.host.system_setting()
        } else {
            Ok(derive::system_setting(&self.host.system_info()?))
        }
    }

    /// 应用授权设置
    pub fn app_authorize_setting(&self) -> PalResult<AppAuthorizeSetting> {
        if self.caps.app_authorize_setting {
            self.host.app_authorize_setting()
        } else {
            Ok(derive::app_authorize_setting(&self.host.system_info()?))
        }
    }

    /// 电量信息透传
    pub fn battery_info(&self) -> PalResult<BatteryInfo> {
        self.host.battery_info()
    }

    /// 安全区域
    ///
    /// 宿主未报告安全区域时，以实时屏幕几何合成整屏矩形，
    /// 保证调用方始终拿到可用值。
    pub fn safe_area(&self) -> PalResult<SafeArea> {
        let window = self.window_info()?;
        Ok(window
            .safe_area
            .unwrap_or_else(|| SafeArea::full_screen(window.screen_width, window.screen_height)))
    }

    // ── 方向 ──

    /// 当前是否横屏
    ///
    /// 基于实时快照分类：优先方向提示，缺失时比较屏幕宽高。
    pub fn is_landscape(&self) -> PalResult<bool> {
        let snapshot = self.host.system_info()?;
        Ok(match snapshot.device_orientation {
            Some(value) => value.is_landscape(),
            None => snapshot.screen_width > snapshot.screen_height,
        })
    }

    /// 当前屏幕方向
    ///
    /// 竖屏分类返回 [`Orientation::Portrait`]；
    /// 横屏返回最近一次记录的横屏方向。
    pub fn orientation(&self) -> PalResult<Orientation> {
        Ok(self.tracker.orientation(self.is_landscape()?))
    }

    /// 处理宿主投递的方向变化事件
    ///
    /// 未订阅方向事件时（Android 或配置关闭）事件被丢弃。
    pub fn handle_orientation_change(&mut self, event: OrientationChangeEvent) {
        if !self.track_orientation {
            return;
        }
        self.tracker.note_event(&event);
    }

    // ── 加速度计 ──

    /// 注册归一化采样回调
    ///
    /// 替换语义：先注销已有回调再登记新回调，不做多订阅者扇出。
    /// 注册本身不启动采样，启动由 [`start_accelerometer`](Self::start_accelerometer) 负责。
    pub fn on_accelerometer_change<F>(&mut self, callback: F)
    where
        F: FnMut(AccelerometerSample) + 'static,
    {
        self.off_accelerometer_change();
        self.subscriber.set(Box::new(callback));
    }

    /// 注销当前回调，返回之前是否存在订阅者
    ///
    /// 无有效回调时为 no-op。
    pub fn off_accelerometer_change(&mut self) -> bool {
        if self.subscriber.clear() {
            self.host.unsubscribe_accelerometer();
            true
        } else {
            false
        }
    }

    /// 启动加速度计
    ///
    /// 若持有回调，先向宿主重新打开采样投递再下发启动，
    /// 确保采样永远不会先于变换回调到达。频率档位原样透传。
    pub fn start_accelerometer(&mut self, param: &AccelerometerStartParam) -> PalResult<()> {
        if self.subscriber.is_active() {
            self.host.subscribe_accelerometer();
        }
        self.host.start_accelerometer(param)
    }

    /// 停止加速度计透传
    pub fn stop_accelerometer(&mut self) -> PalResult<()> {
        self.host.stop_accelerometer()
    }

    /// 处理宿主投递的原始加速度计采样
    ///
    /// 横屏时按记录的横屏方向重映射坐标轴，竖屏原样投递；
    /// 始终以新值投递，原始采样不被保留。
    pub fn handle_accelerometer_sample(&mut self, raw: AccelerometerSample) -> PalResult<()> {
        if !self.subscriber.is_active() {
            return Ok(());
        }
        let sample = if self.is_landscape()? {
            raw.rotated(self.tracker.direction())
        } else {
            raw
        };
        self.subscriber.deliver(sample);
        Ok(())
    }
}
