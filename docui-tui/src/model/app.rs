//! 应用主状态结构

use crate::backend::Job;

use super::{FocusState, OverlayState, PanelKind, PanelRegistry, Surface};

/// 应用主状态
///
/// 视图表面通过泛型注入：运行时是终端前的 `ViewSurface`，测试里也是它，
/// 但不需要真实终端。
pub struct App<S: Surface> {
    /// 是否应该退出
    pub should_quit: bool,

    /// 视图与按键绑定
    pub surface: S,

    /// 主面板
    pub registry: PanelRegistry,

    /// 焦点
    pub focus: FocusState,

    /// 打开中的弹窗
    pub overlays: OverlayState,

    /// 等待派发给后台的任务
    jobs: Vec<Job>,
}

impl<S: Surface> App<S> {
    /// 创建新的应用实例，面板由 `update::init` 注册
    pub fn new(surface: S) -> Self {
        Self {
            should_quit: false,
            surface,
            registry: PanelRegistry::new(),
            focus: FocusState::default(),
            overlays: OverlayState::default(),
            jobs: Vec::new(),
        }
    }

    /// 排队一个后台任务
    pub fn queue(&mut self, job: Job) {
        log::debug!("queued {job:?}");
        self.jobs.push(job);
    }

    /// 取走所有排队的任务
    pub fn take_jobs(&mut self) -> Vec<Job> {
        std::mem::take(&mut self.jobs)
    }

    pub fn pending_jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// 循环序列中当前的面板
    pub fn active_panel(&self) -> Option<PanelKind> {
        self.registry.cycle().get(self.focus.active).copied()
    }

    /// 当前视图对应的面板种类
    pub fn current_kind(&self) -> Option<PanelKind> {
        self.surface.current_view().and_then(PanelKind::from_name)
    }
}
