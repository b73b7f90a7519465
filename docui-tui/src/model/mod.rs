//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和少量自洽的查询方法，
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（循环下标 + 弹窗返回目标）
//!         mod geometry;       // 网格与弹窗区域
//!         mod overlay;        // 弹窗状态
//!         mod panel;          // 面板种类与主面板
//!         mod registry;       // 面板注册表
//!         mod surface;        // 视图表面
//!
//! ```text
//!         pub mod state;      // 面板内容状态
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、视图表面（Surface）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     面板不直接画终端，而是维护具名视图：
//!
//!         View {
//!             region,     // 屏幕区域（含边框）
//!             lines,      // 文本内容
//!             cursor,     // 光标，相对可见区域
//!             origin,     // 滚动原点，内容第几行显示在最上面
//!         }
//!
//!     光标只能落在可写区域内（宽高各减去边框），越界的 set_cursor 返回错误；
//!     光标移动逻辑依赖这个错误来决定改为滚动原点。
//!
//!     按键绑定同样登记在表面上，作用域是某个视图或全局。
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、面板（Panel / PanelKind）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     八种面板：
//!         - image list / container list / volume list / detail    可循环
//!         - navigate                                               常驻，不可循环
//!         - error message / confirm / state                        弹窗
//!
//!     主面板注册到 PanelRegistry，可循环面板按注册顺序组成循环序列。
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、焦点与弹窗（FocusState / OverlayState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     FocusState {
//!         active,         // 循环序列下标
//!         next_panel,     // 弹窗关闭后回到的面板
//!     }
//!
//!     每次打开弹窗都会把 next_panel 设为调用方指定的返回目标。
//!     每种弹窗最多同时存在一个，重复打开只替换内容。
//! ```
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod geometry;
mod overlay;
mod panel;
mod registry;
mod surface;

pub mod state;

pub use app::App;
pub use focus::FocusState;
pub use geometry::{overlay_region, Grid, Region, NAVIGATE_HEIGHT};
pub use overlay::{Overlay, OverlayKind, OverlayState};
pub use panel::{Panel, PanelKind};
pub use registry::PanelRegistry;
pub use surface::{Point, Surface, SurfaceError, View, ViewSlot, ViewSurface};
