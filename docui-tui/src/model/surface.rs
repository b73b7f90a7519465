//! 视图表面
//!
//! 面板与弹窗不直接操作终端，而是通过 [`Surface`] 管理具名视图：
//! 每个视图有一块区域、一组文本行、一个光标和一个滚动原点。
//! 按键绑定也登记在表面上，作用域是某个视图或全局。
//!
//! [`ViewSurface`] 是内存实现，渲染层每帧把它画到终端上，测试直接检查它的状态。

use std::collections::HashMap;

use thiserror::Error;

use crate::event::KeyBinding;
use crate::message::AppMessage;

use super::Region;

/// 视图表面错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("unknown view `{0}`")]
    UnknownView(String),

    #[error("point ({x}, {y}) is outside the view")]
    InvalidPoint { x: usize, y: usize },
}

/// 视图内的坐标（列, 行）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// 具名视图
#[derive(Debug, Clone)]
pub struct View {
    name: String,
    pub region: Region,
    pub title: String,
    /// 长行自动换行（弹窗使用）
    pub wrap: bool,
    /// 作为当前视图时高亮光标所在行
    pub highlight: bool,
    lines: Vec<String>,
    cursor: Point,
    origin: Point,
}

impl View {
    pub fn new(name: impl Into<String>, region: Region) -> Self {
        Self {
            name: name.into(),
            region,
            title: String::new(),
            wrap: false,
            highlight: false,
            lines: Vec::new(),
            cursor: Point::default(),
            origin: Point::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 可写尺寸 (宽, 高)
    pub fn size(&self) -> (usize, usize) {
        self.region.inner_size()
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// 光标相对于内容第一行的绝对行号
    pub fn absolute_row(&self) -> usize {
        self.origin.y + self.cursor.y
    }

    /// 移动光标；超出可写区域时返回错误且不做任何修改
    pub fn set_cursor(&mut self, x: usize, y: usize) -> Result<(), SurfaceError> {
        let (width, height) = self.size();
        if x >= width || y >= height {
            return Err(SurfaceError::InvalidPoint { x, y });
        }
        self.cursor = Point::new(x, y);
        Ok(())
    }

    pub fn set_origin(&mut self, x: usize, y: usize) {
        self.origin = Point::new(x, y);
    }

    /// 读取可见区域第 `y` 行（相对原点），去掉行尾空白
    pub fn line(&self, y: usize) -> Option<&str> {
        self.lines
            .get(self.origin.y + y)
            .map(|line| line.trim_end())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 最后一个非空行的绝对行号
    pub fn last_content_row(&self) -> Option<usize> {
        self.lines.iter().rposition(|line| !line.trim().is_empty())
    }

    /// 替换全部内容，光标和原点保持不变
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    /// 追加文本，按换行拆分
    pub fn write(&mut self, text: &str) {
        self.lines.extend(text.lines().map(str::to_string));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// `set_view` 的结果：区分新建与已存在，调用方据此决定是否做一次性初始化
#[derive(Debug)]
pub enum ViewSlot<'a> {
    Created(&'a mut View),
    Existing(&'a mut View),
}

impl<'a> ViewSlot<'a> {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn into_view(self) -> &'a mut View {
        match self {
            Self::Created(view) | Self::Existing(view) => view,
        }
    }
}

/// 视图表面
///
/// 视图按叠放顺序保存，后面的画在上面。`view` 为 `None` 的按键绑定是全局绑定。
pub trait Surface {
    /// 屏幕尺寸 (宽, 高)
    fn size(&self) -> (u16, u16);

    fn resize(&mut self, width: u16, height: u16);

    /// 按名字取得视图，不存在时创建；已存在的视图会被移到 `region`
    fn set_view(&mut self, name: &str, region: Region) -> ViewSlot<'_>;

    fn view(&self, name: &str) -> Option<&View>;

    fn view_mut(&mut self, name: &str) -> Option<&mut View>;

    /// 删除视图；视图不存在是调用方的契约错误
    fn delete_view(&mut self, name: &str) -> Result<(), SurfaceError>;

    fn set_current_view(&mut self, name: &str) -> Result<(), SurfaceError>;

    fn current_view(&self) -> Option<&str>;

    fn set_view_on_top(&mut self, name: &str) -> Result<(), SurfaceError>;

    /// 从底到顶遍历所有视图
    fn views(&self) -> Box<dyn Iterator<Item = &View> + '_>;

    fn set_keybinding(&mut self, view: Option<&str>, key: KeyBinding, message: AppMessage);

    /// 删除某个视图的全部按键绑定
    fn delete_keybindings(&mut self, view: &str);

    fn keybinding(&self, view: Option<&str>, key: &KeyBinding) -> Option<AppMessage>;

    fn has_keybindings(&self, view: &str) -> bool;
}

/// 内存视图表面
#[derive(Debug, Default)]
pub struct ViewSurface {
    width: u16,
    height: u16,
    /// 叠放顺序，最后一个在最上层
    views: Vec<View>,
    current: Option<String>,
    global_bindings: HashMap<KeyBinding, AppMessage>,
    view_bindings: HashMap<String, HashMap<KeyBinding, AppMessage>>,
}

impl ViewSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.views.iter().position(|view| view.name == name)
    }

    fn require(&self, name: &str) -> Result<usize, SurfaceError> {
        self.position(name)
            .ok_or_else(|| SurfaceError::UnknownView(name.to_string()))
    }
}

impl Surface for ViewSurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    fn set_view(&mut self, name: &str, region: Region) -> ViewSlot<'_> {
        match self.position(name) {
            Some(index) => {
                let view = &mut self.views[index];
                view.region = region;
                ViewSlot::Existing(view)
            }
            None => {
                self.views.push(View::new(name, region));
                let index = self.views.len() - 1;
                ViewSlot::Created(&mut self.views[index])
            }
        }
    }

    fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|view| view.name == name)
    }

    fn view_mut(&mut self, name: &str) -> Option<&mut View> {
        self.views.iter_mut().find(|view| view.name == name)
    }

    fn delete_view(&mut self, name: &str) -> Result<(), SurfaceError> {
        let index = self.require(name)?;
        self.views.remove(index);
        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        Ok(())
    }

    fn set_current_view(&mut self, name: &str) -> Result<(), SurfaceError> {
        self.require(name)?;
        self.current = Some(name.to_string());
        Ok(())
    }

    fn current_view(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn set_view_on_top(&mut self, name: &str) -> Result<(), SurfaceError> {
        let index = self.require(name)?;
        let view = self.views.remove(index);
        self.views.push(view);
        Ok(())
    }

    fn views(&self) -> Box<dyn Iterator<Item = &View> + '_> {
        Box::new(self.views.iter())
    }

    fn set_keybinding(&mut self, view: Option<&str>, key: KeyBinding, message: AppMessage) {
        match view {
            Some(name) => {
                self.view_bindings
                    .entry(name.to_string())
                    .or_default()
                    .insert(key, message);
            }
            None => {
                self.global_bindings.insert(key, message);
            }
        }
    }

    fn delete_keybindings(&mut self, view: &str) {
        self.view_bindings.remove(view);
    }

    fn keybinding(&self, view: Option<&str>, key: &KeyBinding) -> Option<AppMessage> {
        match view {
            Some(name) => self.view_bindings.get(name)?.get(key).cloned(),
            None => self.global_bindings.get(key).cloned(),
        }
    }

    fn has_keybindings(&self, view: &str) -> bool {
        self.view_bindings
            .get(view)
            .is_some_and(|bindings| !bindings.is_empty())
    }
}
