//! 面板
//!
//! 面板种类是封闭集合：五个主面板常驻，三个弹窗按需创建。
//! 每个主面板拥有自己的区域和内容状态，能把自己画到视图表面上。

use docui_core::ResourceKind;

use crate::backend::Job;

use super::state::{Detail, Navigate, ResourceList};
use super::{Region, Surface};

/// 面板种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    ImageList,
    ContainerList,
    VolumeList,
    Detail,
    Navigate,
    ErrorMessage,
    Confirm,
    State,
}

impl PanelKind {
    pub const ALL: [Self; 8] = [
        Self::ImageList,
        Self::ContainerList,
        Self::VolumeList,
        Self::Detail,
        Self::Navigate,
        Self::ErrorMessage,
        Self::Confirm,
        Self::State,
    ];

    /// 视图名，同时是按键绑定的作用域
    pub fn name(self) -> &'static str {
        match self {
            Self::ImageList => "image list",
            Self::ContainerList => "container list",
            Self::VolumeList => "volume list",
            Self::Detail => "detail",
            Self::Navigate => "navigate",
            Self::ErrorMessage => "error message",
            Self::Confirm => "confirm",
            Self::State => "state",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// 是否参与 Tab 循环
    pub fn is_cyclable(self) -> bool {
        matches!(
            self,
            Self::ImageList | Self::ContainerList | Self::VolumeList | Self::Detail
        )
    }

    /// 内容顶部不可选中的表头行数
    pub fn header_rows(self) -> usize {
        usize::from(self.resource().is_some())
    }

    /// 列表面板展示的资源种类
    pub fn resource(self) -> Option<ResourceKind> {
        match self {
            Self::ImageList => Some(ResourceKind::Image),
            Self::ContainerList => Some(ResourceKind::Container),
            Self::VolumeList => Some(ResourceKind::Volume),
            _ => None,
        }
    }

    pub fn for_resource(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Image => Self::ImageList,
            ResourceKind::Container => Self::ContainerList,
            ResourceKind::Volume => Self::VolumeList,
        }
    }

    /// 面板的显示标题
    pub fn title(self) -> &'static str {
        match self {
            Self::ImageList => "Images",
            Self::ContainerList => "Containers",
            Self::VolumeList => "Volumes",
            Self::Detail => "Detail",
            Self::Navigate => "",
            Self::ErrorMessage => "Error",
            Self::Confirm => "Confirm",
            Self::State => "State",
        }
    }
}

/// 主面板
#[derive(Debug, Clone)]
pub enum Panel {
    ImageList(ResourceList),
    ContainerList(ResourceList),
    VolumeList(ResourceList),
    Detail(Detail),
    Navigate(Navigate),
}

impl Panel {
    /// 按资源种类创建列表面板
    pub fn list(kind: ResourceKind, region: Region) -> Self {
        let list = ResourceList::new(kind, region);
        match kind {
            ResourceKind::Image => Self::ImageList(list),
            ResourceKind::Container => Self::ContainerList(list),
            ResourceKind::Volume => Self::VolumeList(list),
        }
    }

    pub fn kind(&self) -> PanelKind {
        match self {
            Self::ImageList(_) => PanelKind::ImageList,
            Self::ContainerList(_) => PanelKind::ContainerList,
            Self::VolumeList(_) => PanelKind::VolumeList,
            Self::Detail(_) => PanelKind::Detail,
            Self::Navigate(_) => PanelKind::Navigate,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn region(&self) -> Region {
        match self {
            Self::ImageList(list) | Self::ContainerList(list) | Self::VolumeList(list) => {
                list.region
            }
            Self::Detail(detail) => detail.region,
            Self::Navigate(navigate) => navigate.region,
        }
    }

    pub fn set_region(&mut self, region: Region) {
        match self {
            Self::ImageList(list) | Self::ContainerList(list) | Self::VolumeList(list) => {
                list.region = region;
            }
            Self::Detail(detail) => detail.region = region,
            Self::Navigate(navigate) => navigate.region = region,
        }
    }

    pub fn as_list(&self) -> Option<&ResourceList> {
        match self {
            Self::ImageList(list) | Self::ContainerList(list) | Self::VolumeList(list) => {
                Some(list)
            }
            Self::Detail(_) | Self::Navigate(_) => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ResourceList> {
        match self {
            Self::ImageList(list) | Self::ContainerList(list) | Self::VolumeList(list) => {
                Some(list)
            }
            Self::Detail(_) | Self::Navigate(_) => None,
        }
    }

    fn render_lines(&self) -> Vec<String> {
        match self {
            Self::ImageList(list) | Self::ContainerList(list) | Self::VolumeList(list) => {
                list.render_lines()
            }
            Self::Detail(detail) => detail.render_lines(),
            Self::Navigate(navigate) => navigate.render_lines(),
        }
    }

    /// 创建或更新面板的视图
    ///
    /// 首次创建时设置标题与高亮，并把列表光标放到表头下面；
    /// 之后每次只替换内容，并把光标拉回有效内容范围内。
    pub fn set_view<S: Surface>(&self, surface: &mut S) {
        let kind = self.kind();
        let slot = surface.set_view(kind.name(), self.region());
        let created = slot.is_created();
        let view = slot.into_view();

        if created {
            view.title = kind.title().to_string();
            view.highlight = kind.is_cyclable();
            // 视图太小放不下时保持在第 0 行
            let _ = view.set_cursor(0, kind.header_rows());
        }

        view.set_lines(self.render_lines());
        clamp_viewport(view, kind.header_rows());
    }

    /// 重新绘制，并返回需要向后台请求的数据
    pub fn refresh<S: Surface>(&self, surface: &mut S) -> Option<Job> {
        self.set_view(surface);
        self.as_list().map(|list| Job::List(list.kind()))
    }
}

/// 保证光标落在表头之下、最后一个非空行之上，并且位于可写区域内
fn clamp_viewport(view: &mut super::View, header_rows: usize) {
    let (width, height) = view.size();
    if height == 0 {
        return;
    }

    let last = view.last_content_row().unwrap_or(0).max(header_rows);
    let target = view.absolute_row().clamp(header_rows, last);
    let cursor = view.cursor();
    if target == view.absolute_row() && cursor.x < width && cursor.y < height {
        return;
    }

    // 视图缩小后光标可能在可写区域之外，此时连同原点一起重新放置
    let origin = view.origin();
    let (origin_y, cursor_y) = if target >= origin.y && target - origin.y < height {
        (origin.y, target - origin.y)
    } else {
        let origin_y = target.saturating_sub(height - 1);
        (origin_y, target - origin_y)
    };
    view.set_origin(origin.x, origin_y);
    let _ = view.set_cursor(cursor.x.min(width.saturating_sub(1)), cursor_y);
}
