//! 资源列表面板状态

use chrono::{DateTime, Utc};
use docui_core::{
    ContainerSummary, ImageSummary, Listing, ResourceKind, VolumeSummary,
};
use unicode_width::UnicodeWidthStr;

use crate::model::Region;

/// 列之间的间隔
const COLUMN_GAP: &str = "  ";

/// 列表中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// 后台操作使用的引用（镜像/容器 ID，卷名）
    pub id: String,
    /// 给用户看的名字
    pub label: String,
    pub cells: Vec<String>,
}

/// 资源列表状态
#[derive(Debug, Clone)]
pub struct ResourceList {
    pub region: Region,
    kind: ResourceKind,
    rows: Vec<ListRow>,
}

impl ResourceList {
    pub fn new(kind: ResourceKind, region: Region) -> Self {
        Self {
            region,
            kind,
            rows: Vec::new(),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// 表头
    pub fn columns(&self) -> &'static [&'static str] {
        match self.kind {
            ResourceKind::Image => &["ID", "REPOSITORY", "TAG", "CREATED", "SIZE"],
            ResourceKind::Container => &["ID", "NAME", "IMAGE", "STATE", "STATUS"],
            ResourceKind::Volume => &["NAME", "DRIVER", "MOUNTPOINT", "CREATED"],
        }
    }

    /// 用后台返回的列表替换内容；种类不符的列表被忽略
    pub fn set_listing(&mut self, listing: &Listing) {
        if listing.kind() != self.kind {
            log::warn!(
                "ignoring {} listing delivered to the {} list",
                listing.kind(),
                self.kind
            );
            return;
        }

        self.rows = match listing {
            Listing::Images(images) => images.iter().map(image_row).collect(),
            Listing::Containers(containers) => containers.iter().map(container_row).collect(),
            Listing::Volumes(volumes) => volumes.iter().map(volume_row).collect(),
        };
    }

    /// 视图中第 `row` 行（绝对行号，含表头）对应的资源
    pub fn selected(&self, row: usize) -> Option<&ListRow> {
        self.rows.get(row.checked_sub(1)?)
    }

    /// 表头加对齐后的数据行
    pub fn render_lines(&self) -> Vec<String> {
        let columns = self.columns();
        let mut widths: Vec<usize> = columns.iter().map(|c| c.width()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.width());
            }
        }

        let header = columns.iter().map(|c| (*c).to_string()).collect::<Vec<_>>();
        std::iter::once(&header)
            .chain(self.rows.iter().map(|row| &row.cells))
            .map(|cells| align(cells, &widths))
            .collect()
    }
}

fn align(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    line.trim_end().to_string()
}

fn image_row(image: &ImageSummary) -> ListRow {
    let (repository, tag) = image.repository_and_tag();
    ListRow {
        id: image.id.clone(),
        label: if repository == "<none>" {
            image.short_id().to_string()
        } else {
            format!("{repository}:{tag}")
        },
        cells: vec![
            image.short_id().to_string(),
            repository.to_string(),
            tag.to_string(),
            format_time(&image.created),
            format_size(image.size),
        ],
    }
}

fn container_row(container: &ContainerSummary) -> ListRow {
    ListRow {
        id: container.id.clone(),
        label: container.display_name().to_string(),
        cells: vec![
            container.short_id().to_string(),
            container.display_name().to_string(),
            container.image.clone(),
            container.state.as_str().to_string(),
            container.status.clone(),
        ],
    }
}

fn volume_row(volume: &VolumeSummary) -> ListRow {
    ListRow {
        id: volume.name.clone(),
        label: volume.name.clone(),
        cells: vec![
            volume.name.clone(),
            volume.driver.clone(),
            volume.mountpoint.clone(),
            volume
                .created
                .as_ref()
                .map_or_else(|| "-".to_string(), format_time),
        ],
    }
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

/// 十进制单位的大小，与引擎命令行的显示一致
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes}B")
    } else {
        format!("{value:.1}{}", UNITS[unit])
    }
}
