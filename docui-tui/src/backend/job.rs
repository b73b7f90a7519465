//! 后台任务描述

use std::fmt;

use docui_core::ResourceKind;

use crate::model::PanelKind;

/// 需要确认或显示进度的修改操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Remove {
        kind: ResourceKind,
        id: String,
        label: String,
    },
    Start {
        id: String,
        label: String,
    },
    Stop {
        id: String,
        label: String,
    },
}

impl Operation {
    /// 进行中时状态弹窗的文字
    pub fn progress_message(&self) -> String {
        match self {
            Self::Remove { kind, label, .. } => format!("removing {kind} {label}..."),
            Self::Start { label, .. } => format!("starting container {label}..."),
            Self::Stop { label, .. } => format!("stopping container {label}..."),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remove { kind, label, .. } => write!(f, "remove {kind} {label}"),
            Self::Start { label, .. } => write!(f, "start container {label}"),
            Self::Stop { label, .. } => write!(f, "stop container {label}"),
        }
    }
}

/// 交给 `Worker` 执行的后台任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// 重新加载某种资源的列表
    List(ResourceKind),
    /// inspect 单个资源
    Inspect {
        kind: ResourceKind,
        id: String,
        origin: PanelKind,
    },
    /// 执行修改操作
    Run {
        operation: Operation,
        origin: PanelKind,
    },
}
