//! 详情面板状态

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::model::Region;

/// 详情面板：展示最近一次 inspect 的 JSON
#[derive(Debug, Clone, Default)]
pub struct Detail {
    pub region: Region,
    lines: Vec<String>,
}

impl Detail {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            lines: Vec::new(),
        }
    }

    /// 以 4 空格缩进展示 JSON
    pub fn show(&mut self, value: &serde_json::Value) {
        self.lines = pretty_lines(value);
    }

    pub fn render_lines(&self) -> Vec<String> {
        self.lines.clone()
    }
}

fn pretty_lines(value: &serde_json::Value) -> Vec<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    if value.serialize(&mut serializer).is_err() {
        return vec![value.to_string()];
    }
    String::from_utf8_lossy(&buf)
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_show_uses_four_space_indent() {
        let mut detail = Detail::default();
        detail.show(&json!({ "Name": "pgdata", "Labels": { "env": "dev" } }));

        assert_eq!(
            detail.render_lines(),
            vec![
                "{",
                "    \"Labels\": {",
                "        \"env\": \"dev\"",
                "    },",
                "    \"Name\": \"pgdata\"",
                "}",
            ]
        );
    }
}
