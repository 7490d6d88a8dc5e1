//! Text renderers for redwood trees.
//!
//! Every renderer consumes the pre-order traversal, so output order is
//! always: node, left subtree, right subtree.
//!
//! - `plain`: the classic `level: N value: V color: C` diagnostic lines
//! - `json`: a pretty-printed array of visits
//! - `outline`: two spaces of indentation per level

use anyhow::{Context, Result};
use redwood_tree::{RbTree, TreeReport, Visit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output format for a rendered tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Plain,
    Json,
    Outline,
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFormat::Plain => write!(f, "plain"),
            RenderFormat::Json => write!(f, "json"),
            RenderFormat::Outline => write!(f, "outline"),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(RenderFormat::Plain),
            "json" => Ok(RenderFormat::Json),
            "outline" => Ok(RenderFormat::Outline),
            other => Err(format!(
                "unknown format {other:?} (expected plain, json or outline)"
            )),
        }
    }
}

/// Render `tree` in `format`. Every line, including the last, ends in `\n`.
pub fn render(tree: &RbTree, format: RenderFormat) -> Result<String> {
    render_visits(tree.traverse(), format)
}

/// Render an already collected pre-order traversal.
pub fn render_visits<I>(visits: I, format: RenderFormat) -> Result<String>
where
    I: IntoIterator<Item = Visit>,
{
    let mut out = String::new();
    match format {
        RenderFormat::Plain => {
            for visit in visits {
                out.push_str(&format!(
                    "level: {} value: {} color: {}\n",
                    visit.depth, visit.value, visit.color
                ));
            }
        }
        RenderFormat::Outline => {
            for visit in visits {
                out.push_str(&format!(
                    "{:indent$}{} ({})\n",
                    "",
                    visit.value,
                    visit.color,
                    indent = visit.depth * 2
                ));
            }
        }
        RenderFormat::Json => {
            let visits: Vec<Visit> = visits.into_iter().collect();
            out = serde_json::to_string_pretty(&visits).context("serialize traversal")?;
            out.push('\n');
        }
    }
    Ok(out)
}

/// Render a validation report. `outline` shares the plain layout.
pub fn render_report(report: &TreeReport, format: RenderFormat) -> Result<String> {
    match format {
        RenderFormat::Json => {
            let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
            out.push('\n');
            Ok(out)
        }
        RenderFormat::Plain | RenderFormat::Outline => Ok(format!(
            "valid: yes\nnodes: {}\nheight: {}\nblack height: {}\nin order: {}\n",
            report.len,
            report.height,
            report.black_height,
            report
                .in_order
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        )),
    }
}

/// Write already rendered output to `path`.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("write {path:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use redwood_tree::validate;

    fn classic() -> RbTree {
        let mut tree = RbTree::new();
        tree.insert_all([11, 14, 2, 1, 7, 5, 8, 4]).unwrap();
        tree
    }

    #[test]
    fn snapshot_plain() {
        let out = render(&classic(), RenderFormat::Plain).unwrap();
        insta::assert_snapshot!(out, @r"
        level: 0 value: 7 color: black
        level: 1 value: 2 color: red
        level: 2 value: 1 color: black
        level: 2 value: 5 color: black
        level: 3 value: 4 color: red
        level: 1 value: 11 color: red
        level: 2 value: 8 color: black
        level: 2 value: 14 color: black
        ");
    }

    #[test]
    fn snapshot_outline() {
        let out = render(&classic(), RenderFormat::Outline).unwrap();
        insta::assert_snapshot!(out, @r"
        7 (black)
          2 (red)
            1 (black)
            5 (black)
              4 (red)
          11 (red)
            8 (black)
            14 (black)
        ");
    }

    #[test]
    fn json_lists_visits_in_pre_order() {
        let out = render(&classic(), RenderFormat::Json).unwrap();
        let visits: Vec<Visit> = serde_json::from_str(&out).unwrap();
        let values: Vec<i32> = visits.iter().map(|v| v.value).collect();
        assert_eq!(values, vec![7, 2, 1, 5, 4, 11, 8, 14]);

        let raw: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(raw[0]["color"], "black");
        assert_eq!(raw[4]["depth"], 3);
    }

    #[test]
    fn empty_tree_renders() {
        let tree = RbTree::new();
        assert_eq!(render(&tree, RenderFormat::Plain).unwrap(), "");
        assert_eq!(render(&tree, RenderFormat::Outline).unwrap(), "");
        assert_eq!(render(&tree, RenderFormat::Json).unwrap(), "[]\n");
    }

    #[test]
    fn report_plain() {
        let report = validate(&classic()).unwrap();
        let out = render_report(&report, RenderFormat::Plain).unwrap();
        assert_eq!(
            out,
            "valid: yes\nnodes: 8\nheight: 4\nblack height: 2\nin order: 1 2 4 5 7 8 11 14\n"
        );
    }

    #[test]
    fn report_json() {
        let report = validate(&classic()).unwrap();
        let out = render_report(&report, RenderFormat::Json).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(raw["len"], 8);
        assert_eq!(raw["black_height"], 2);
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<RenderFormat>(), Ok(RenderFormat::Json));
        assert_eq!("outline".parse::<RenderFormat>(), Ok(RenderFormat::Outline));
        assert!("xml".parse::<RenderFormat>().is_err());
        assert_eq!(RenderFormat::Plain.to_string(), "plain");
    }

    #[test]
    fn write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.txt");
        let rendered = render(&classic(), RenderFormat::Plain).unwrap();
        write_output(&path, &rendered).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(text.starts_with("level: 0 value: 7 color: black\n"));
    }

    #[test]
    fn write_output_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        let report = validate(&classic()).unwrap();
        let rendered = render_report(&report, RenderFormat::Plain).unwrap();
        let err = write_output(&path, &rendered).unwrap_err();
        assert!(err.to_string().starts_with("write "));
    }
}
