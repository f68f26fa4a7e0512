//! Declarative scene tree handed to the presentation layer
//!
//! The widget tree is flattened into a `Scene` of plain nodes; anything
//! that can display text and report activations back by widget id can
//! present it. `to_json` is the interop format for external renderers.

use crate::core::{UiError, WidgetId};
use serde::Serialize;
use std::io::Write;

/// Visual description of a single widget
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum NodeKind {
    Heading(String),
    Text(String),
    Button(String),
    Column,
    Row,
}

/// One node of the scene tree
#[derive(Debug, Clone, Serialize)]
pub struct SceneNode {
    pub id: WidgetId,
    #[serde(flatten)]
    pub kind: NodeKind,
    pub children: Vec<SceneNode>,
}

/// A full frame: the declarative tree for one render pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    pub root: Option<SceneNode>,
}

impl Scene {
    /// All text content in document order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(|node| {
            if let NodeKind::Text(ref content) = node.kind {
                out.push(content.as_str());
            }
        });
        out
    }

    /// All headings in document order
    pub fn headings(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(|node| {
            if let NodeKind::Heading(ref content) = node.kind {
                out.push(content.as_str());
            }
        });
        out
    }

    /// All buttons in document order, as (id, label) pairs
    pub fn buttons(&self) -> Vec<(WidgetId, &str)> {
        let mut out = Vec::new();
        self.walk(|node| {
            if let NodeKind::Button(ref label) = node.kind {
                out.push((node.id, label.as_str()));
            }
        });
        out
    }

    /// Serialize the scene for an external renderer
    pub fn to_json(&self) -> Result<String, UiError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn walk<'a, F: FnMut(&'a SceneNode)>(&'a self, mut f: F) {
        fn visit<'a, F: FnMut(&'a SceneNode)>(node: &'a SceneNode, f: &mut F) {
            f(node);
            for child in &node.children {
                visit(child, f);
            }
        }
        if let Some(ref root) = self.root {
            visit(root, &mut f);
        }
    }
}

/// Presentation collaborator: displays one scene per frame
pub trait Renderer {
    fn present(&mut self, scene: &Scene) -> Result<(), UiError>;
}

/// Renders the scene tree as indented text
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn render_node(&mut self, node: &SceneNode, depth: usize) -> Result<(), UiError> {
        let indent = "  ".repeat(depth);
        match node.kind {
            NodeKind::Heading(ref content) => writeln!(self.out, "{indent}== {content} ==")?,
            NodeKind::Text(ref content) => writeln!(self.out, "{indent}{content}")?,
            NodeKind::Button(ref label) => writeln!(self.out, "{indent}[{label}]")?,
            NodeKind::Column | NodeKind::Row => {}
        }
        for child in &node.children {
            self.render_node(child, depth + 1)?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn present(&mut self, scene: &Scene) -> Result<(), UiError> {
        if let Some(ref root) = scene.root {
            self.render_node(root, 0)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
