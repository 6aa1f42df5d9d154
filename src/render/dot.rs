use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::io::Write;
use std::sync::Arc;

use tracing::{debug, trace};

use super::{RenderConfig, RenderError};
use crate::algebra::Measured;
use crate::tree::{FringeTree, Node, NodeVisitor};

/// Streams trees into one DOT `digraph`.
///
/// Node ids (`n0`, `n1`, ...) are handed out in depth-first order, so the
/// same trees rendered in the same order always produce the same text.
/// With `share_nodes` on, nodes are recognised by address: keep every
/// rendered tree alive until `finish()`.
pub struct DotRenderer<W: Write> {
    writer: W,
    config: RenderConfig,
    ids: HashMap<usize, usize>,
    next_id: usize,
}

impl<W: Write> fmt::Debug for DotRenderer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotRenderer")
            .field("config", &self.config)
            .field("nodes_written", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl<W: Write> DotRenderer<W> {
    /// Validate `config` and open the graph.
    pub fn new(mut writer: W, config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        writeln!(writer, "digraph {} {{", config.graph_name)?;
        Ok(Self {
            writer,
            config,
            ids: HashMap::new(),
            next_id: 0,
        })
    }

    /// Add a tree to the graph and return the id of its root node.
    pub fn render<V, M>(&mut self, tree: &FringeTree<V, M>) -> Result<usize, RenderError>
    where
        V: Debug,
        M: Measured<V>,
        M::Tag: Debug,
    {
        let root = self.emit(tree.root())?;
        debug!(root, nodes = self.next_id, "rendered tree");
        Ok(root)
    }

    /// Number of distinct nodes written so far.
    pub fn nodes_written(&self) -> usize {
        self.next_id
    }

    /// Close the graph and hand back the writer.
    pub fn finish(mut self) -> Result<W, RenderError> {
        writeln!(self.writer, "}}")?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Writes nodes in depth-first preorder. Each branch's two edges follow
    /// both of its subtrees. Work is kept on a heap stack, not the call stack.
    fn emit<V: Debug, T: Debug>(&mut self, root: &Arc<Node<V, T>>) -> Result<usize, RenderError> {
        let mut steps = vec![Step::Enter(root)];
        let mut finished: Vec<usize> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node) => {
                    let key = Arc::as_ptr(node) as *const () as usize;
                    if self.config.share_nodes {
                        if let Some(&id) = self.ids.get(&key) {
                            finished.push(id);
                            continue;
                        }
                    }

                    let id = self.next_id;
                    self.next_id += 1;
                    if self.config.share_nodes {
                        self.ids.insert(key, id);
                    }

                    trace!(id, "emitting node");
                    node.accept(&mut NodeEmitter { renderer: self, id })?;
                    match node.children() {
                        Some((left, right)) => {
                            steps.push(Step::Edges(id));
                            steps.push(Step::Enter(right));
                            steps.push(Step::Enter(left));
                        }
                        None => finished.push(id),
                    }
                }
                Step::Edges(id) => {
                    // both subtrees finished after this step was queued
                    let right_id = finished.pop().unwrap_or_default();
                    let left_id = finished.pop().unwrap_or_default();
                    writeln!(self.writer, "  n{} -> n{} [label=\"L\"];", id, left_id)?;
                    writeln!(self.writer, "  n{} -> n{} [label=\"R\"];", id, right_id)?;
                    finished.push(id);
                }
            }
        }

        Ok(finished.pop().unwrap_or_default())
    }
}

enum Step<'a, V, T> {
    Enter(&'a Arc<Node<V, T>>),
    Edges(usize),
}

struct NodeEmitter<'r, W: Write> {
    renderer: &'r mut DotRenderer<W>,
    id: usize,
}

impl<V: Debug, T: Debug, W: Write> NodeVisitor<V, T> for NodeEmitter<'_, W> {
    type Output = Result<(), RenderError>;

    fn visit_empty(&mut self, _tag: &T) -> Self::Output {
        writeln!(self.renderer.writer, "  n{} [shape=point];", self.id)?;
        Ok(())
    }

    fn visit_leaf(&mut self, tag: &T, value: &V) -> Self::Output {
        let mut label = escape(&format!("{:?}", value));
        if self.renderer.config.show_tags {
            label.push_str("\\n");
            label.push_str(&escape(&format!("tag={:?}", tag)));
        }
        writeln!(
            self.renderer.writer,
            "  n{} [shape=box, label=\"{}\"];",
            self.id, label
        )?;
        Ok(())
    }

    fn visit_branch(
        &mut self,
        tag: &T,
        _left: &Arc<Node<V, T>>,
        _right: &Arc<Node<V, T>>,
    ) -> Self::Output {
        let label = if self.renderer.config.show_tags {
            escape(&format!("tag={:?}", tag))
        } else {
            String::new()
        };
        writeln!(
            self.renderer.writer,
            "  n{} [shape=ellipse, label=\"{}\"];",
            self.id, label
        )?;
        Ok(())
    }
}

/// Escape text for a double-quoted DOT string.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
