//! Graphviz output for fringe trees
//!
//! Writes a `digraph` in DOT syntax. Several trees can go into one graph;
//! with node sharing enabled each physical node is drawn once, so the nodes
//! two versions of a tree have in common show up as common subgraphs.

mod config;
mod dot;

pub use config::RenderConfig;
pub use dot::DotRenderer;

use std::fmt::Debug;

use thiserror::Error;

use crate::algebra::Measured;
use crate::tree::FringeTree;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Configuration invalid (e.g., graph name is not a DOT identifier).
    #[error("invalid render configuration: {0}")]
    InvalidConfiguration(String),

    /// Writing to the output failed.
    #[error("failed to write graph: {0}")]
    Io(#[from] std::io::Error),

    /// Rendered bytes were not UTF-8.
    #[error("graph output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render `trees` into one graph and return the DOT text.
pub fn render_dot<'a, V, M, I>(trees: I, config: RenderConfig) -> Result<String, RenderError>
where
    V: Debug + 'a,
    M: Measured<V> + 'a,
    M::Tag: Debug + 'a,
    I: IntoIterator<Item = &'a FringeTree<V, M>>,
{
    let mut renderer = DotRenderer::new(Vec::new(), config)?;
    for tree in trees {
        renderer.render(tree)?;
    }
    let bytes = renderer.finish()?;
    Ok(String::from_utf8(bytes)?)
}
