//! # Rendering
//!
//! A [`Renderer`] turns a finished [`Tree`] into bytes. [`render`] drives
//! it: one header call, one [`Renderer::render_node`] call per walk visit
//! (containers twice, other nodes once), then one footer call.
//!
//! - **`html`**: [`HtmlRenderer`] and its [`HtmlOptions`]
//! - **`markdown`**: [`MarkdownRenderer`], a canonical re-serialization

pub mod html;
pub mod markdown;

use std::io::{self, Write};

use crate::parsing::{NodeId, Tree, WalkStatus};

pub use html::{HtmlOptions, HtmlRenderer};
pub use markdown::MarkdownRenderer;

pub trait Renderer {
    /// Called once before the walk with the whole tree.
    fn render_header(&mut self, w: &mut dyn Write, tree: &Tree) -> io::Result<()>;

    /// Called for every walk visit. The returned status steers the walk.
    fn render_node(
        &mut self,
        w: &mut dyn Write,
        tree: &Tree,
        node: NodeId,
        entering: bool,
    ) -> io::Result<WalkStatus>;

    /// Called once after the walk.
    fn render_footer(&mut self, w: &mut dyn Write, tree: &Tree) -> io::Result<()>;
}

/// Renders `tree` through `renderer` into `w`. The first write error ends
/// the walk and is returned.
pub fn render<R>(tree: &Tree, renderer: &mut R, w: &mut dyn Write) -> io::Result<()>
where
    R: Renderer + ?Sized,
{
    renderer.render_header(w, tree)?;

    let mut result = Ok(());
    tree.walk(tree.root(), |node, entering| {
        match renderer.render_node(w, tree, node, entering) {
            Ok(status) => status,
            Err(err) => {
                result = Err(err);
                WalkStatus::Terminate
            }
        }
    });
    result?;

    renderer.render_footer(w, tree)
}

/// Renders into a fresh buffer.
pub fn render_to_vec<R>(tree: &Tree, renderer: &mut R) -> io::Result<Vec<u8>>
where
    R: Renderer + ?Sized,
{
    let mut out = Vec::new();
    render(tree, renderer, &mut out)?;
    Ok(out)
}
