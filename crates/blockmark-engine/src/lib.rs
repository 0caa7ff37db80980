pub mod error;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use error::Error;
pub use parsing::{
    DEFAULT_MAX_NESTING, Extensions, NodeId, NodeType, Options, Parser, Tree, WalkStatus,
    parse_document,
};
pub use render::{HtmlOptions, HtmlRenderer, MarkdownRenderer, Renderer, render, render_to_vec};

/// Parses `input` and renders it as HTML.
pub fn run(input: &[u8], options: &Options, html: &HtmlOptions) -> Result<Vec<u8>, Error> {
    let tree = parse_document(input, options);
    let mut renderer = HtmlRenderer::new(html.clone());
    Ok(render_to_vec(&tree, &mut renderer)?)
}
