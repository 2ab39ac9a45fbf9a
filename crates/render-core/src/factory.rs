//! Renderer factory contract.

use crate::chain::RenderFn;
use folio_style::StyleSet;
use folio_tree::Node;

/// A format binding: supplies the default render function, styles and
/// template text for one output format.
///
/// Concrete formats (HTML, XSL-FO, plain text, ...) live outside the core
/// and plug in through this trait.
pub trait RendererFactory: Send + Sync {
    /// The file suffix of artifacts produced by this format (`"html"`).
    fn suffix(&self) -> &'static str;

    /// The style declarations every render pass of this format starts from.
    /// Tree-contributed styles are merged on top of these.
    fn default_styles(&self) -> StyleSet;

    /// Template text registered as `default.template.<suffix>` for trees
    /// that do not define their own.
    fn default_template(&self) -> &str;

    /// Builds the format's default render function for one render pass.
    ///
    /// The default must cover every node variant the format supports; a
    /// variant it answers `Unhandled` for fails the render with an
    /// `UnsupportedNode` error. `root` and `styles` let a format emit
    /// pass-wide framing (document head, style blocks) before content.
    fn new_renderer(&self, root: &Node, styles: &StyleSet) -> Box<dyn RenderFn>;
}
