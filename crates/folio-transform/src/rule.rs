//! Transform rule trait.

use folio_markup::Element;

/// A single in-place rewrite of a markup tree.
///
/// Rules are applied by [`ContentTransformer`](crate::ContentTransformer) in
/// a fixed order, each seeing the tree as left by the previous one. A rule
/// must tolerate any tree shape and must be idempotent.
///
/// # Example
///
/// ```
/// use folio_markup::Element;
/// use folio_transform::Rule;
///
/// struct DropHorizontalRules;
///
/// impl Rule for DropHorizontalRules {
///     fn name(&self) -> &'static str {
///         "drop-hr"
///     }
///
///     fn apply(&self, root: &mut Element) {
///         root.walk_mut(&mut |el| el.children.retain(|n| !n.is_element("hr")));
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Rule name for logging.
    fn name(&self) -> &'static str;

    /// Rewrite `root` in place.
    fn apply(&self, root: &mut Element);
}
