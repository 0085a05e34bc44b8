//! Image alignment promotion.

use folio_markup::{Element, Node, ROOT_TAG};

use crate::rule::Rule;

/// Centering class moved from an image to its parent.
pub const ALIGN_CENTER_CLASS: &str = "align-center";

/// Moves [`ALIGN_CENTER_CLASS`] from images onto their parent element.
pub struct ImageAlignRule;

impl Rule for ImageAlignRule {
    fn name(&self) -> &'static str {
        "image-align"
    }

    fn apply(&self, root: &mut Element) {
        root.walk_mut(&mut |el| {
            // The wrapper is never written out.
            if el.is(ROOT_TAG) {
                return;
            }
            let mut promote = false;
            for child in &mut el.children {
                if let Node::Element(img) = child
                    && img.is("img")
                    && img.has_class(ALIGN_CENTER_CLASS)
                {
                    img.remove_class(ALIGN_CENTER_CLASS);
                    promote = true;
                }
            }
            if promote {
                el.add_class(ALIGN_CENTER_CLASS);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::run;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_promotes_class_to_paragraph() {
        assert_eq!(
            run(
                &ImageAlignRule,
                r#"<p><img src="a.png" alt="" class="align-center" /></p>"#
            ),
            r#"<p class="align-center"><img src="a.png" alt="" /></p>"#
        );
    }

    #[test]
    fn test_keeps_other_image_classes() {
        assert_eq!(
            run(
                &ImageAlignRule,
                r#"<td><img src="a.png" class="wide align-center" /></td>"#
            ),
            r#"<td class="align-center"><img src="a.png" class="wide" /></td>"#
        );
    }

    #[test]
    fn test_top_level_image_untouched() {
        let html = r#"<img src="a.png" class="align-center" />"#;
        assert_eq!(run(&ImageAlignRule, html), html);
    }

    #[test]
    fn test_uncentered_images_untouched() {
        let html = r#"<p><img src="a.png" class="wide" /></p>"#;
        assert_eq!(run(&ImageAlignRule, html), html);
    }
}
