//! CSS generator.
//!
//! Emits one rule per category class from the fixed palette.

use straylight_lexer::Category;

/// Generate the category stylesheet.
pub fn generate() -> String {
    let mut css = String::new();
    for category in Category::ALL {
        css.push_str(&format!(
            ".{} {{ color: {}; }}\n",
            category.class_name(),
            category.color()
        ));
    }
    css
}
