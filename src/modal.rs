//! Styles for the configuration viewer modal.

use once_cell::sync::Lazy;

use crate::style::{LengthUnit, LineStyle, StyleBundle, StyleValue};

static CONFIG_MODAL: Lazy<StyleBundle> = Lazy::new(|| {
    StyleBundle::new()
        .set("position", StyleValue::keyword("absolute"))
        .set("top", StyleValue::percent(50.0))
        .set("left", StyleValue::percent(50.0))
        .set("transform", StyleValue::translate(-50.0, -50.0))
        .set("width", StyleValue::scalar(800.0))
        .set("bgcolor", StyleValue::token("background.paper"))
        .set(
            "border",
            StyleValue::border(1.0, LineStyle::Solid, "border.DEFAULT"),
        )
        .set("boxShadow", StyleValue::scalar(24.0))
        .set("p", StyleValue::scalar(4.0))
        .set("height", StyleValue::percent(90.0))
        .set("display", StyleValue::keyword("flex"))
        .set("minHeight", StyleValue::length(570.0, LengthUnit::Px))
        .set("flexDirection", StyleValue::keyword("column"))
});

/// Returns the layout and appearance bundle for the configuration viewer
/// modal.
///
/// The dialog is centered with an absolute 50%/50% anchor pulled back by
/// half its own size, fixed at 800 pixels wide, sized to 90% of its
/// container with a 570px floor, and stacks its content vertically.
///
/// The bundle is built once at first access and never mutated afterwards,
/// so the returned reference is safe to share across any number of
/// concurrent readers.
///
/// # Example
///
/// ```rust
/// use sxbundle::config_modal;
///
/// let styles = config_modal();
/// assert_eq!(styles.get("position").unwrap().to_string(), "absolute");
/// assert_eq!(styles.get("width").unwrap().as_scalar(), Some(800.0));
/// ```
pub fn config_modal() -> &'static StyleBundle {
    &CONFIG_MODAL
}
