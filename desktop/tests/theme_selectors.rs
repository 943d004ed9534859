#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Every class the shared heatmap components emit must exist in
`ui/assets/theme/main.css`, otherwise a rename silently drops styling in the
packaged desktop app. Substring checks only.

When a component class is renamed, update REQUIRED_SELECTORS with it.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".heatmap__panels",
    ".heatmap__sidebar",
    ".heatmap__main",
    // Navbar
    ".navbar__inner",
    ".navbar__brand-mark",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Cards
    ".heatmap-card {",
    ".heatmap-card__header",
    ".heatmap-card__meta",
    ".heatmap-card__meta--success",
    ".heatmap-card__meta--error",
    ".heatmap-card__placeholder",
    // Configuration form
    ".heatmap-config__dimensions",
    ".heatmap-field__label",
    ".heatmap-field__input",
    ".heatmap-field__error",
    // Chart and editor
    ".heatmap-chart__surface",
    ".heatmap-editor__table",
    ".heatmap-editor__axis",
    ".heatmap-cell {",
    ".heatmap-cell--invalid",
    // Statistics
    ".heatmap-stats__grid",
    ".heatmap-stats__label",
    ".heatmap-stats__value",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn invalid_cell_marker_is_visible() {
    let start = THEME_CSS
        .find(".heatmap-cell--invalid")
        .expect("invalid cell rule");
    let block = &THEME_CSS[start..];
    let end = block.find('}').expect("rule terminator");
    assert!(block[..end].contains("border-color"));
}
