//! Crate-level smoke tests for the config crate.

use crate::constants::{BuildDefaults, DEFAULT_FIRST_LAYER_HEIGHT_MM, DEFAULT_OTHER_LAYERS_HEIGHT_MM};

#[test]
fn defaults_match_named_constants() {
    let defaults = BuildDefaults::default();
    assert_eq!(defaults.first_layer_height, DEFAULT_FIRST_LAYER_HEIGHT_MM);
    assert_eq!(defaults.other_layers_height, DEFAULT_OTHER_LAYERS_HEIGHT_MM);
}
