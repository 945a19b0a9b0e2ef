// Host-side tests for the theme palettes.

#![allow(dead_code)]
mod core {
    pub mod theme {
        include!("../src/core/theme.rs");
    }
}

use crate::core::theme::*;

#[test]
fn toggling_twice_restores_the_palette() {
    let start = Theme::default();
    assert_eq!(start, Theme::Dark);
    let back = start.toggled().toggled();
    assert_eq!(back, start);
    assert_eq!(back.palette(), start.palette());
}

#[test]
fn palettes_cover_the_same_variables() {
    let dark: Vec<&str> = DARK_PALETTE.iter().map(|(k, _)| *k).collect();
    let light: Vec<&str> = LIGHT_PALETTE.iter().map(|(k, _)| *k).collect();
    assert_eq!(dark, light);
    for k in dark {
        assert!(k.starts_with("--"), "{k} is not a custom property");
    }
}

#[test]
fn palettes_differ_for_every_variable() {
    let differing = DARK_PALETTE
        .iter()
        .zip(LIGHT_PALETTE.iter())
        .filter(|(d, l)| d.1 != l.1)
        .count();
    assert_eq!(differing, DARK_PALETTE.len());
}

#[test]
fn light_palette_values() {
    let light = Theme::Light.palette();
    assert!(light.contains(&("--primary-bg", "#f5f5f5")));
    assert!(light.contains(&("--text-primary", "#000000")));
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}
