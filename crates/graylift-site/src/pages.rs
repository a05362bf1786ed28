// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preset page configurations for the site's static pages.

use std::path::Path;

use crate::page::PageConfig;

/// Relative location of the shared stylesheet under the site root.
const STYLESHEET: &str = "styles/main.css";

/// Landing page.
pub fn home(site_root: &Path) -> PageConfig {
    PageConfig {
        title: "LAF Solutions".into(),
        icon: "\u{1F3E0}".into(),
        heading: "LAF Solutions".into(),
        description: "Practical software for seeing, reading, and understanding your data."
            .into(),
        stylesheet: Some(site_root.join(STYLESHEET)),
    }
}

/// The image-upload-to-OCR utility page.
pub fn computer_vision(site_root: &Path) -> PageConfig {
    PageConfig {
        title: "LAF Solutions | Computer Vision".into(),
        icon: "\u{1F4BB}".into(),
        heading: "Computer Vision".into(),
        description: "Unveiling the unseen through pixels and algorithms, our computer vision \
                      technology redefines how we perceive and interact with the visual world."
            .into(),
        stylesheet: Some(site_root.join(STYLESHEET)),
    }
}
