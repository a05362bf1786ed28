// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// graylift-site — Thin presentation shell for the Graylift site.
//
// Pages are described by explicit `PageConfig` objects passed into a render
// function; there is no process-wide page state and no initialisation-order
// dependency between pages. Rendering, navigation, and styling beyond this
// shell belong to the embedding host.

pub mod logging;
pub mod page;
pub mod pages;

pub use logging::init_logging;
pub use page::{PageConfig, render_error_panel, render_page};
