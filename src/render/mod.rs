// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scene rasterization.
//!
//! Composites node chrome and routed connectors into a viewport-sized
//! character grid, plus a span index the TUI uses for cell-accurate styling
//! (glow, drag feedback).

pub mod grid;
pub mod scene;

pub use grid::Grid;
pub use scene::{
    arrow_char_for_angle, render_scene, LineSpan, SceneObject, SceneRender, CONNECTOR_DOT,
    ENDPOINT_DOT, MIDPOINT_HANDLE, REMOVE_MARK, TABLE_ICON,
};
