// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Anchor layout: the position registry and the recalculator that feeds it.
//!
//! Nodes expose a measure capability; the recalculator polls it on layout
//! triggers and republishes calibrated anchors wholesale per table.

pub mod measure;
pub mod registry;

pub use measure::{
    recompute_anchors, ColumnMeasure, ANCHOR_DOT_OFFSET_X, ANCHOR_DOT_OFFSET_Y,
};
pub use registry::PositionRegistry;
