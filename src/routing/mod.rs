// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector routing: curve geometry, arrowhead orientation, and the single
//! interactive midpoint-override session.

use crate::model::{Connection, ConnectionList};

/// Sample count used when flattening a connector curve for rendering.
pub const CURVE_SAMPLES: usize = 24;

/// Hit radius, in canvas units, around a connector's midpoint handle.
pub const MIDPOINT_HANDLE_RADIUS: f64 = 1.5;

/// A point in canvas-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The canvas's current geometric transform: pane origin plus scroll.
///
/// Pointer events arrive in screen coordinates; every interactive override
/// goes through [`CanvasTransform::to_canvas`], the inversion of that
/// transform, before touching routing state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasTransform {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl CanvasTransform {
    pub fn new(origin_x: f64, origin_y: f64, scroll_x: f64, scroll_y: f64) -> Self {
        Self { origin_x, origin_y, scroll_x, scroll_y }
    }

    /// Inverts the canvas transform: screen point to canvas-local point.
    pub fn to_canvas(&self, screen: Point) -> Point {
        Point::new(screen.x - self.origin_x + self.scroll_x, screen.y - self.origin_y + self.scroll_y)
    }

    /// Applies the canvas transform: canvas-local point to screen point.
    pub fn to_screen(&self, canvas: Point) -> Point {
        Point::new(canvas.x + self.origin_x - self.scroll_x, canvas.y + self.origin_y - self.scroll_y)
    }
}

/// Default midpoint: the arithmetic mean of the two endpoints.
pub fn default_midpoint(from: Point, to: Point) -> Point {
    Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0)
}

/// The routed geometry of one connector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorPath {
    from: Point,
    mid: Point,
    to: Point,
    arrow_angle_deg: f64,
}

impl ConnectorPath {
    pub fn from(&self) -> Point {
        self.from
    }

    /// The rendered midpoint: the curve passes through this point at t=0.5.
    pub fn mid(&self) -> Point {
        self.mid
    }

    pub fn to(&self) -> Point {
        self.to
    }

    /// Arrowhead rotation in degrees, anchored at the destination point.
    pub fn arrow_angle_deg(&self) -> f64 {
        self.arrow_angle_deg
    }

    /// Flattens the curve into `samples + 1` points from `from` to `to`.
    ///
    /// Quadratic Bézier whose control point is chosen so the curve passes
    /// through the midpoint: c = 2m − (a + b)/2.
    pub fn curve_points(&self, samples: usize) -> Vec<Point> {
        let samples = samples.max(1);
        let control = Point::new(
            2.0 * self.mid.x - (self.from.x + self.to.x) / 2.0,
            2.0 * self.mid.y - (self.from.y + self.to.y) / 2.0,
        );

        (0..=samples)
            .map(|step| {
                let t = step as f64 / samples as f64;
                let u = 1.0 - t;
                Point::new(
                    u * u * self.from.x + 2.0 * u * t * control.x + t * t * self.to.x,
                    u * u * self.from.y + 2.0 * u * t * control.y + t * t * self.to.y,
                )
            })
            .collect()
    }
}

/// Routes one connection, honoring an optional midpoint override.
pub fn route_connection(conn: &Connection, override_mid: Option<Point>) -> ConnectorPath {
    let from = Point::new(conn.from().anchor().x, conn.from().anchor().y);
    let to = Point::new(conn.to().anchor().x, conn.to().anchor().y);
    let mid = override_mid.unwrap_or_else(|| default_midpoint(from, to));
    let arrow_angle_deg = (to.y - from.y).atan2(to.x - from.x).to_degrees();

    ConnectorPath { from, mid, to, arrow_angle_deg }
}

/// Routes the whole connection list in z-order.
pub fn route_all(connections: &ConnectionList, drag: &MidpointDrag) -> Vec<ConnectorPath> {
    connections
        .iter()
        .enumerate()
        .map(|(index, conn)| route_connection(conn, drag.override_for(index)))
        .collect()
}

/// The single system-wide midpoint-override session.
///
/// At most one connection's midpoint is overridden at a time. Starting a drag
/// on another connection's handle transfers the session there; no error.
/// The override outlives pointer-up and is discarded by the next geometry
/// refresh, unless a session is active again by then.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MidpointDrag {
    session: Option<usize>,
    override_mid: Option<(usize, Point)>,
}

impl MidpointDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins (or transfers) the session for the connection at `index`.
    pub fn start(&mut self, index: usize) {
        self.session = Some(index);
        self.override_mid = None;
    }

    /// Feeds a pointer position, in screen coordinates, into the active
    /// session. No-op while no session is active.
    pub fn drag_to(&mut self, screen: Point, transform: &CanvasTransform) {
        let Some(index) = self.session else {
            return;
        };
        self.override_mid = Some((index, transform.to_canvas(screen)));
    }

    /// Ends the session on pointer-up or pointer-leave.
    ///
    /// The last override stays in effect until the next geometry refresh.
    pub fn finish(&mut self) {
        self.session = None;
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.session
    }

    pub fn override_for(&self, index: usize) -> Option<Point> {
        match self.override_mid {
            Some((overridden, point)) if overridden == index => Some(point),
            _ => None,
        }
    }

    /// Reverts to default midpoints after a full geometry recompute, unless a
    /// drag session is active again.
    pub fn clear_after_refresh(&mut self) {
        if self.session.is_none() {
            self.override_mid = None;
        }
    }
}
