// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    match ch {
        UNICODE_BOX_HORIZONTAL => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT)),
        UNICODE_BOX_VERTICAL => Some(BoxEdges::UP.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::DOWN)),
        UNICODE_BOX_BOTTOM_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::UP)),
        UNICODE_BOX_BOTTOM_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::UP)),
        UNICODE_BOX_TEE_RIGHT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::RIGHT)),
        UNICODE_BOX_TEE_LEFT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::LEFT)),
        UNICODE_BOX_TEE_DOWN => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::DOWN)),
        UNICODE_BOX_TEE_UP => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::UP)),
        UNICODE_BOX_CROSS => Some(
            BoxEdges::LEFT
                .union(BoxEdges::RIGHT)
                .union(BoxEdges::UP)
                .union(BoxEdges::DOWN),
        ),
        _ => None,
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        0 => ' ',
        1..=3 => UNICODE_BOX_HORIZONTAL,
        4 | 8 | 12 => UNICODE_BOX_VERTICAL,
        10 => UNICODE_BOX_TOP_LEFT,
        9 => UNICODE_BOX_TOP_RIGHT,
        6 => UNICODE_BOX_BOTTOM_LEFT,
        5 => UNICODE_BOX_BOTTOM_RIGHT,
        14 => UNICODE_BOX_TEE_RIGHT,
        13 => UNICODE_BOX_TEE_LEFT,
        11 => UNICODE_BOX_TEE_DOWN,
        7 => UNICODE_BOX_TEE_UP,
        15 => UNICODE_BOX_CROSS,
        _ => UNICODE_BOX_CROSS,
    }
}

/// A viewport-sized character grid for scene compositing.
///
/// Unlike a fixed-size diagram export, scene content routinely hangs off the
/// visible area, so every write silently clips instead of erroring. Collision
/// behavior is deterministic:
/// - box-drawing characters merge into junctions instead of overwriting
/// - other characters overwrite (last writer wins)
/// - soft plots only land on cells that are still blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
    box_edges: Vec<BoxEdges>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        let len = width.saturating_mul(height);
        Self {
            width,
            height,
            cells: vec![' '; len],
            box_edges: vec![BoxEdges::NONE; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + x as usize)
    }

    /// Writes one cell; box-drawing characters merge, others overwrite.
    /// Returns whether the cell was inside the viewport.
    pub fn set(&mut self, x: i64, y: i64, ch: char) -> bool {
        let Some(idx) = self.index_of(x, y) else {
            return false;
        };
        if let Some(edges) = box_edges_from_char(ch) {
            self.box_edges[idx] = self.box_edges[idx].union(edges);
        } else {
            self.cells[idx] = ch;
            self.box_edges[idx] = BoxEdges::NONE;
        }
        true
    }

    /// Writes one cell only if it is still blank; node chrome wins over
    /// connector dots. Returns whether the cell was written.
    pub fn plot_soft(&mut self, x: i64, y: i64, ch: char) -> bool {
        let Some(idx) = self.index_of(x, y) else {
            return false;
        };
        if self.cells[idx] != ' ' || !self.box_edges[idx].is_empty() {
            return false;
        }
        self.cells[idx] = ch;
        true
    }

    /// Writes `text` left-to-right starting at `(x, y)`, clipping both ends.
    pub fn write_str(&mut self, x: i64, y: i64, text: &str) {
        let mut x = x;
        for ch in text.chars() {
            self.set(x, y, ch);
            x += 1;
        }
    }

    pub fn draw_hline(&mut self, x0: i64, x1: i64, y: i64) {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in min_x..=max_x {
            self.set(x, y, UNICODE_BOX_HORIZONTAL);
        }
    }

    pub fn draw_vline(&mut self, x: i64, y0: i64, y1: i64) {
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in min_y..=max_y {
            self.set(x, y, UNICODE_BOX_VERTICAL);
        }
    }

    /// Draws a single-line box with corners at `(x0, y0)` and `(x1, y1)`,
    /// clipping every cell independently.
    pub fn draw_box(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        if min_x == max_x || min_y == max_y {
            if min_y == max_y {
                self.draw_hline(min_x, max_x, min_y);
            } else {
                self.draw_vline(min_x, min_y, max_y);
            }
            return;
        }

        for x in (min_x + 1)..max_x {
            self.set(x, min_y, UNICODE_BOX_HORIZONTAL);
            self.set(x, max_y, UNICODE_BOX_HORIZONTAL);
        }
        for y in (min_y + 1)..max_y {
            self.set(min_x, y, UNICODE_BOX_VERTICAL);
            self.set(max_x, y, UNICODE_BOX_VERTICAL);
        }

        self.set(min_x, min_y, UNICODE_BOX_TOP_LEFT);
        self.set(max_x, min_y, UNICODE_BOX_TOP_RIGHT);
        self.set(min_x, max_y, UNICODE_BOX_BOTTOM_LEFT);
        self.set(max_x, max_y, UNICODE_BOX_BOTTOM_RIGHT);
    }

    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        let idx = self.index_of(x, y)?;
        let edges = self.box_edges[idx];
        if edges.is_empty() {
            return Some(self.cells[idx]);
        }

        // Render only the edge directions that actually continue into a
        // neighboring box cell, so a separator meeting a border reads as a
        // tee rather than a cross.
        let connected = self.connected_box_edges(x, y, edges);
        let edges = if connected.is_empty() { edges } else { connected };
        Some(box_char_from_edges(edges))
    }

    fn connected_box_edges(&self, x: i64, y: i64, edges: BoxEdges) -> BoxEdges {
        let mut connected = BoxEdges::NONE;

        let continues = |nx: i64, ny: i64, towards: BoxEdges| {
            self.index_of(nx, ny)
                .is_some_and(|idx| self.box_edges[idx].0 & towards.0 != 0)
        };

        if edges.0 & BoxEdges::LEFT.0 != 0 && continues(x - 1, y, BoxEdges::RIGHT) {
            connected = connected.union(BoxEdges::LEFT);
        }
        if edges.0 & BoxEdges::RIGHT.0 != 0 && continues(x + 1, y, BoxEdges::LEFT) {
            connected = connected.union(BoxEdges::RIGHT);
        }
        if edges.0 & BoxEdges::UP.0 != 0 && continues(x, y - 1, BoxEdges::DOWN) {
            connected = connected.union(BoxEdges::UP);
        }
        if edges.0 & BoxEdges::DOWN.0 != 0 && continues(x, y + 1, BoxEdges::UP) {
            connected = connected.union(BoxEdges::DOWN);
        }

        connected
    }

    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height as i64)
            .map(|y| {
                (0..self.width as i64)
                    .map(|x| self.get(x, y).unwrap_or(' '))
                    .collect()
            })
            .collect()
    }
}
