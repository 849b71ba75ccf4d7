// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::grid::Grid;
use crate::canvas::{Canvas, TableNode, NODE_HEADER_ROWS};
use crate::model::TableId;
use crate::routing::{ConnectorPath, CURVE_SAMPLES};

pub const CONNECTOR_DOT: char = '·';
pub const ENDPOINT_DOT: char = '●';
pub const MIDPOINT_HANDLE: char = '◆';
pub const REMOVE_MARK: char = '✕';
pub const TABLE_ICON: char = '▦';

/// A contiguous span of cells within one rendered line: `(y, x0, x1)`,
/// inclusive character-cell indices.
pub type LineSpan = (usize, usize, usize);

/// Stable identity of something drawn into the scene, for styling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SceneObject {
    Node(TableId),
    Connector(usize),
}

/// One composited frame of the canvas: text cells plus a span index.
#[derive(Debug, Clone)]
pub struct SceneRender {
    grid: Grid,
    spans: BTreeMap<SceneObject, Vec<LineSpan>>,
}

impl SceneRender {
    pub fn lines(&self) -> Vec<String> {
        self.grid.to_lines()
    }

    pub fn spans(&self) -> &BTreeMap<SceneObject, Vec<LineSpan>> {
        &self.spans
    }

    pub fn spans_for(&self, object: &SceneObject) -> &[LineSpan] {
        self.spans.get(object).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Plain text with trailing blanks trimmed; test and debug output.
    pub fn to_text_trimmed(&self) -> String {
        let mut lines = self
            .grid
            .to_lines()
            .into_iter()
            .map(|line| line.trim_end_matches(' ').to_owned())
            .collect::<Vec<_>>();
        while matches!(lines.last(), Some(line) if line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

/// Composites the open tables and routed connectors into a viewport-sized
/// grid. `scroll` is the canvas scroll offset in cells; node chrome is drawn
/// first so soft-plotted curve cells never eat into it.
pub fn render_scene(
    canvas: &Canvas,
    paths: &[ConnectorPath],
    scroll_x: f64,
    scroll_y: f64,
    width: usize,
    height: usize,
) -> SceneRender {
    let mut grid = Grid::new(width, height);
    let mut spans = BTreeMap::<SceneObject, Vec<LineSpan>>::new();

    for node in canvas.nodes() {
        draw_node(&mut grid, &mut spans, node, scroll_x, scroll_y);
    }

    for (index, path) in paths.iter().enumerate() {
        draw_connector(&mut grid, &mut spans, index, path, scroll_x, scroll_y);
    }

    SceneRender { grid, spans }
}

fn snap(value: f64) -> i64 {
    value.floor() as i64
}

fn record(
    spans: &mut BTreeMap<SceneObject, Vec<LineSpan>>,
    grid: &Grid,
    object: &SceneObject,
    y: i64,
    x0: i64,
    x1: i64,
) {
    if y < 0 || y as usize >= grid.height() {
        return;
    }
    let x0 = x0.max(0);
    let x1 = x1.min(grid.width() as i64 - 1);
    if x0 > x1 {
        return;
    }
    spans
        .entry(object.clone())
        .or_default()
        .push((y as usize, x0 as usize, x1 as usize));
}

fn draw_node(
    grid: &mut Grid,
    spans: &mut BTreeMap<SceneObject, Vec<LineSpan>>,
    node: &TableNode,
    scroll_x: f64,
    scroll_y: f64,
) {
    let frame = node.frame();
    let x0 = snap(frame.x - scroll_x);
    let y0 = snap(frame.y - scroll_y);
    let x1 = x0 + frame.width as i64 - 1;
    let y1 = y0 + frame.height as i64 - 1;
    let inner = (frame.width as usize).saturating_sub(2);

    grid.draw_box(x0, y0, x1, y1);
    // Separator under the title row; merges into tees at the borders.
    grid.draw_hline(x0, x1, y0 + 2);

    // Title: icon + name on the left, the remove mark pinned right.
    let title_width = inner.saturating_sub(3);
    let title = format!("{TABLE_ICON} {}", truncate_with_ellipsis(node.table().name(), title_width.saturating_sub(2)));
    grid.write_str(x0 + 1, y0 + 1, &truncate_with_ellipsis(&title, title_width));
    grid.set(x1 - 1, y0 + 1, REMOVE_MARK);

    for (row, column) in node.table().columns().iter().take(node.visible_rows()).enumerate() {
        let y = y0 + NODE_HEADER_ROWS as i64 + row as i64;
        grid.write_str(x0 + 1, y, &column_row_text(column.name(), column.data_type(), inner));
    }

    if node.clipped_rows() > 0 {
        let hint = format!(" ⋯ {} more ", node.clipped_rows());
        if hint.chars().count() <= inner {
            let hint_x = x0 + 1 + ((inner - hint.chars().count()) / 2) as i64;
            grid.write_str(hint_x, y1, &hint);
        }
    }

    let object = SceneObject::Node(node.table().id().clone());
    for y in y0..=y1 {
        record(spans, grid, &object, y, x0, x1);
    }
}

fn column_row_text(name: &str, data_type: &str, inner: usize) -> String {
    if inner == 0 {
        return String::new();
    }

    let type_len = data_type.chars().count();
    // " name" then the type right-aligned with at least one cell of gap and
    // one trailing cell of padding.
    let name_budget = inner.saturating_sub(type_len + 3);
    let name = truncate_with_ellipsis(name, name_budget);
    let gap = inner.saturating_sub(1 + name.chars().count() + type_len + 1);

    let mut text = String::with_capacity(inner);
    text.push(' ');
    text.push_str(&name);
    for _ in 0..gap {
        text.push(' ');
    }
    text.push_str(&truncate_with_ellipsis(data_type, inner.saturating_sub(2)));
    text.push(' ');
    text
}

fn draw_connector(
    grid: &mut Grid,
    spans: &mut BTreeMap<SceneObject, Vec<LineSpan>>,
    index: usize,
    path: &ConnectorPath,
    scroll_x: f64,
    scroll_y: f64,
) {
    let object = SceneObject::Connector(index);
    let cell = |x: f64, y: f64| (snap(x - scroll_x), snap(y - scroll_y));

    for point in path.curve_points(CURVE_SAMPLES) {
        let (x, y) = cell(point.x, point.y);
        if grid.plot_soft(x, y, CONNECTOR_DOT) {
            record(spans, grid, &object, y, x, x);
        }
    }

    let (from_x, from_y) = cell(path.from().x, path.from().y);
    if grid.set(from_x, from_y, ENDPOINT_DOT) {
        record(spans, grid, &object, from_y, from_x, from_x);
    }

    let (mid_x, mid_y) = cell(path.mid().x, path.mid().y);
    if grid.set(mid_x, mid_y, MIDPOINT_HANDLE) {
        record(spans, grid, &object, mid_y, mid_x, mid_x);
    }

    let (to_x, to_y) = cell(path.to().x, path.to().y);
    if grid.set(to_x, to_y, arrow_char_for_angle(path.arrow_angle_deg())) {
        record(spans, grid, &object, to_y, to_x, to_x);
    }
}

/// Picks the arrowhead glyph for a rotation anchored at the destination.
pub fn arrow_char_for_angle(angle_deg: f64) -> char {
    let mut angle = angle_deg % 360.0;
    if angle > 180.0 {
        angle -= 360.0;
    }
    if angle <= -180.0 {
        angle += 360.0;
    }

    match angle {
        a if (-22.5..22.5).contains(&a) => '▶',
        a if (22.5..67.5).contains(&a) => '◢',
        a if (67.5..112.5).contains(&a) => '▼',
        a if (112.5..157.5).contains(&a) => '◣',
        a if (-67.5..-22.5).contains(&a) => '◥',
        a if (-112.5..-67.5).contains(&a) => '▲',
        a if (-157.5..-112.5).contains(&a) => '◤',
        _ => '◀',
    }
}

fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text.chars().count();
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::{arrow_char_for_angle, column_row_text, render_scene, SceneObject};
    use crate::canvas::Canvas;
    use crate::model::{fixtures, TableId};
    use crate::routing::{route_all, MidpointDrag};
    use rstest::rstest;
    use std::time::Instant;

    fn tid(value: &str) -> TableId {
        TableId::new(value).expect("table id")
    }

    #[test]
    fn renders_a_node_box_with_title_separator_and_rows() {
        let mut canvas = Canvas::new();
        canvas.place_table(fixtures::employees(), 0.0, 0.0, Instant::now());

        let scene = render_scene(&canvas, &[], 0.0, 0.0, 40, 10);
        let text = scene.to_text_trimmed();
        let lines: Vec<&str> = text.split('\n').collect();

        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("employees"));
        assert!(lines[1].contains('✕'));
        assert!(lines[2].starts_with('├'));
        assert!(lines[3].contains("employee_id"));
        assert!(lines[3].contains("integer"));
        assert!(lines[6].starts_with('└'));
    }

    #[test]
    fn clipped_nodes_show_the_scroll_hint() {
        let mut canvas = Canvas::new();
        canvas.place_table(fixtures::patients(), 0.0, 0.0, Instant::now());
        canvas.resize_node(&tid("table_3"), 30.0, 7.0);

        let scene = render_scene(&canvas, &[], 0.0, 0.0, 40, 10);
        assert!(scene.to_text_trimmed().contains("⋯ 1 more"));
    }

    #[test]
    fn scrolling_shifts_the_scene() {
        let mut canvas = Canvas::new();
        canvas.place_table(fixtures::employees(), 10.0, 5.0, Instant::now());

        let at_origin = render_scene(&canvas, &[], 10.0, 5.0, 40, 10);
        let lines = at_origin.lines();
        assert!(lines[0].starts_with('┌'));
    }

    #[test]
    fn connectors_render_endpoint_handle_and_arrow() {
        let mut canvas = Canvas::new();
        let now = Instant::now();
        canvas.place_table(fixtures::employees(), 0.0, 0.0, now);
        canvas.place_table(fixtures::employee_salary(), 40.0, 10.0, now);
        let from_col = fixtures::employees().columns()[0].clone();
        let to_col = fixtures::employee_salary().columns()[1].clone();
        canvas.connect(
            crate::model::EndpointRef::new(tid("table_1"), from_col.column_id().clone()),
            from_col,
            crate::model::EndpointRef::new(tid("table_2"), to_col.column_id().clone()),
            to_col,
        );

        let paths = route_all(canvas.connections(), &MidpointDrag::new());
        let scene = render_scene(&canvas, &paths, 0.0, 0.0, 80, 20);
        let text = scene.to_text_trimmed();

        assert!(text.contains('●'));
        assert!(text.contains('◆'));
        assert!(text.contains('▶'));
        assert!(!scene.spans_for(&SceneObject::Connector(0)).is_empty());
    }

    #[rstest]
    #[case(0.0, '▶')]
    #[case(45.0, '◢')]
    #[case(90.0, '▼')]
    #[case(135.0, '◣')]
    #[case(180.0, '◀')]
    #[case(-45.0, '◥')]
    #[case(-90.0, '▲')]
    #[case(-135.0, '◤')]
    fn arrow_glyph_follows_the_rotation(#[case] angle: f64, #[case] expected: char) {
        assert_eq!(arrow_char_for_angle(angle), expected);
    }

    #[test]
    fn column_row_right_aligns_the_data_type() {
        let text = column_row_text("employee_id", "integer", 28);
        assert_eq!(text.chars().count(), 28);
        assert!(text.starts_with(" employee_id"));
        assert!(text.ends_with("integer "));
    }
}
