// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm): a palette of catalog tables on
//! the left, the droppable canvas on the right, and a mouse-driven drag state
//! machine for placing tables, connecting columns, moving/resizing nodes, and
//! dragging connector midpoints.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::canvas::{Canvas, TableNode, NODE_HEADER_ROWS};
use crate::catalog::Catalog;
use crate::dnd::{self, DropOutcome, DropTarget};
use crate::model::{Column, Table, TableId};
use crate::render::{render_scene, SceneObject, SceneRender};
use crate::routing::{route_all, CanvasTransform, ConnectorPath, MidpointDrag, Point,
    MIDPOINT_HANDLE_RADIUS};

mod search;

const FOCUS_COLOR: Color = Color::LightGreen;
const GLOW_COLOR: Color = Color::Yellow;
const DRAG_COLOR: Color = Color::LightCyan;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🆃 🆁 🅸 🆃 🅾 🅽 ";
const PALETTE_WIDTH: u16 = 26;
const CANVAS_SCROLL_STEP: f64 = 2.0;
/// Where a keyboard-initiated placement lands, relative to the view origin.
const KEYBOARD_DROP_X: f64 = 6.0;
const KEYBOARD_DROP_Y: f64 = 3.0;

/// Runs the interactive terminal UI against the built-in sample catalog.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_catalog(Catalog::builtin())
}

pub fn run_with_catalog(catalog: Catalog) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(catalog);

    while !app.should_quit {
        app.tick(Instant::now());
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                Event::Resize(..) => app.handle_viewport_resize(),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PALETTE_WIDTH), Constraint::Min(0)])
        .split(main_area);
    draw_palette(frame, app, panes[0]);
    draw_canvas(frame, app, panes[1]);
    draw_footer(frame, app, status_area);
}

fn draw_palette(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let border_style = panel_border_style(app.focus == Focus::Palette);
    let title = if app.filter_editing {
        format!("─ Palette /{} ", app.palette_filter)
    } else if app.palette_filter.is_empty() {
        "─ Palette ".to_owned()
    } else {
        format!("─ Palette ({}) ", app.palette_filter)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    app.palette_area = inner;

    let items = app
        .visible_palette_indices
        .iter()
        .map(|&index| {
            let table = &app.catalog.tables()[index];
            ListItem::new(format!("▦ {} ({})", table.name(), table.columns().len()))
        })
        .collect::<Vec<_>>();
    let list = List::new(items)
        .highlight_style(Style::default().fg(FOCUS_COLOR))
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list.block(block), area, &mut app.palette_state);
}

fn draw_canvas(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let border_style = panel_border_style(app.focus == Focus::Canvas);
    let title = format!(
        "─ Canvas [{} tables, {} connections] ",
        app.canvas.nodes().len(),
        app.canvas.connections().len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.canvas_area = inner;

    let paths = app.routed_paths();
    let scene = render_scene(
        &app.canvas,
        &paths,
        app.scroll_x,
        app.scroll_y,
        inner.width as usize,
        inner.height as usize,
    );

    let now = Instant::now();
    let glowing = app.canvas.glow().glowing_table(now).cloned();
    let active_connector = app.midpoint_drag.active_index();
    let text = styled_scene_text(&scene, glowing.as_ref(), active_connector);
    frame.render_widget(Paragraph::new(text), inner);
}

/// Turns the scene grid into styled lines: glow nodes yellow, the actively
/// dragged connector cyan.
fn styled_scene_text(
    scene: &SceneRender,
    glowing: Option<&TableId>,
    active_connector: Option<usize>,
) -> Text<'static> {
    let lines = scene.lines();
    let mut flags = lines
        .iter()
        .map(|line| vec![0u8; line.chars().count()])
        .collect::<Vec<_>>();

    let mut mark = |spans: &[(usize, usize, usize)], bit: u8| {
        for &(y, x0, x1) in spans {
            if let Some(row) = flags.get_mut(y) {
                for x in x0..=x1.min(row.len().saturating_sub(1)) {
                    row[x] |= bit;
                }
            }
        }
    };

    if let Some(table_id) = glowing {
        mark(scene.spans_for(&SceneObject::Node(table_id.clone())), 0b01);
    }
    if let Some(index) = active_connector {
        mark(scene.spans_for(&SceneObject::Connector(index)), 0b10);
    }

    let styled = lines
        .into_iter()
        .zip(flags)
        .map(|(line, row)| {
            let mut spans = Vec::<Span<'static>>::new();
            let mut buffer = String::new();
            let mut current = 0u8;
            for (ch, flag) in line.chars().zip(row) {
                if flag != current && !buffer.is_empty() {
                    spans.push(styled_span(std::mem::take(&mut buffer), current));
                }
                current = flag;
                buffer.push(ch);
            }
            if !buffer.is_empty() {
                spans.push(styled_span(buffer, current));
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(styled)
}

fn styled_span(content: String, flag: u8) -> Span<'static> {
    if flag & 0b10 != 0 {
        Span::styled(content, Style::default().fg(DRAG_COLOR))
    } else if flag & 0b01 != 0 {
        Span::styled(content, Style::default().fg(GLOW_COLOR))
    } else {
        Span::raw(content)
    }
}

fn panel_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    }
}

fn draw_footer(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };

    let status = Paragraph::new(footer_help_line(app, &toast_suffix));
    frame.render_widget(status, area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, area);
}

fn footer_help_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    let mut push_hint = |key: &str, label: &str| {
        spans.push(Span::styled(format!(" {key}"), Style::default().fg(FOOTER_KEY_COLOR)));
        spans.push(Span::styled(format!(" {label} "), Style::default().fg(FOOTER_LABEL_COLOR)));
    };

    match app.drag_feedback() {
        Some(feedback) => {
            spans.push(Span::styled(feedback, Style::default().fg(DRAG_COLOR)));
        }
        None => {
            push_hint("q", "quit");
            push_hint("tab", "focus");
            push_hint("/", "filter");
            push_hint("enter", "place");
            push_hint("drag", "tables/columns/midpoints");
        }
    }

    if !toast_suffix.is_empty() {
        spans.push(Span::styled(toast_suffix.to_owned(), Style::default().fg(GLOW_COLOR)));
    }

    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Palette,
    Canvas,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Palette => Self::Canvas,
            Self::Canvas => Self::Palette,
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// What the pointer is currently carrying, if anything.
#[derive(Debug, Clone, PartialEq)]
enum DragSession {
    /// A palette table, serialized at drag-start.
    PlaceTable { payload: String, name: String },
    /// A column row, serialized at drag-start.
    ConnectColumns { payload: String, name: String },
    /// Moving a node; the grab offset keeps the node under the pointer.
    MoveNode { table_id: TableId, grab_dx: f64, grab_dy: f64 },
    /// Resizing a node from its bottom-right corner.
    ResizeNode { table_id: TableId },
}

/// Where a pointer position landed inside a node.
#[derive(Debug, Clone, PartialEq)]
enum NodeHit {
    Remove(TableId),
    Title(TableId),
    Column(TableId, Column),
    ResizeGrip(TableId),
    Body(TableId),
}

struct App {
    catalog: Catalog,
    canvas: Canvas,
    midpoint_drag: MidpointDrag,
    drag: Option<DragSession>,
    focus: Focus,
    palette_state: ListState,
    palette_filter: String,
    filter_editing: bool,
    visible_palette_indices: Vec<usize>,
    scroll_x: f64,
    scroll_y: f64,
    palette_area: Rect,
    canvas_area: Rect,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(catalog: Catalog) -> Self {
        let visible_palette_indices: Vec<usize> = (0..catalog.len()).collect();
        let mut palette_state = ListState::default();
        if !visible_palette_indices.is_empty() {
            palette_state.select(Some(0));
        }

        Self {
            catalog,
            canvas: Canvas::new(),
            midpoint_drag: MidpointDrag::new(),
            drag: None,
            focus: Focus::Palette,
            palette_state,
            palette_filter: String::new(),
            filter_editing: false,
            visible_palette_indices,
            scroll_x: 0.0,
            scroll_y: 0.0,
            palette_area: Rect::default(),
            canvas_area: Rect::default(),
            toast: None,
            should_quit: false,
        }
    }

    fn tick(&mut self, now: Instant) {
        self.canvas.tick(now);
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }

    fn transform(&self) -> CanvasTransform {
        CanvasTransform::new(
            self.canvas_area.x as f64,
            self.canvas_area.y as f64,
            self.scroll_x,
            self.scroll_y,
        )
    }

    fn routed_paths(&self) -> Vec<ConnectorPath> {
        route_all(self.canvas.connections(), &self.midpoint_drag)
    }

    fn drag_feedback(&self) -> Option<String> {
        match &self.drag {
            Some(DragSession::PlaceTable { name, .. }) => {
                Some(format!(" placing {name} — release over the canvas"))
            }
            Some(DragSession::ConnectColumns { name, .. }) => {
                Some(format!(" connecting {name} — release over a column"))
            }
            Some(DragSession::MoveNode { .. }) | Some(DragSession::ResizeNode { .. }) => None,
            None if self.midpoint_drag.is_active() => Some(" bending connector".to_owned()),
            None => None,
        }
    }

    fn selected_palette_table(&self) -> Option<&Table> {
        let visible_index = self.palette_state.selected()?;
        let catalog_index = *self.visible_palette_indices.get(visible_index)?;
        self.catalog.tables().get(catalog_index)
    }

    fn refilter_palette(&mut self) {
        self.visible_palette_indices =
            search::ranked_palette_indices(&self.catalog, &self.palette_filter);
        let selected = if self.visible_palette_indices.is_empty() { None } else { Some(0) };
        self.palette_state.select(selected);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.filter_editing {
            self.handle_filter_edit_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.cycle(),
            KeyCode::Char('/') => {
                self.focus = Focus::Palette;
                self.filter_editing = true;
            }
            KeyCode::Esc => {
                self.palette_filter.clear();
                self.refilter_palette();
            }
            KeyCode::Enter if self.focus == Focus::Palette => self.place_selected_table(),
            KeyCode::Up | KeyCode::Char('k') if self.focus == Focus::Palette => {
                self.move_palette_selection(-1)
            }
            KeyCode::Down | KeyCode::Char('j') if self.focus == Focus::Palette => {
                self.move_palette_selection(1)
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_canvas(0.0, -CANVAS_SCROLL_STEP),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_canvas(0.0, CANVAS_SCROLL_STEP),
            KeyCode::Left | KeyCode::Char('h') => self.scroll_canvas(-CANVAS_SCROLL_STEP, 0.0),
            KeyCode::Right | KeyCode::Char('l') => self.scroll_canvas(CANVAS_SCROLL_STEP, 0.0),
            _ => {}
        }
    }

    fn handle_filter_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.filter_editing = false;
                self.palette_filter.clear();
                self.refilter_palette();
            }
            KeyCode::Enter => self.filter_editing = false,
            KeyCode::Backspace => {
                self.palette_filter.pop();
                self.refilter_palette();
            }
            KeyCode::Char(ch) => {
                self.palette_filter.push(ch);
                self.refilter_palette();
            }
            _ => {}
        }
    }

    fn move_palette_selection(&mut self, delta: i64) {
        if self.visible_palette_indices.is_empty() {
            return;
        }
        let len = self.visible_palette_indices.len() as i64;
        let current = self.palette_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).rem_euclid(len);
        self.palette_state.select(Some(next as usize));
    }

    fn scroll_canvas(&mut self, dx: f64, dy: f64) {
        if self.focus != Focus::Canvas {
            return;
        }
        self.scroll_x = (self.scroll_x + dx).max(0.0);
        self.scroll_y = (self.scroll_y + dy).max(0.0);
    }

    /// Keyboard path through the same drop pipeline the mouse uses.
    fn place_selected_table(&mut self) {
        let Some(table) = self.selected_palette_table() else {
            return;
        };
        let payload = dnd::encode_table_payload(table);
        let target = DropTarget::Surface {
            x: self.scroll_x + KEYBOARD_DROP_X,
            y: self.scroll_y + KEYBOARD_DROP_Y,
        };
        self.apply_drop(Some(&payload), target, Instant::now());
    }

    fn handle_viewport_resize(&mut self) {
        self.canvas.viewport_resized();
        self.midpoint_drag.clear_after_refresh();
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let screen = Point::new(mouse.column as f64, mouse.row as f64);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.pointer_down(mouse, screen, now),
            MouseEventKind::Drag(MouseButton::Left) => self.pointer_drag(mouse, screen),
            MouseEventKind::Up(MouseButton::Left) => self.pointer_up(mouse, screen, now),
            MouseEventKind::Moved => self.pointer_moved(mouse),
            _ => {}
        }
    }

    fn pointer_down(&mut self, mouse: MouseEvent, screen: Point, _now: Instant) {
        if rect_contains(self.palette_area, mouse.column, mouse.row) {
            self.focus = Focus::Palette;
            let row = (mouse.row - self.palette_area.y) as usize;
            if row < self.visible_palette_indices.len() {
                self.palette_state.select(Some(row));
                let session = self.selected_palette_table().map(|table| DragSession::PlaceTable {
                    payload: dnd::encode_table_payload(table),
                    name: table.name().to_owned(),
                });
                self.drag = session;
            }
            return;
        }

        if !rect_contains(self.canvas_area, mouse.column, mouse.row) {
            return;
        }
        self.focus = Focus::Canvas;
        let point = self.transform().to_canvas(screen);

        // Midpoint handles sit on top of everything else; z-order favors the
        // most recently added connector.
        if let Some(index) = midpoint_hit(&self.routed_paths(), point) {
            self.midpoint_drag.start(index);
            return;
        }

        match node_hit(&self.canvas, point) {
            Some(NodeHit::Remove(table_id)) => {
                self.canvas.remove_table(&table_id);
                self.midpoint_drag.clear_after_refresh();
                self.set_toast(format!("removed {table_id}"));
            }
            Some(NodeHit::Column(table_id, column)) => {
                self.drag = Some(DragSession::ConnectColumns {
                    payload: dnd::encode_column_payload(&column, &table_id),
                    name: column.name().to_owned(),
                });
            }
            Some(NodeHit::ResizeGrip(table_id)) => {
                self.drag = Some(DragSession::ResizeNode { table_id });
            }
            Some(NodeHit::Title(table_id)) | Some(NodeHit::Body(table_id)) => {
                let frame = self
                    .canvas
                    .node(&table_id)
                    .map(TableNode::frame)
                    .expect("hit node is open");
                self.drag = Some(DragSession::MoveNode {
                    table_id,
                    grab_dx: point.x - frame.x,
                    grab_dy: point.y - frame.y,
                });
            }
            None => {}
        }
    }

    fn pointer_drag(&mut self, mouse: MouseEvent, screen: Point) {
        if self.midpoint_drag.is_active() {
            if !rect_contains(self.canvas_area, mouse.column, mouse.row) {
                // Pointer left the canvas: the session ends, the override
                // stays until the next geometry refresh.
                self.midpoint_drag.finish();
                return;
            }
            let transform = self.transform();
            self.midpoint_drag.drag_to(screen, &transform);
            return;
        }

        let point = self.transform().to_canvas(screen);
        match self.drag.clone() {
            Some(DragSession::MoveNode { table_id, grab_dx, grab_dy }) => {
                self.canvas.move_node(&table_id, point.x - grab_dx, point.y - grab_dy);
                self.midpoint_drag.clear_after_refresh();
            }
            Some(DragSession::ResizeNode { table_id }) => {
                if let Some(frame) = self.canvas.node(&table_id).map(TableNode::frame) {
                    self.canvas.resize_node(
                        &table_id,
                        point.x - frame.x + 1.0,
                        point.y - frame.y + 1.0,
                    );
                    self.midpoint_drag.clear_after_refresh();
                }
            }
            _ => {}
        }
    }

    fn pointer_up(&mut self, mouse: MouseEvent, screen: Point, now: Instant) {
        if self.midpoint_drag.is_active() {
            self.midpoint_drag.finish();
            return;
        }

        let drag = self.drag.take();
        let over_canvas = rect_contains(self.canvas_area, mouse.column, mouse.row);
        let point = self.transform().to_canvas(screen);

        match drag {
            Some(DragSession::PlaceTable { payload, .. }) if over_canvas => {
                let target = DropTarget::Surface { x: point.x, y: point.y };
                self.apply_drop(Some(&payload), target, now);
            }
            Some(DragSession::ConnectColumns { payload, .. }) if over_canvas => {
                match node_hit(&self.canvas, point) {
                    Some(NodeHit::Column(table_id, column)) => {
                        let target = DropTarget::ColumnRow { table_id, column };
                        self.apply_drop(Some(&payload), target, now);
                    }
                    // Released over the surface, not a column row: there is
                    // no drop target; the drag dissolves.
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn pointer_moved(&mut self, mouse: MouseEvent) {
        // Move events with no button carry "the pointer left the canvas" for
        // every kind of session.
        if rect_contains(self.canvas_area, mouse.column, mouse.row) {
            return;
        }
        if self.midpoint_drag.is_active() {
            self.midpoint_drag.finish();
        }
        if matches!(
            self.drag,
            Some(DragSession::MoveNode { .. }) | Some(DragSession::ResizeNode { .. })
        ) {
            self.drag = None;
        }
    }

    fn apply_drop(&mut self, raw: Option<&str>, target: DropTarget, now: Instant) {
        match dnd::handle_drop(&mut self.canvas, raw, target, now) {
            Ok(DropOutcome::TablePlaced(table_id)) => {
                self.set_toast(format!("placed {table_id}"));
            }
            Ok(DropOutcome::DuplicateTable(table_id)) => {
                self.set_toast(format!("{table_id} is already open"));
            }
            Ok(DropOutcome::ConnectionAdded) => self.set_toast("connected"),
            Ok(DropOutcome::SelfConnectionRejected) => {
                self.set_toast("cannot connect a table to itself");
            }
            Ok(DropOutcome::EndpointUnresolved) => {
                self.set_toast("column position unknown, try again");
            }
            Err(err) => self.set_toast(err.to_string()),
        }
    }
}

fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// Topmost midpoint handle within reach of `point`, honoring z-order.
fn midpoint_hit(paths: &[ConnectorPath], point: Point) -> Option<usize> {
    paths
        .iter()
        .enumerate()
        .rev()
        .find(|(_, path)| path.mid().distance_to(point) <= MIDPOINT_HANDLE_RADIUS)
        .map(|(index, _)| index)
}

/// Topmost node region under `point`, honoring z-order.
fn node_hit(canvas: &Canvas, point: Point) -> Option<NodeHit> {
    let node = canvas
        .nodes()
        .iter()
        .rev()
        .find(|node| node.frame().contains(point.x, point.y))?;
    let frame = node.frame();
    let table_id = node.table().id().clone();

    let title_row = point.y >= frame.y + 1.0 && point.y < frame.y + 2.0;
    if title_row && point.x >= frame.right() - 3.0 {
        return Some(NodeHit::Remove(table_id));
    }
    if title_row {
        return Some(NodeHit::Title(table_id));
    }

    if point.x >= frame.right() - 2.0 && point.y >= frame.bottom() - 1.0 {
        return Some(NodeHit::ResizeGrip(table_id));
    }

    let row_offset = point.y - frame.y - NODE_HEADER_ROWS;
    if row_offset >= 0.0 {
        let row = row_offset as usize;
        if row < node.visible_rows() {
            let column = node.table().columns()[row].clone();
            return Some(NodeHit::Column(table_id, column));
        }
    }

    Some(NodeHit::Body(table_id))
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}
