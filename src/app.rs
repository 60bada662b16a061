use std::path::{Path, PathBuf};

use egui::{
    Color32, ColorImage, Event, Key, Modifiers, PointerButton, Pos2, Rect, Sense, Stroke,
    TextureOptions,
};

use crate::canvas::{PixelBuffer, Point, Viewport};
use crate::cli::CanvasConfig;
use crate::components::tools::{self, Tool};
use crate::editor::Editor;
use crate::io;
use crate::{log_err, log_info};

const BACKGROUND: Color32 = Color32::from_rgb(40, 40, 46);
const CURSOR_OUTLINE: Color32 = Color32::from_rgb(255, 200, 0);
/// Grid lines are hidden below this many screen pixels per cell.
const GRID_MIN_ZOOM: f32 = 4.0;

// ============================================================================
// COMMANDS
// ============================================================================

/// Everything a keyboard shortcut or toolbar button can ask for.
#[derive(Clone, Debug, PartialEq)]
pub enum AppCommand {
    SelectTool(Tool),
    ToggleGrid,
    SwapColors,
    ZoomIn,
    ZoomOut,
    Undo,
    Redo,
    Save,
    SaveAs,
    Open,
    OpenDialog,
    NewCanvas,
    FitCanvas,
    ToggleFullscreen,
}

/// Command bound to a single key press, if any.
fn key_command(key: Key, modifiers: Modifiers) -> Option<AppCommand> {
    if modifiers.command {
        return match key {
            Key::Z if modifiers.shift => Some(AppCommand::Redo),
            Key::Z => Some(AppCommand::Undo),
            Key::S if modifiers.shift => Some(AppCommand::SaveAs),
            Key::S => Some(AppCommand::Save),
            Key::O if modifiers.shift => Some(AppCommand::OpenDialog),
            Key::O => Some(AppCommand::Open),
            Key::N => Some(AppCommand::NewCanvas),
            Key::Num0 => Some(AppCommand::FitCanvas),
            Key::Enter => Some(AppCommand::ToggleFullscreen),
            _ => None,
        };
    }
    match key {
        Key::G => Some(AppCommand::ToggleGrid),
        Key::X => Some(AppCommand::SwapColors),
        Key::Space => Some(AppCommand::FitCanvas),
        Key::F11 => Some(AppCommand::ToggleFullscreen),
        _ => {
            let mut chars = key.name().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Tool::from_shortcut(c).map(AppCommand::SelectTool),
                _ => None,
            }
        }
    }
}

/// Translate this frame's key presses into commands.
fn shortcut_commands(input: &egui::InputState) -> Vec<AppCommand> {
    let mut out = Vec::new();
    for event in &input.events {
        match event {
            Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => out.extend(key_command(*key, *modifiers)),
            // Zoom keys sit on different physical keys per layout.
            Event::Text(text) if !input.modifiers.command => match text.as_str() {
                "+" | "=" => out.push(AppCommand::ZoomIn),
                "-" => out.push(AppCommand::ZoomOut),
                _ => {}
            },
            _ => {}
        }
    }
    out
}

/// What the primary button did to the canvas this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DrawEvent {
    Down,
    Move,
    Up,
}

#[derive(Clone, Copy, Debug, Default)]
struct PointerSample {
    pressed: bool,
    released: bool,
    down: bool,
    moved: bool,
    /// Pointer position is known, over the canvas and not panning.
    over_canvas: bool,
}

/// A gesture ends as soon as the button is seen up, whether or not the
/// release itself or a pointer position arrived this frame.
fn draw_event(drawing: bool, s: PointerSample) -> Option<DrawEvent> {
    if drawing {
        if s.released || !s.down {
            Some(DrawEvent::Up)
        } else if s.moved {
            Some(DrawEvent::Move)
        } else {
            None
        }
    } else if s.pressed && s.over_canvas {
        Some(DrawEvent::Down)
    } else {
        None
    }
}

// ============================================================================
// APPLICATION
// ============================================================================

pub struct TinyCanvasApp {
    editor: Editor,
    viewport: Viewport,
    show_grid: bool,
    fullscreen: bool,
    document_path: PathBuf,
    texture: Option<egui::TextureHandle>,
    /// Canvas pixels changed since the texture was last uploaded.
    texture_dirty: bool,
    /// Fit the canvas to the view on the next frame (after load / at start).
    needs_fit: bool,
    /// Primary button went down over the canvas and has not been released.
    drawing: bool,
    /// Last cell handed to the editor during the current gesture.
    last_draw_cell: Point,
    /// Secondary or middle button is dragging the view.
    panning: bool,
    cursor_cell: Option<Point>,
    status: String,
}

impl TinyCanvasApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        Self {
            editor: Editor::new(PixelBuffer::new(config.width, config.height)),
            viewport: Viewport::default(),
            show_grid: true,
            fullscreen: false,
            document_path: PathBuf::from(io::DEFAULT_DOCUMENT),
            texture: None,
            texture_dirty: true,
            needs_fit: true,
            drawing: false,
            last_draw_cell: Point::default(),
            panning: false,
            cursor_cell: None,
            status: String::new(),
        }
    }

    fn execute(&mut self, ctx: &egui::Context, command: AppCommand) {
        match command {
            AppCommand::SelectTool(tool) => self.editor.set_tool(tool),
            AppCommand::ToggleGrid => self.show_grid = !self.show_grid,
            AppCommand::SwapColors => self.editor.swap_colors(),
            AppCommand::ZoomIn => self.viewport.zoom_in(),
            AppCommand::ZoomOut => self.viewport.zoom_out(),
            AppCommand::Undo => {
                if self.editor.undo() {
                    self.texture_dirty = true;
                }
            }
            AppCommand::Redo => {
                if self.editor.redo() {
                    self.texture_dirty = true;
                }
            }
            AppCommand::Save => {
                let path = self.document_path.clone();
                self.save_to(&path);
            }
            AppCommand::SaveAs => {
                if let Some(path) = io::pick_save_path(&self.document_path) {
                    self.save_to(&path);
                    self.document_path = path;
                }
            }
            AppCommand::Open => {
                let path = self.document_path.clone();
                self.load_from(&path);
            }
            AppCommand::OpenDialog => {
                if let Some(path) = io::pick_open_path() {
                    if self.load_from(&path) {
                        self.document_path = path;
                    }
                }
            }
            AppCommand::NewCanvas => {
                self.editor.new_canvas();
                self.texture_dirty = true;
                self.status = "New canvas".to_string();
            }
            AppCommand::FitCanvas => self.needs_fit = true,
            AppCommand::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.fullscreen));
            }
        }
    }

    fn save_to(&mut self, path: &Path) {
        match io::save_image(self.editor.canvas(), path) {
            Ok(()) => {
                log_info!("Saved: {}", path.display());
                self.status = format!("Saved: {}", path.display());
            }
            Err(e) => {
                log_err!("Failed to save {}: {}", path.display(), e);
                self.status = format!("Failed to save {}: {}", path.display(), e);
            }
        }
    }

    fn load_from(&mut self, path: &Path) -> bool {
        match io::load_image(path) {
            Ok(buffer) => {
                let (w, h) = (buffer.width(), buffer.height());
                self.editor.replace_canvas(buffer);
                self.texture_dirty = true;
                self.needs_fit = true;
                log_info!("Loaded: {} ({}x{})", path.display(), w, h);
                self.status = format!("Loaded: {} ({}x{})", path.display(), w, h);
                true
            }
            Err(e) => {
                log_err!("Failed to load {}: {}", path.display(), e);
                self.status = format!("Failed to load {}: {}", path.display(), e);
                false
            }
        }
    }

    // ------------------------------------------------------------------------
    // Panels
    // ------------------------------------------------------------------------

    fn toolbar_ui(&mut self, ui: &mut egui::Ui) -> Vec<AppCommand> {
        let mut commands = Vec::new();
        ui.horizontal(|ui| {
            if let Some(tool) = tools::show_tool_buttons(ui, self.editor.tool) {
                commands.push(AppCommand::SelectTool(tool));
            }
            ui.separator();
            let history = self.editor.history();
            if ui
                .add_enabled(history.can_undo(), egui::Button::new("Undo"))
                .on_hover_text("Undo (Ctrl+Z)")
                .clicked()
            {
                commands.push(AppCommand::Undo);
            }
            if ui
                .add_enabled(history.can_redo(), egui::Button::new("Redo"))
                .on_hover_text("Redo (Ctrl+Shift+Z)")
                .clicked()
            {
                commands.push(AppCommand::Redo);
            }
            ui.separator();
            if ui
                .add(egui::Button::new("#").min_size(egui::vec2(36.0, 36.0)).selected(self.show_grid))
                .on_hover_text("Grid (G)")
                .clicked()
            {
                commands.push(AppCommand::ToggleGrid);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.editor.colors.show_preview(ui) {
                    commands.push(AppCommand::SwapColors);
                }
            });
        });
        commands
    }

    fn status_text(&self) -> String {
        let canvas = self.editor.canvas();
        let pos = match self.cursor_cell {
            Some(p) if canvas.in_bounds(p.x, p.y) => format!("({}, {})", p.x, p.y),
            _ => "-".to_string(),
        };
        let history = self.editor.history();
        format!(
            "{}  |  {}  |  {}x{}  |  {:.1}x  |  undo {} / redo {} ({} KiB)  |  {}",
            self.editor.tool.label(),
            pos,
            canvas.width(),
            canvas.height(),
            self.viewport.zoom,
            history.undo_count(),
            history.redo_count(),
            history.memory_usage() / 1024,
            self.status
        )
    }

    // ------------------------------------------------------------------------
    // Canvas
    // ------------------------------------------------------------------------

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let area = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(area, Sense::click_and_drag());
        let (w, h) = (self.editor.canvas().width(), self.editor.canvas().height());

        if self.needs_fit {
            self.viewport.fit(area, w, h);
            self.needs_fit = false;
        }

        self.handle_pointer(ui, &response, area);
        self.upload_texture(ui.ctx());
        self.paint(ui, area);
    }

    fn handle_pointer(&mut self, ui: &egui::Ui, response: &egui::Response, area: Rect) {
        let (w, h) = (self.editor.canvas().width(), self.editor.canvas().height());
        let (latest, scroll, delta, primary, pan_pressed, pan_down) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.scroll_delta.y,
                i.pointer.delta(),
                PointerSample {
                    pressed: i.pointer.primary_pressed(),
                    released: i.pointer.primary_released(),
                    down: i.pointer.primary_down(),
                    moved: i.pointer.delta() != egui::Vec2::ZERO,
                    over_canvas: false,
                },
                i.pointer.button_pressed(PointerButton::Secondary)
                    || i.pointer.button_pressed(PointerButton::Middle),
                i.pointer.button_down(PointerButton::Secondary)
                    || i.pointer.button_down(PointerButton::Middle),
            )
        });
        let hovered = response.hovered();

        // Pan
        if pan_pressed && hovered {
            self.panning = true;
        }
        if self.panning {
            if pan_down {
                self.viewport.pan_by(delta);
            } else {
                self.panning = false;
            }
        }

        // Zoom around the pointer
        if hovered && scroll != 0.0 {
            if let Some(pos) = latest {
                self.viewport.zoom_at(scroll > 0.0, pos, area, w, h);
            }
        }

        let cell = latest.map(|pos| self.viewport.screen_to_canvas(pos, area, w, h));
        self.cursor_cell = cell.filter(|_| hovered || self.drawing);

        // Draw
        let sample = PointerSample {
            over_canvas: hovered && !self.panning && cell.is_some(),
            ..primary
        };
        match (draw_event(self.drawing, sample), cell) {
            (Some(DrawEvent::Down), Some(cell)) => {
                self.drawing = true;
                self.last_draw_cell = cell;
                self.editor.pointer_down(cell);
                self.texture_dirty = true;
            }
            (Some(DrawEvent::Move), Some(cell)) => {
                self.last_draw_cell = cell;
                self.editor.pointer_move(cell);
                self.texture_dirty = true;
            }
            (Some(DrawEvent::Up), cell) => {
                self.drawing = false;
                self.editor.pointer_up(cell.unwrap_or(self.last_draw_cell));
                self.texture_dirty = true;
            }
            _ => {}
        }
    }

    fn upload_texture(&mut self, ctx: &egui::Context) {
        if !self.texture_dirty && self.texture.is_some() {
            return;
        }
        let canvas = self.editor.canvas();
        let image = ColorImage::from_rgba_unmultiplied(
            [canvas.width() as usize, canvas.height() as usize],
            &canvas.to_rgba_bytes(),
        );
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST)),
        }
        self.texture_dirty = false;
    }

    fn paint(&self, ui: &egui::Ui, area: Rect) {
        let painter = ui.painter_at(area);
        let canvas = self.editor.canvas();
        let (w, h) = (canvas.width(), canvas.height());
        let canvas_rect = self.viewport.canvas_rect(area, w, h);

        painter.rect_filled(area, 0.0, BACKGROUND);
        painter.rect_filled(canvas_rect, 0.0, Color32::from_gray(204));
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                canvas_rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        if self.show_grid && self.viewport.zoom >= GRID_MIN_ZOOM {
            let stroke = Stroke::new(1.0, Color32::from_black_alpha(40));
            let z = self.viewport.zoom;
            for x in 0..=w {
                let sx = canvas_rect.min.x + x as f32 * z;
                painter.line_segment([Pos2::new(sx, canvas_rect.min.y), Pos2::new(sx, canvas_rect.max.y)], stroke);
            }
            for y in 0..=h {
                let sy = canvas_rect.min.y + y as f32 * z;
                painter.line_segment([Pos2::new(canvas_rect.min.x, sy), Pos2::new(canvas_rect.max.x, sy)], stroke);
            }
        }

        if let Some(cursor) = self.cursor_cell {
            let fg = self.editor.colors.primary_color;
            let preview = Color32::from_rgba_unmultiplied(fg.r, fg.g, fg.b, 180);
            for p in self.editor.shape_preview(cursor) {
                if canvas.in_bounds(p.x, p.y) {
                    painter.rect_filled(self.viewport.cell_rect(p, area, w, h), 0.0, preview);
                }
            }
            if canvas.in_bounds(cursor.x, cursor.y) {
                painter.rect_stroke(
                    self.viewport.cell_rect(cursor, area, w, h),
                    0.0,
                    Stroke::new(1.5, CURSOR_OUTLINE),
                );
            }
        }

        painter.rect_stroke(canvas_rect, 0.0, Stroke::new(1.0, Color32::from_gray(90)));
    }
}

impl eframe::App for TinyCanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = ctx.input(shortcut_commands);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            commands.extend(self.toolbar_ui(ui));
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.status_text());
        });
        egui::TopBottomPanel::bottom("palette").show(ctx, |ui| {
            self.editor.colors.show(ui);
        });
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| self.canvas_ui(ui));

        for command in commands {
            self.execute(ctx, command);
        }

        let dt = ctx.input(|i| i.stable_dt);
        if self.viewport.animate(dt) || self.texture_dirty {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> Modifiers {
        Modifiers {
            command: true,
            ctrl: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_command(Key::Space, Modifiers::NONE), Some(AppCommand::FitCanvas));
        assert_eq!(key_command(Key::Enter, command()), Some(AppCommand::ToggleFullscreen));
        assert_eq!(key_command(Key::F11, Modifiers::NONE), Some(AppCommand::ToggleFullscreen));
        assert_eq!(key_command(Key::Num0, command()), Some(AppCommand::FitCanvas));
        assert_eq!(key_command(Key::Enter, Modifiers::NONE), None);
        assert_eq!(
            key_command(Key::I, Modifiers::NONE),
            Some(AppCommand::SelectTool(Tool::ColorPicker))
        );
        assert_eq!(key_command(Key::Z, command()), Some(AppCommand::Undo));
        let shifted = Modifiers {
            shift: true,
            ..command()
        };
        assert_eq!(key_command(Key::Z, shifted), Some(AppCommand::Redo));
        // Tool letters are plain keys only.
        assert_eq!(key_command(Key::P, command()), None);
    }

    #[test]
    fn test_release_ends_gesture_without_position() {
        // Button seen up with no release event and no pointer position.
        let gone = PointerSample::default();
        assert_eq!(draw_event(true, gone), Some(DrawEvent::Up));

        let released = PointerSample {
            released: true,
            moved: true,
            ..Default::default()
        };
        assert_eq!(draw_event(true, released), Some(DrawEvent::Up));
    }

    #[test]
    fn test_draw_event_sequence() {
        let press = PointerSample {
            pressed: true,
            down: true,
            over_canvas: true,
            ..Default::default()
        };
        assert_eq!(draw_event(false, press), Some(DrawEvent::Down));
        assert_eq!(draw_event(false, PointerSample { over_canvas: false, ..press }), None);

        let held = PointerSample {
            down: true,
            ..Default::default()
        };
        assert_eq!(draw_event(true, held), None);
        assert_eq!(draw_event(true, PointerSample { moved: true, ..held }), Some(DrawEvent::Move));
    }
}
