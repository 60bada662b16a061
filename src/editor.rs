// ============================================================================
// EDITOR: applies tools to the canvas and owns the undo history
// ============================================================================
//
// Coordinates arriving here are already in canvas cells; screen translation is
// the viewport's job. Every mutating gesture pushes one pre-edit snapshot.

use crate::canvas::{Color, PixelBuffer, Point};
use crate::components::colors::ColorsPanel;
use crate::components::history::HistoryManager;
use crate::components::tools::Tool;
use crate::ops::fill::flood_fill;
use crate::ops::shapes::{self, ShapeKind};
use crate::{log_info, log_warn};

/// Active drag of a shape tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ShapeDrag {
    kind: ShapeKind,
    start: Point,
}

/// Freehand gesture in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Stroke {
    last: Point,
    /// Set once the stroke has touched the canvas and pushed its snapshot.
    recorded: bool,
}

pub struct Editor {
    canvas: PixelBuffer,
    history: HistoryManager,
    pub tool: Tool,
    pub colors: ColorsPanel,
    drag: Option<ShapeDrag>,
    stroke: Option<Stroke>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(PixelBuffer::default())
    }
}

impl Editor {
    pub fn new(canvas: PixelBuffer) -> Self {
        Self {
            canvas,
            history: HistoryManager::default(),
            tool: Tool::default(),
            colors: ColorsPanel::default(),
            drag: None,
            stroke: None,
        }
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Switch tools. A gesture in progress is abandoned.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        self.cancel_gesture();
        self.tool = tool;
    }

    // ------------------------------------------------------------------------
    // Pointer gestures
    // ------------------------------------------------------------------------

    pub fn pointer_down(&mut self, p: Point) {
        match self.tool.shape() {
            Some(kind) => {
                self.history.checkpoint(&self.canvas);
                self.drag = Some(ShapeDrag { kind, start: p });
            }
            None => {
                let recorded = self.apply_tool(p, true);
                self.stroke = Some(Stroke { last: p, recorded });
            }
        }
    }

    /// Non-shape tools are applied at every cell between the previous
    /// position and `p`, so fast pointer motion leaves no gaps. Fill re-runs
    /// at each of those cells with its own snapshot.
    pub fn pointer_move(&mut self, p: Point) {
        let Some(mut stroke) = self.stroke else {
            return;
        };
        for q in shapes::line_points(stroke.last.x, stroke.last.y, p.x, p.y) {
            if self.apply_tool(q, !stroke.recorded) {
                stroke.recorded = true;
            }
        }
        stroke.last = p;
        self.stroke = Some(stroke);
    }

    pub fn pointer_up(&mut self, p: Point) {
        if let Some(drag) = self.drag.take() {
            self.commit_shape(drag, p);
        }
        self.stroke = None;
    }

    /// Cells the shape being dragged would cover if released at `cursor`.
    /// Empty when no shape is being dragged.
    pub fn shape_preview(&self, cursor: Point) -> Vec<Point> {
        match self.drag {
            Some(drag) => drag.kind.points(drag.start, cursor),
            None => Vec::new(),
        }
    }

    /// Apply the current tool at a single cell. `new_stroke` marks the first
    /// cell of a gesture, where freehand tools record their undo snapshot.
    ///
    /// Returns `false` when `p` is off the canvas and nothing happened.
    pub fn apply_tool(&mut self, p: Point, new_stroke: bool) -> bool {
        if !self.canvas.in_bounds(p.x, p.y) {
            return false;
        }

        match self.tool {
            Tool::Pencil => {
                if new_stroke {
                    self.history.checkpoint(&self.canvas);
                }
                self.canvas.set(p.x, p.y, self.colors.get_primary_color());
            }
            Tool::Eraser => {
                if new_stroke {
                    self.history.checkpoint(&self.canvas);
                }
                self.canvas.set(p.x, p.y, self.colors.get_secondary_color());
            }
            Tool::Fill => {
                self.history.checkpoint(&self.canvas);
                flood_fill(&mut self.canvas, p.x, p.y, self.colors.get_primary_color());
            }
            Tool::ColorPicker => {
                self.colors.primary_color = self.canvas.get(p.x, p.y);
            }
            Tool::Line | Tool::Rectangle | Tool::Circle => {}
        }
        true
    }

    fn commit_shape(&mut self, drag: ShapeDrag, end: Point) {
        let points = drag.kind.points(drag.start, end);
        shapes::plot(&mut self.canvas, &points, self.colors.get_primary_color());
    }

    // ------------------------------------------------------------------------
    // Document commands
    // ------------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        self.cancel_gesture();
        let done = self.history.undo(&mut self.canvas);
        if done {
            log_info!("Undo ({} left)", self.history.undo_count());
        }
        done
    }

    pub fn redo(&mut self) -> bool {
        self.cancel_gesture();
        let done = self.history.redo(&mut self.canvas);
        if done {
            log_info!("Redo ({} left)", self.history.redo_count());
        }
        done
    }

    /// Wipe the canvas to white, undoably.
    pub fn new_canvas(&mut self) {
        self.cancel_gesture();
        self.history.checkpoint(&self.canvas);
        self.canvas.clear(Color::WHITE);
    }

    /// Change the canvas size, keeping the top-left content.
    ///
    /// The pre-resize snapshot is still pushed, but restoring it onto the new
    /// size is ignored by [`PixelBuffer::restore`].
    pub fn resize_canvas(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log_warn!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.cancel_gesture();
        self.history.checkpoint(&self.canvas);
        self.canvas.resize(width, height);
        log_info!("Canvas resized to {}x{}", width, height);
    }

    /// Swap in a freshly loaded buffer.
    pub fn replace_canvas(&mut self, canvas: PixelBuffer) {
        self.cancel_gesture();
        self.history.checkpoint(&self.canvas);
        self.canvas = canvas;
    }

    pub fn swap_colors(&mut self) {
        self.colors.swap_colors();
    }

    pub fn select_palette(&mut self, index: usize, secondary: bool) -> bool {
        self.colors.pick_swatch(index, secondary)
    }

    /// Drop a gesture in progress without committing it. A shape drag has
    /// already pushed its snapshot, which then simply records no change.
    fn cancel_gesture(&mut self) {
        self.drag = None;
        self.stroke = None;
    }
}
