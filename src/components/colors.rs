use egui::{Color32, Sense, Stroke, Vec2};

use crate::canvas::Color;

// ============================================================================
// Palette table
// ============================================================================

/// Fixed swatch table shown under the canvas, in display order.
pub const PALETTE: [(&str, Color); 24] = [
    ("Black", Color::rgb(0, 0, 0)),
    ("Dark Gray", Color::rgb(127, 127, 127)),
    ("Light Gray", Color::rgb(195, 195, 195)),
    ("White", Color::rgb(255, 255, 255)),
    ("Dark Red", Color::rgb(136, 0, 21)),
    ("Red", Color::rgb(237, 28, 36)),
    ("Orange", Color::rgb(255, 127, 39)),
    ("Yellow", Color::rgb(255, 242, 0)),
    ("Green", Color::rgb(34, 177, 76)),
    ("Light Blue", Color::rgb(0, 162, 232)),
    ("Blue", Color::rgb(63, 72, 204)),
    ("Purple", Color::rgb(163, 73, 164)),
    ("Brown", Color::rgb(185, 122, 87)),
    ("Pink", Color::rgb(255, 174, 201)),
    ("Gold", Color::rgb(255, 201, 14)),
    ("Sky Blue", Color::rgb(153, 217, 234)),
    ("Steel Blue", Color::rgb(112, 146, 190)),
    ("Lavender", Color::rgb(200, 191, 231)),
    ("Light Red", Color::rgb(255, 127, 127)),
    ("Light Green", Color::rgb(127, 255, 127)),
    ("Light Purple", Color::rgb(127, 127, 255)),
    ("Light Yellow", Color::rgb(255, 255, 127)),
    ("Cyan", Color::rgb(127, 255, 255)),
    ("Magenta", Color::rgb(255, 127, 255)),
];

pub const SWATCHES_PER_ROW: usize = 12;
const SWATCH_SIZE: f32 = 26.0;

pub fn palette_color(index: usize) -> Option<Color> {
    PALETTE.get(index).map(|&(_, c)| c)
}

// ============================================================================
// ColorsPanel: foreground / background pair plus the swatch grid
// ============================================================================

pub struct ColorsPanel {
    /// Pencil, shapes and fill paint with this.
    pub primary_color: Color,
    /// Eraser paints with this.
    pub secondary_color: Color,
}

impl Default for ColorsPanel {
    fn default() -> Self {
        Self {
            primary_color: Color::BLACK,
            secondary_color: Color::WHITE,
        }
    }
}

impl ColorsPanel {
    pub fn get_primary_color(&self) -> Color {
        self.primary_color
    }

    pub fn get_secondary_color(&self) -> Color {
        self.secondary_color
    }

    pub fn swap_colors(&mut self) {
        std::mem::swap(&mut self.primary_color, &mut self.secondary_color);
    }

    /// Assign swatch `index` to the primary color, or the secondary one when
    /// `secondary` is set. Returns `false` for an unknown index.
    pub fn pick_swatch(&mut self, index: usize, secondary: bool) -> bool {
        let Some(color) = palette_color(index) else {
            return false;
        };
        if secondary {
            self.secondary_color = color;
        } else {
            self.primary_color = color;
        }
        true
    }

    /// Swatch grid. Left click sets the primary color, right click the secondary.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let mut picked: Option<(usize, bool)> = None;

        ui.spacing_mut().item_spacing = Vec2::splat(3.0);
        for (row, chunk) in PALETTE.chunks(SWATCHES_PER_ROW).enumerate() {
            ui.horizontal(|ui| {
                for (col, &(name, color)) in chunk.iter().enumerate() {
                    let index = row * SWATCHES_PER_ROW + col;
                    let (rect, resp) =
                        ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
                    let painter = ui.painter();
                    painter.rect_filled(rect, 2.0, Color32::from(color));

                    let outline = if color == self.primary_color {
                        Stroke::new(2.0, Color32::WHITE)
                    } else if resp.hovered() {
                        Stroke::new(1.0, Color32::LIGHT_GRAY)
                    } else {
                        Stroke::new(1.0, Color32::from_gray(60))
                    };
                    painter.rect_stroke(rect, 2.0, outline);

                    let resp = resp.on_hover_text(name);
                    if resp.clicked() {
                        picked = Some((index, false));
                    } else if resp.secondary_clicked() {
                        picked = Some((index, true));
                    }
                }
            });
        }

        if let Some((index, secondary)) = picked {
            self.pick_swatch(index, secondary);
        }
    }

    /// Overlapping foreground/background squares, as in the toolbar corner.
    /// Returns `true` when clicked (callers swap the colors).
    pub fn show_preview(&self, ui: &mut egui::Ui) -> bool {
        let (rect, resp) = ui.allocate_exact_size(Vec2::new(44.0, 36.0), Sense::click());
        let painter = ui.painter();

        let bg = egui::Rect::from_min_size(rect.min + Vec2::new(16.0, 10.0), Vec2::splat(24.0));
        let fg = egui::Rect::from_min_size(rect.min + Vec2::new(4.0, 2.0), Vec2::splat(24.0));
        painter.rect_filled(bg, 0.0, Color32::from(self.secondary_color));
        painter.rect_stroke(bg, 0.0, Stroke::new(1.0, Color32::GRAY));
        painter.rect_filled(fg, 0.0, Color32::from(self.primary_color));
        painter.rect_stroke(fg, 0.0, Stroke::new(1.0, Color32::WHITE));

        resp.on_hover_text("Foreground / background (X to swap)").clicked()
    }
}
