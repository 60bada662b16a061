use egui::{Color32, Pos2, Rect, Vec2};
use image::Rgba;

// ============================================================================
// COLOR & POINT
// ============================================================================

/// An RGBA color with 8 bits per channel. Equality is exact per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    /// Returned by [`PixelBuffer::get`] for coordinates outside the grid.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(p: Rgba<u8>) -> Self {
        Color::from(p.0)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba(c.to_array())
    }
}

impl From<Color> for Color32 {
    fn from(c: Color) -> Self {
        Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

/// Integer cell coordinate on the canvas grid. May lie outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

// ============================================================================
// PIXEL BUFFER
// ============================================================================

/// Frozen copy of a buffer's pixels, taken before a mutating gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pixels: Vec<Color>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn memory_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<Color>()
    }
}

/// Dense row-major grid of colors.
///
/// Every accessor is total: reads outside the grid return
/// [`Color::TRANSPARENT`] and writes outside the grid are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new(32, 32)
    }
}

impl PixelBuffer {
    /// Create an opaque white buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::new_filled(width, height, Color::WHITE)
    }

    pub fn new_filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build a buffer from tightly packed row-major RGBA bytes.
    /// Returns `None` when `data` does not hold exactly `width * height` pixels.
    pub fn from_rgba_bytes(width: u32, height: u32, data: &[u8]) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        let pixels = data
            .chunks_exact(4)
            .map(|px| Color::new(px[0], px[1], px[2], px[3]))
            .collect();
        Some(Self { width, height, pixels })
    }

    /// Row-major RGBA bytes, 4 per pixel, no padding.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Color {
        match self.index(x, y) {
            Some(i) => self.pixels[i],
            None => Color::TRANSPARENT,
        }
    }

    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixels: self.pixels.clone(),
        }
    }

    /// Replace every pixel with the snapshot's contents.
    ///
    /// A snapshot whose length differs from `width * height` (captured before a
    /// resize) is ignored.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.pixels.len() == self.pixels.len() {
            self.pixels.copy_from_slice(&snapshot.pixels);
        }
    }

    /// Reallocate at the new size. The overlapping top-left rectangle keeps its
    /// pixels; everything else becomes white.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        let mut resized = vec![Color::WHITE; new_width as usize * new_height as usize];
        let copy_w = self.width.min(new_width) as usize;
        let copy_h = self.height.min(new_height) as usize;
        let old_w = self.width as usize;
        let new_w = new_width as usize;
        for y in 0..copy_h {
            resized[y * new_w..y * new_w + copy_w]
                .copy_from_slice(&self.pixels[y * old_w..y * old_w + copy_w]);
        }
        self.width = new_width;
        self.height = new_height;
        self.pixels = resized;
    }
}

// ============================================================================
// VIEWPORT: pan / zoom between screen space and the canvas grid
// ============================================================================

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 128.0;
pub const DEFAULT_ZOOM: f32 = 12.0;

const WHEEL_ZOOM_STEP: f32 = 1.15;
const KEY_ZOOM_STEP: f32 = 1.25;
const ZOOM_SPEED: f32 = 12.0;

/// Screen pixels per canvas cell plus a pan offset from the centered position.
///
/// `zoom` is what is drawn this frame; `target_zoom` is where `animate` is
/// easing towards.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: f32,
    pub target_zoom: f32,
    pub pan: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            target_zoom: DEFAULT_ZOOM,
            pan: Vec2::ZERO,
        }
    }
}

impl Viewport {
    /// Centered origin for a given zoom, ignoring pan.
    fn centered_origin(zoom: f32, area: Rect, width: u32, height: u32) -> Pos2 {
        Pos2::new(
            area.min.x + (area.width() - width as f32 * zoom) / 2.0,
            area.min.y + (area.height() - height as f32 * zoom) / 2.0,
        )
    }

    /// Screen position of the canvas's top-left corner.
    pub fn origin(&self, area: Rect, width: u32, height: u32) -> Pos2 {
        Self::centered_origin(self.zoom, area, width, height) + self.pan
    }

    /// Screen rectangle covered by the whole canvas.
    pub fn canvas_rect(&self, area: Rect, width: u32, height: u32) -> Rect {
        Rect::from_min_size(
            self.origin(area, width, height),
            Vec2::new(width as f32 * self.zoom, height as f32 * self.zoom),
        )
    }

    pub fn screen_to_canvas(&self, pos: Pos2, area: Rect, width: u32, height: u32) -> Point {
        let o = self.origin(area, width, height);
        Point::new(
            ((pos.x - o.x) / self.zoom).floor() as i32,
            ((pos.y - o.y) / self.zoom).floor() as i32,
        )
    }

    /// Screen rectangle of one canvas cell.
    pub fn cell_rect(&self, p: Point, area: Rect, width: u32, height: u32) -> Rect {
        let o = self.origin(area, width, height);
        Rect::from_min_size(
            Pos2::new(o.x + p.x as f32 * self.zoom, o.y + p.y as f32 * self.zoom),
            Vec2::splat(self.zoom),
        )
    }

    /// Mouse-wheel zoom that keeps the canvas point under `anchor` in place.
    pub fn zoom_at(&mut self, zoom_in: bool, anchor: Pos2, area: Rect, width: u32, height: u32) {
        let factor = if zoom_in { WHEEL_ZOOM_STEP } else { 1.0 / WHEEL_ZOOM_STEP };
        let o = self.origin(area, width, height);
        let cx = (anchor.x - o.x) / self.zoom;
        let cy = (anchor.y - o.y) / self.zoom;

        self.target_zoom = (self.target_zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let new_origin = Pos2::new(anchor.x - cx * self.target_zoom, anchor.y - cy * self.target_zoom);
        self.pan = new_origin - Self::centered_origin(self.target_zoom, area, width, height);
    }

    pub fn zoom_in(&mut self) {
        self.target_zoom = (self.target_zoom * KEY_ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.target_zoom = (self.target_zoom / KEY_ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Largest whole zoom that fits the canvas in `area` with a margin, applied
    /// immediately with the pan reset.
    pub fn fit(&mut self, area: Rect, width: u32, height: u32) {
        let zx = (area.width() - 40.0) / width.max(1) as f32;
        let zy = (area.height() - 20.0) / height.max(1) as f32;
        let z = zx.min(zy).floor().clamp(2.0, 64.0);
        self.zoom = z;
        self.target_zoom = z;
        self.center();
    }

    /// Drop any pan so the canvas sits in the middle of the view.
    pub fn center(&mut self) {
        self.pan = Vec2::ZERO;
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Ease `zoom` towards `target_zoom`. Returns `true` while still moving.
    pub fn animate(&mut self, dt: f32) -> bool {
        if (self.zoom - self.target_zoom).abs() < 0.01 {
            self.zoom = self.target_zoom;
            return false;
        }
        self.zoom += (self.target_zoom - self.zoom) * (ZOOM_SPEED * dt).min(1.0);
        true
    }
}
