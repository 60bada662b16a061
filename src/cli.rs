// ============================================================================
// TinyCanvas command line
// ============================================================================
//
// Usage examples:
//   TinyCanvas            (32x32 canvas)
//   TinyCanvas 64 48      (64x48 canvas)
//
// Saving and reopening always go through `artwork.bmp` in the working
// directory. The session log location can be moved with `TINYCANVAS_LOG`.

use clap::Parser;

pub const DEFAULT_CANVAS_SIZE: u32 = 32;
pub const MAX_CANVAS_SIZE: u32 = 512;

/// TinyCanvas pixel editor.
#[derive(Parser, Debug)]
#[command(
    name = "TinyCanvas",
    about = "A tiny raster pixel editor",
    long_about = "Edit a small pixel grid with pencil, eraser, line, rectangle,\n\
                  circle, flood fill and color picker tools.\n\n\
                  WIDTH and HEIGHT must both be given and lie in 1..=512;\n\
                  otherwise the canvas is 32x32.",
    after_help = CONTROLS
)]
pub struct CliArgs {
    /// Canvas width in cells (1-512).
    #[arg(value_name = "WIDTH", allow_negative_numbers = true)]
    pub width: Option<String>,

    /// Canvas height in cells (1-512).
    #[arg(value_name = "HEIGHT", allow_negative_numbers = true)]
    pub height: Option<String>,
}

/// Start-up settings derived from [`CliArgs`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl CliArgs {
    pub fn config(&self) -> CanvasConfig {
        let (width, height) = canvas_size(self.width.as_deref(), self.height.as_deref());
        CanvasConfig { width, height }
    }
}

/// Canvas dimensions from the two positional arguments.
///
/// Both must be present for either to count. Each one whose numeric prefix
/// falls outside `1..=512` is replaced by 32 on its own.
pub fn canvas_size(width: Option<&str>, height: Option<&str>) -> (u32, u32) {
    match (width, height) {
        (Some(w), Some(h)) => (parse_dimension(w), parse_dimension(h)),
        _ => (DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE),
    }
}

fn parse_dimension(arg: &str) -> u32 {
    let v = leading_int(arg);
    if (1..=MAX_CANVAS_SIZE as i64).contains(&v) {
        v as u32
    } else {
        DEFAULT_CANVAS_SIZE
    }
}

/// Integer value of the leading `[+-]digits` of `arg` after whitespace, or 0
/// when there are no digits. Trailing text is ignored ("64px" is 64).
fn leading_int(arg: &str) -> i64 {
    let s = arg.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add((d - b'0') as i64));
    if negative { -value } else { value }
}

pub const CONTROLS: &str = "\
Controls:
  P/E/L/R/C/F/I          - Select tool
  G                      - Toggle grid
  X                      - Swap FG/BG colors
  +/-                    - Zoom in/out
  Scroll wheel           - Zoom at cursor
  Right/middle-drag      - Pan
  Ctrl+Z / Ctrl+Shift+Z  - Undo/Redo
  Ctrl+S                 - Save
  Ctrl+Shift+S           - Save as
  Ctrl+O                 - Reopen document
  Ctrl+Shift+O           - Open file
  Ctrl+N                 - New canvas
  Ctrl+0 / Space         - Fit canvas in view
  F11 / Ctrl+Enter       - Toggle fullscreen";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_defaults() {
        assert_eq!(canvas_size(None, None), (32, 32));
        assert_eq!(canvas_size(Some("64"), None), (32, 32));
        assert_eq!(canvas_size(None, Some("64")), (32, 32));
    }

    #[test]
    fn test_canvas_size_bounds() {
        assert_eq!(canvas_size(Some("1"), Some("512")), (1, 512));
        assert_eq!(canvas_size(Some("0"), Some("513")), (32, 32));
        assert_eq!(canvas_size(Some("-5"), Some("100")), (32, 100));
        assert_eq!(canvas_size(Some("abc"), Some("7")), (32, 7));
    }

    #[test]
    fn test_dimension_numeric_prefix() {
        assert_eq!(canvas_size(Some("64px"), Some(" 48x")), (64, 48));
        assert_eq!(canvas_size(Some("+16"), Some("8.9")), (16, 8));
        assert_eq!(canvas_size(Some("px64"), Some("-")), (32, 32));
        assert_eq!(canvas_size(Some("99999999999999999999999"), Some("2")), (32, 2));
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("  -12abc"), -12);
        assert_eq!(leading_int(""), 0);
        assert_eq!(leading_int("7"), 7);
    }

    #[test]
    fn test_parse_args() {
        let args = CliArgs::parse_from(["TinyCanvas", "64", "48"]);
        assert_eq!(args.config(), CanvasConfig { width: 64, height: 48 });

        let args = CliArgs::parse_from(["TinyCanvas"]);
        assert_eq!(args.config(), CanvasConfig::default());
    }

    #[test]
    fn test_parse_negative_dimension() {
        let args = CliArgs::parse_from(["TinyCanvas", "-3", "10"]);
        assert_eq!(args.config().width, 32);
        assert_eq!(args.config().height, 10);
    }

    #[test]
    fn test_no_flags_accepted() {
        assert!(CliArgs::try_parse_from(["TinyCanvas", "--open", "in.bmp"]).is_err());
        assert!(CliArgs::try_parse_from(["TinyCanvas", "1", "2", "3"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
