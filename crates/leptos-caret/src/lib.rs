//! Leptos Caret Utilities
//!
//! Click-to-caret mapping for multi-line text areas.
//! Treats every character as a square cell of the font size, so the result is
//! an estimate for proportional fonts.

use leptos::html::Textarea;
use leptos::prelude::*;

/// Multiplier applied to the font size when `line-height` is `normal`
const NORMAL_LINE_HEIGHT: f64 = 1.2;

/// Metrics of the editing surface needed to map a click to a caret offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretGeometry {
    /// Inner width of the surface in pixels
    pub content_width: f64,
    /// Height of one text line in pixels
    pub line_height: f64,
    /// Width and height of one estimated character cell in pixels
    pub font_size: f64,
}

impl CaretGeometry {
    /// Build geometry from computed style values.
    ///
    /// Returns `None` when the font size is unusable. A missing line height
    /// falls back to the browser's `normal` estimate.
    pub fn new(content_width: f64, font_size: f64, line_height: Option<f64>) -> Option<Self> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return None;
        }
        let line_height = line_height
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(font_size * NORMAL_LINE_HEIGHT);
        Some(Self {
            content_width: content_width.max(0.0),
            line_height,
            font_size,
        })
    }

    /// Estimated number of characters that fit on one line (at least one)
    pub fn chars_per_line(&self) -> u32 {
        ((self.content_width / self.font_size).floor() as u32).max(1)
    }

    /// Map a click offset (relative to the surface's top-left corner) to a
    /// caret offset, clamped to `[0, text_len]`.
    pub fn offset_at(&self, x: f64, y: f64, text_len: u32) -> u32 {
        let chars_per_line = self.chars_per_line();
        let cell_width = if self.content_width > 0.0 {
            self.content_width / chars_per_line as f64
        } else {
            self.font_size
        };

        let line = (y.max(0.0) / self.line_height).floor();
        let column = (x.max(0.0) / cell_width).floor();
        let target = line * chars_per_line as f64 + column;

        if !target.is_finite() || target >= text_len as f64 {
            text_len
        } else {
            target as u32
        }
    }
}

/// Parse a CSS pixel value such as `"16px"` or `"19.5px"`.
///
/// Fractional pixels are truncated. Keywords like `normal` yield `None`.
pub fn parse_px(value: &str) -> Option<f64> {
    let number = value.trim().strip_suffix("px")?.trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite()).map(f64::trunc)
}

/// Read the surface geometry from the textarea's computed style
pub fn geometry_of(textarea: &web_sys::HtmlTextAreaElement) -> Option<CaretGeometry> {
    let style = web_sys::window()?.get_computed_style(textarea).ok()??;
    let font_size = style.get_property_value("font-size").ok().and_then(|v| parse_px(&v))?;
    let line_height = style.get_property_value("line-height").ok().and_then(|v| parse_px(&v));
    CaretGeometry::new(textarea.client_width() as f64, font_size, line_height)
}

/// Move the textarea caret to the position under the mouse click.
///
/// Returns the applied caret offset, or `None` if the geometry could not be read.
pub fn place_caret_at_click(
    textarea: &web_sys::HtmlTextAreaElement,
    ev: &web_sys::MouseEvent,
) -> Option<u32> {
    let geometry = geometry_of(textarea)?;
    let rect = textarea.get_bounding_client_rect();
    let x = ev.client_x() as f64 - rect.left();
    let y = ev.client_y() as f64 - rect.top();

    // Selection offsets are UTF-16 code units
    let text_len = textarea.value().encode_utf16().count() as u32;
    let offset = geometry.offset_at(x, y, text_len);
    textarea.set_selection_range(offset, offset).ok()?;
    Some(offset)
}

/// Create a click handler that overrides native click-to-caret placement
pub fn make_on_caret_click(textarea_ref: NodeRef<Textarea>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(textarea) = textarea_ref.get_untracked() {
            place_caret_at_click(&textarea, &ev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> CaretGeometry {
        // 160px wide, 16px font => 10 chars per line, 20px lines
        CaretGeometry::new(160.0, 16.0, Some(20.0)).unwrap()
    }

    #[test]
    fn test_origin_maps_to_zero() {
        assert_eq!(geometry().offset_at(0.0, 0.0, 42), 0);
    }

    #[test]
    fn test_second_line_third_column() {
        // line 1, column 2 => 1 * 10 + 2
        assert_eq!(geometry().offset_at(40.0, 25.0, 100), 12);
    }

    #[test]
    fn test_click_below_last_line_clamps_to_end() {
        assert_eq!(geometry().offset_at(5.0, 400.0, 17), 17);
    }

    #[test]
    fn test_empty_text_always_zero() {
        assert_eq!(geometry().offset_at(80.0, 30.0, 0), 0);
    }

    #[test]
    fn test_negative_offsets_clamp_to_start() {
        assert_eq!(geometry().offset_at(-3.0, -8.0, 10), 0);
    }

    #[test]
    fn test_narrow_surface_keeps_one_char_per_line() {
        let g = CaretGeometry::new(8.0, 16.0, Some(20.0)).unwrap();
        assert_eq!(g.chars_per_line(), 1);
        assert_eq!(g.offset_at(0.0, 45.0, 10), 2);
    }

    #[test]
    fn test_normal_line_height_fallback() {
        let g = CaretGeometry::new(160.0, 10.0, None).unwrap();
        assert_eq!(g.line_height, 12.0);
    }

    #[test]
    fn test_invalid_font_size_rejected() {
        assert!(CaretGeometry::new(160.0, 0.0, Some(20.0)).is_none());
        assert!(CaretGeometry::new(160.0, f64::NAN, None).is_none());
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("16px"), Some(16.0));
        assert_eq!(parse_px(" 19.5px "), Some(19.0));
        assert_eq!(parse_px("normal"), None);
        assert_eq!(parse_px("1.5"), None);
    }
}
