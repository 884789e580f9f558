//! Window-space rectangles.

/// A rectangle in window pixels, used for the viewport and the scissor box.
///
/// The origin is the bottom-left corner of the window, as the graphics driver sees it.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Rect {
  /// The x window position of the rectangle.
  pub x: u32,

  /// The y window position of the rectangle.
  pub y: u32,

  /// The width of the rectangle.
  pub width: u32,

  /// The height of the rectangle.
  pub height: u32,
}

impl Rect {
  /// Create a new rectangle.
  pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
    Rect {
      x,
      y,
      width,
      height,
    }
  }

  /// Convert a point in normalized device space (both axes in *[-1;1]*) into window pixels,
  /// considering `self` is the viewport.
  ///
  /// Points left of or below the viewport are clamped onto its edge. Points too far right or above
  /// saturate at `u32::MAX`.
  pub fn to_window_coords(&self, point: [f32; 2]) -> [u32; 2] {
    let to_pixels = |c: f32, extent: u32| (((c + 1.).max(0.) / 2.) * extent as f32).round() as u32;

    [
      to_pixels(point[0], self.width).saturating_add(self.x),
      to_pixels(point[1], self.height).saturating_add(self.y),
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn corners_map_to_viewport_corners() {
    let vp = Rect::new(10, 20, 640, 480);

    assert_eq!(vp.to_window_coords([-1., -1.]), [10, 20]);
    assert_eq!(vp.to_window_coords([1., 1.]), [650, 500]);
  }

  #[test]
  fn center_maps_to_viewport_center() {
    let vp = Rect::new(0, 0, 200, 100);
    assert_eq!(vp.to_window_coords([0., 0.]), [100, 50]);
  }

  #[test]
  fn outside_points_are_clamped_to_origin() {
    let vp = Rect::new(5, 7, 100, 100);
    assert_eq!(vp.to_window_coords([-3., -1.5]), [5, 7]);
  }

  #[test]
  fn far_points_saturate() {
    let vp = Rect::new(10, 0, 100, 100);

    assert_eq!(vp.to_window_coords([1e10, 0.]), [u32::MAX, 50]);
    assert_eq!(vp.to_window_coords([f32::INFINITY, 1e30]), [u32::MAX, u32::MAX]);
  }

  #[test]
  fn coordinates_are_rounded() {
    let vp = Rect::new(0, 0, 3, 3);

    // (0.5 + 1) / 2 * 3 = 2.25 and (0.9 + 1) / 2 * 3 = 2.85
    assert_eq!(vp.to_window_coords([0.5, 0.9]), [2, 3]);
  }
}
