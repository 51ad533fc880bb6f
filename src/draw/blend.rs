//! Rectangle and icon primitives over an RGB565 [`Surface`].

use super::color::{Color, blend_rgb565};
use super::icon::Icon;
use super::surface::Surface;
use crate::util::Rect;

/// Blends `color` into a single pixel.
pub fn blend_pixel<S: Surface + ?Sized>(surface: &mut S, x: u32, y: u32, color: Color) {
    if color.is_transparent() {
        return;
    }
    if let Some(dst) = surface.get_pixel(x, y) {
        surface.set_pixel(x, y, blend_rgb565(dst, color));
    }
}

/// Fills `rect` (clipped to the surface) with `color`, honouring alpha.
pub fn fill_rect<S: Surface + ?Sized>(surface: &mut S, rect: Rect, color: Color) {
    let Some(clip) = rect.clipped(surface.width(), surface.height()) else {
        return;
    };
    if color.is_transparent() {
        return;
    }

    let opaque = color.is_opaque().then(|| color.to_rgb565());
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            let (x, y) = (x as u32, y as u32);
            match opaque {
                Some(value) => surface.set_pixel(x, y, value),
                None => blend_pixel(surface, x, y, color),
            }
        }
    }
}

/// Draws the outline of `rect` with the given thickness.
///
/// The stroke lies inside the rectangle. Edges are drawn without overlap so
/// translucent colours do not double-blend at the corners.
pub fn outline_rect<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    thickness: u32,
    color: Color,
) {
    if !rect.is_valid() || thickness == 0 {
        return;
    }
    let t = i32::try_from(thickness).unwrap_or(i32::MAX);
    let tx = t.min(rect.width);
    let ty = t.min(rect.height);

    // Top and bottom span the full width.
    let top = Rect::new(rect.x, rect.y, rect.width, ty);
    let bottom_y = rect
        .bottom()
        .saturating_sub(ty)
        .max(rect.y.saturating_add(ty));
    let bottom = Rect::from_min_max(rect.x, bottom_y, rect.right(), rect.bottom());
    // Left and right fill the gap in between.
    let inner_top = rect.y.saturating_add(ty);
    let inner_bottom = bottom_y;
    let left = Rect::from_min_max(rect.x, inner_top, rect.x.saturating_add(tx), inner_bottom);
    let right_x = rect
        .right()
        .saturating_sub(tx)
        .max(rect.x.saturating_add(tx));
    let right = Rect::from_min_max(right_x, inner_top, rect.right(), inner_bottom);

    for edge in [top, bottom, left, right].into_iter().flatten() {
        fill_rect(surface, edge, color);
    }
}

/// Draws `icon` scaled to a `size` x `size` square centred in `rect`.
///
/// Scaling is nearest-neighbour: destination column `dx` samples source
/// column `dx * icon_width / size`. Pixels outside the surface are clipped.
pub fn blit_icon<S: Surface + ?Sized>(surface: &mut S, icon: &Icon, rect: Rect, size: u32) {
    if !icon.is_loaded() || size == 0 {
        return;
    }
    let Ok(size_i) = i32::try_from(size) else {
        return;
    };
    let origin_x = rect.x.saturating_add((rect.width - size_i) / 2);
    let origin_y = rect.y.saturating_add((rect.height - size_i) / 2);

    for dy in 0..size {
        let y = origin_y.saturating_add(dy as i32);
        if y < 0 || y as u32 >= surface.height() {
            continue;
        }
        let sy = (u64::from(dy) * u64::from(icon.height()) / u64::from(size)) as u32;
        for dx in 0..size {
            let x = origin_x.saturating_add(dx as i32);
            if x < 0 || x as u32 >= surface.width() {
                continue;
            }
            let sx = (u64::from(dx) * u64::from(icon.width()) / u64::from(size)) as u32;
            if let Some(color) = icon.pixel(sx, sy) {
                blend_pixel(surface, x as u32, y as u32, color);
            }
        }
    }
}
