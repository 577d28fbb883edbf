use image::{Rgba, RgbaImage};

const BG: [u8; 4] = [248, 249, 251, 255]; // light neutral backdrop
const RING: [u8; 4] = [20, 20, 23, 255]; // face outline and hands
const FACE: [u8; 4] = [255, 255, 255, 255];

// Shadow is 25/255 black over the backdrop; the canvas itself stays opaque.
const SHADOW_STRENGTH: f32 = 25.0 / 255.0;
const SHADOW_MARGIN: f32 = 6.0;

// Generate the clock-face app icon: white dial on a light backdrop, dark
// hands, a soft drop shadow. All measurements scale with `size` so the same
// routine serves any base resolution.
pub fn generate_icon(size: u32) -> RgbaImage {
    let cx = (size / 2) as f32;
    let cy = (size / 2) as f32;
    let radius = (size as f32 * 0.38).floor();

    let ring_w = (size / 64).max(2) as f32;
    let cap_r = (size / 64).max(10) as f32;

    // Hand tips in screen coordinates: 0 deg = +x, +y grows downward, so
    // -60 deg points the hour hand up-right and -90 deg the minute hand
    // straight up.
    let (hx, hy) = polar(cx, cy, (radius * 0.55).floor(), -60.0);
    let hour_w = (size / 48).max(12) as f32;
    let (mx, my) = polar(cx, cy, (radius * 0.85).floor(), -90.0);
    let minute_w = (size / 64).max(8) as f32;

    RgbaImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dx = px - cx;
        let dy = py - cy;
        let dist = (dx * dx + dy * dy).sqrt();

        // Painted top-down: cap over hands, hands over the dial.
        if dist <= cap_r {
            return Rgba(RING);
        }
        if dist_to_segment(px, py, cx, cy, mx, my) <= minute_w * 0.5 {
            return Rgba(RING);
        }
        if dist_to_segment(px, py, cx, cy, hx, hy) <= hour_w * 0.5 {
            return Rgba(RING);
        }
        if dist <= radius {
            if dist >= radius - ring_w {
                return Rgba(RING);
            }
            return Rgba(FACE);
        }
        if dist <= radius + SHADOW_MARGIN {
            return Rgba([
                lerp(BG[0] as f32, 0.0, SHADOW_STRENGTH) as u8,
                lerp(BG[1] as f32, 0.0, SHADOW_STRENGTH) as u8,
                lerp(BG[2] as f32, 0.0, SHADOW_STRENGTH) as u8,
                255,
            ]);
        }
        Rgba(BG)
    })
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn polar(cx: f32, cy: f32, r: f32, deg: f32) -> (f32, f32) {
    let rad = deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

fn dist_to_segment(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let vx = bx - ax;
    let vy = by - ay;
    let wx = px - ax;
    let wy = py - ay;
    let len2 = vx * vx + vy * vy;
    if len2 <= f32::EPSILON {
        return (wx * wx + wy * wy).sqrt();
    }
    let t = ((wx * vx + wy * vy) / len2).clamp(0.0, 1.0);
    let dx = wx - t * vx;
    let dy = wy - t * vy;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_matches_requested_resolution() {
        for size in [16u32, 64, 100, 256] {
            let img = generate_icon(size);
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_icon_is_fully_opaque() {
        let img = generate_icon(64);
        assert!(img.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_background_and_center_cap_colors() {
        let img = generate_icon(256);
        assert_eq!(img.get_pixel(0, 0).0, BG);
        assert_eq!(img.get_pixel(128, 128).0, RING);
    }

    #[test]
    fn test_minute_hand_points_straight_up() {
        // radius 97, minute hand reaches 82px up from center
        let img = generate_icon(256);
        assert_eq!(img.get_pixel(128, 68).0, RING);
        // same distance below center is plain dial
        assert_eq!(img.get_pixel(128, 188).0, FACE);
    }

    #[test]
    fn test_hour_hand_points_up_right() {
        // midpoint of the -60 deg segment, up and to the right of center
        let img = generate_icon(256);
        assert_eq!(img.get_pixel(141, 105).0, RING);
        // mirrored point on the other side stays dial-white
        assert_eq!(img.get_pixel(115, 105).0, FACE);
    }

    #[test]
    fn test_ring_and_shadow_bands() {
        let img = generate_icon(256);
        // dial rim, left of center so no hand interferes
        assert_eq!(img.get_pixel(33, 128).0, RING);
        // just outside the dial: dimmed backdrop, still opaque
        let shadow = img.get_pixel(128, 228).0;
        assert_eq!(shadow[3], 255);
        assert!(shadow[0] < BG[0] && shadow[0] > 200);
        // inside the rim away from the hands: white dial
        assert_eq!(img.get_pixel(78, 128).0, FACE);
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = generate_icon(64);
        let b = generate_icon(64);
        assert_eq!(a.into_raw(), b.into_raw());
    }
}
