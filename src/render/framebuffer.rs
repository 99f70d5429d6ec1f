use raylib::prelude::*;
use raylib::core::texture::RaylibTexture2D;

use crate::core::geometry::Rect;
use crate::render::skins::Pixmap;

/// CPU-side RGBA canvas the scene is drawn into before it goes to the GPU.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub current_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            current_color: Color::WHITE,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[cfg(test)]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    #[inline] pub fn set_current_color(&mut self, c: Color) { self.current_color = c; }

    /// Visible part of `r` as pixel ranges, or `None` when it is fully off screen.
    fn clip(&self, r: &Rect) -> Option<(std::ops::Range<u32>, std::ops::Range<u32>)> {
        let x0 = r.left().max(0);
        let y0 = r.top().max(0);
        let x1 = r.right().min(self.width as i32);
        let y1 = r.bottom().min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32..x1 as u32, y0 as u32..y1 as u32))
    }

    /// Fills `r` with the current color, clipped to the buffer.
    pub fn fill_rect(&mut self, r: &Rect) {
        let Some((xs, ys)) = self.clip(r) else { return; };
        for y in ys {
            let row = (y * self.width) as usize;
            self.color_buffer[row + xs.start as usize..row + xs.end as usize].fill(self.current_color);
        }
    }

    /// Stretches `pm` over `r`. Nearly transparent pixels are skipped.
    pub fn blit_pixmap(&mut self, pm: &Pixmap, r: &Rect) {
        let Some((xs, ys)) = self.clip(r) else { return; };
        for y in ys {
            let ty = ((y as i32 - r.y) as u32 * pm.h) / r.h as u32;
            for x in xs.clone() {
                let tx = ((x as i32 - r.x) as u32 * pm.w) / r.w as u32;
                let color = pm.sample(tx, ty);
                if color.a < 8 { continue; }
                self.color_buffer[(y * self.width + x) as usize] = color;
            }
        }
    }

    /// Copies the pixels into a persistent RGBA8 texture of the same size.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        let bytes: Vec<u8> = self.color_buffer.iter().flat_map(|c| [c.r, c.g, c.b, c.a]).collect();
        let _ = tex.update_texture(&bytes);
    }
}
