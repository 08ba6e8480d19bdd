use std::path::Path;

use image::RgbaImage;

use crate::color::model::Color;
use crate::error::Result;

// frames -> width, height, and the actual color data (tightly packed RGBA8)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// A frame filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        let data = vec![0; width as usize * height as usize * 4];
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let i = self.index(x, y);
        Some(Color::from_rgba([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Write one pixel. Out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if !self.in_bounds(x, y) {
            return;
        }
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&color.into_rgba());
    }

    // clip a rect to the frame, giving back the pixel ranges to touch
    fn clip(&self, x: u32, y: u32, w: u32, h: u32) -> (std::ops::Range<u32>, std::ops::Range<u32>) {
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);
        (x.min(x1)..x1, y.min(y1)..y1)
    }

    /// Solid rectangle fill, replacing whatever was there.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        let (xs, ys) = self.clip(x, y, w, h);
        let rgba = color.into_rgba();
        for row in ys {
            let start = self.index(xs.start, row);
            let end = self.index(xs.end, row);
            // copies by chunks of 4 (r, g, b and a)
            for chunk in self.data[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Paint `color` over the existing pixels with source-over blending.
    pub fn blend_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        // split fast paths: a==0 (skip), a==255 (copy), else blend
        if color.a == 0 {
            return;
        }
        if color.a == 255 {
            self.fill_rect(x, y, w, h, color);
            return;
        }
        let (xs, ys) = self.clip(x, y, w, h);
        for row in ys {
            for col in xs.clone() {
                let i = self.index(col, row);
                let dst = Color::from_rgba([
                    self.data[i],
                    self.data[i + 1],
                    self.data[i + 2],
                    self.data[i + 3],
                ]);
                let out = color.over_srgb_fast(dst);
                self.data[i..i + 4].copy_from_slice(&out.into_rgba());
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        // the buffer length always matches width * height * 4
        RgbaImage::from_raw(self.width, self.height, self.data)
            .unwrap_or_else(|| RgbaImage::new(0, 0))
    }

    pub fn save_png(self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), width = self.width, height = self.height, "writing frame");
        self.into_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
