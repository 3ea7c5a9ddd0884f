/// Borrowed single-channel image, row-major, `len = width * height`.
#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

/// Borrowed RGBA frame, row-major, `len = 4 * width * height`.
#[derive(Clone, Copy, Debug)]
pub struct RgbaImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

/// Owned single-channel image.
#[derive(Clone, Debug, Default)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height],
        }
    }

    /// Reshape to `width * height` zeroed pixels, reusing the allocation.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize(width * height, 0);
    }

    #[inline]
    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

/// Pixel-aligned rectangle used for per-cell counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

#[inline]
fn get_gray(src: &GrayImageView<'_>, x: i32, y: i32) -> u8 {
    if x < 0 || y < 0 || x >= src.width as i32 || y >= src.height as i32 {
        return 0;
    }
    src.data[y as usize * src.width + x as usize]
}

#[inline]
pub fn sample_bilinear(src: &GrayImageView<'_>, x: f32, y: f32) -> f32 {
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = get_gray(src, x0, y0) as f32;
    let p10 = get_gray(src, x0 + 1, y0) as f32;
    let p01 = get_gray(src, x0, y0 + 1) as f32;
    let p11 = get_gray(src, x0 + 1, y0 + 1) as f32;

    let a = p00 + fx * (p10 - p00);
    let b = p01 + fx * (p11 - p01);
    a + fy * (b - a)
}

#[inline]
pub fn sample_bilinear_u8(src: &GrayImageView<'_>, x: f32, y: f32) -> u8 {
    sample_bilinear(src, x, y).clamp(0.0, 255.0) as u8
}

/// Convert an RGBA frame to grayscale with Rec. 601 luma weights.
pub fn grayscale(src: &RgbaImageView<'_>, dst: &mut GrayImage) {
    dst.reset(src.width, src.height);
    for (px, out) in src.data.chunks_exact(4).zip(dst.data.iter_mut()) {
        let luma =
            0.299 * f32::from(px[0]) + 0.587 * f32::from(px[1]) + 0.114 * f32::from(px[2]);
        *out = (luma + 0.5).min(255.0) as u8;
    }
}

/// Global Otsu threshold of the image histogram.
pub fn otsu_threshold(img: &GrayImageView<'_>) -> u8 {
    if img.data.is_empty() {
        return 127;
    }

    let mut min_v = 255u8;
    let mut max_v = 0u8;
    for &v in img.data {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    if min_v == max_v {
        return min_v;
    }

    let mut hist = [0u32; 256];
    for &v in img.data {
        hist[v as usize] += 1;
    }
    let nonzero_bins = hist.iter().filter(|&&h| h > 0).count();
    if nonzero_bins <= 2 {
        return ((u16::from(min_v) + u16::from(max_v)) / 2) as u8;
    }

    let total = img.data.len() as f64;
    let mut sum_total = 0f64;
    for (i, &h) in hist.iter().enumerate() {
        sum_total += (i as f64) * (h as f64);
    }

    let mut sum_b = 0f64;
    let mut w_b = 0f64;
    let mut best_var = -1f64;
    let mut best_t = 127u8;

    for (t, &h) in hist.iter().enumerate() {
        w_b += h as f64;
        if w_b < 1.0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f < 1.0 {
            break;
        }

        sum_b += (t as f64) * (h as f64);
        let m_b = sum_b / w_b;
        let m_f = (sum_total - sum_b) / w_f;

        let var_between = w_b * w_f * (m_b - m_f) * (m_b - m_f);
        if var_between > best_var {
            best_var = var_between;
            best_t = t as u8;
        }
    }

    best_t
}

/// Binarize in place: pixels at or below `level` become 0, the rest 255.
pub fn threshold_in_place(img: &mut GrayImage, level: u8) {
    for v in &mut img.data {
        *v = if *v <= level { 0 } else { 255 };
    }
}

/// Count non-zero pixels inside `rect`. The rectangle must lie within the
/// image bounds.
pub fn count_non_zero(img: &GrayImageView<'_>, rect: Rect) -> usize {
    let mut count = 0usize;
    for y in rect.y..rect.y + rect.height {
        let row = &img.data[y * img.width + rect.x..y * img.width + rect.x + rect.width];
        count += row.iter().filter(|&&v| v != 0).count();
    }
    count
}
