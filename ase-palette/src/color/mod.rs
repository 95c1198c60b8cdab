/*!
 Converts the color models found in `ASE` color entries to 8-bit RGB.

 Three models appear in the wild: direct RGB, CIE Lab, and CMYK. Lab goes
 through XYZ with a D65/2° reference white and the sRGB matrix and transfer
 function; CMYK goes through CMY. The conversion formulas follow the
 reference implementations published by EasyRGB.
*/

/// D65/2° reference white point
const D65: (f32, f32, f32) = (95.047, 100.0, 108.883);

/// Color models this crate can convert to RGB
///
/// Any other model tag in the stream is carried through the parse events
/// as raw bytes so the caller can warn about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    Rgb,
    Lab,
    Cmyk,
}

impl ColorModel {
    /// Match a model tag from the stream; tags are space padded and
    /// compared exactly
    pub fn from_tag(tag: &[u8; 4]) -> Option<Self> {
        match tag {
            b"RGB " => Some(ColorModel::Rgb),
            b"LAB " => Some(ColorModel::Lab),
            b"CMYK" => Some(ColorModel::Cmyk),
            _ => None,
        }
    }

    /// Number of big-endian `f32` components the model stores in a color entry
    pub fn component_count(&self) -> usize {
        match self {
            ColorModel::Rgb | ColorModel::Lab => 3,
            ColorModel::Cmyk => 4,
        }
    }

    /// Whether converting this model to RGB can drift from the source color
    ///
    /// Lab and CMYK conversions are lossy; some converted values come out
    /// off-by-one from what Adobe's own tools report.
    pub fn is_approximate(&self) -> bool {
        matches!(self, ColorModel::Lab | ColorModel::Cmyk)
    }
}

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Convert a model's float payload to 8-bit RGB
///
/// `components` must hold at least [`ColorModel::component_count`] values.
pub fn convert(model: ColorModel, components: &[f32]) -> Rgb {
    match model {
        ColorModel::Rgb => from_rgb(components[0], components[1], components[2]),
        ColorModel::Lab => from_lab(components[0], components[1], components[2]),
        ColorModel::Cmyk => from_cmyk(components[0], components[1], components[2], components[3]),
    }
}

/// Round to the nearest integer and clamp into the 8-bit range
fn channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// RGB channels are stored as 0.0-1.0 floats
fn from_rgb(r: f32, g: f32, b: f32) -> Rgb {
    Rgb::new(
        channel(r * 255.0),
        channel(g * 255.0),
        channel(b * 255.0),
    )
}

/// Lab -> XYZ -> linear sRGB -> gamma-encoded 8-bit RGB
///
/// The stream stores `L*` pre-divided by 100.
fn from_lab(l: f32, a: f32, b: f32) -> Rgb {
    let l = l * 100.0;
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let (ref_x, ref_y, ref_z) = D65;
    let x = ref_x * cube_or_linear(fx) / 100.0;
    let y = ref_y * cube_or_linear(fy) / 100.0;
    let z = ref_z * cube_or_linear(fz) / 100.0;

    let r = 3.2406 * x - 1.5372 * y - 0.4986 * z;
    let g = -0.9689 * x + 1.8758 * y + 0.0415 * z;
    let b = 0.0557 * x - 0.2040 * y + 1.0570 * z;

    Rgb::new(
        channel(gamma_encode(r) * 255.0),
        channel(gamma_encode(g) * 255.0),
        channel(gamma_encode(b) * 255.0),
    )
}

/// CIE cubic/linear split at 0.008856
fn cube_or_linear(t: f32) -> f32 {
    let cubed = t * t * t;
    if cubed > 0.008856 {
        cubed
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// Forward sRGB transfer function, breakpoint at 0.0031308
fn gamma_encode(c: f32) -> f32 {
    if c > 0.0031308 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    }
}

/// CMYK -> CMY -> 8-bit RGB
fn from_cmyk(c: f32, m: f32, y: f32, k: f32) -> Rgb {
    let c = c * (1.0 - k) + k;
    let m = m * (1.0 - k) + k;
    let y = y * (1.0 - k) + k;
    Rgb::new(
        channel((1.0 - c) * 255.0),
        channel((1.0 - m) * 255.0),
        channel((1.0 - y) * 255.0),
    )
}


#[cfg(test)]
mod convert_tests {
    use crate::color::{convert, ColorModel, Rgb};

    #[test]
    fn can_convert_rgb() {
        let rgb = convert(ColorModel::Rgb, &[1.0, 0.0, 0.5019608]);
        assert_eq!(rgb, Rgb::new(255, 0, 128));
    }

    #[test]
    fn can_convert_rgb_extremes() {
        assert_eq!(convert(ColorModel::Rgb, &[0.0, 0.0, 0.0]), Rgb::new(0, 0, 0));
        assert_eq!(
            convert(ColorModel::Rgb, &[1.0, 1.0, 1.0]),
            Rgb::new(255, 255, 255)
        );
    }

    #[test]
    fn can_convert_lab_mid_gray() {
        // The stream stores L* divided by 100, so 0.5 is L* = 50
        let rgb = convert(ColorModel::Lab, &[0.5, 0.0, 0.0]);
        assert_eq!(rgb, Rgb::new(119, 119, 119));
    }

    #[test]
    fn can_convert_lab_white() {
        let rgb = convert(ColorModel::Lab, &[1.0, 0.0, 0.0]);
        assert_eq!(rgb, Rgb::new(255, 255, 255));
    }

    #[test]
    fn lab_out_of_gamut_clamps() {
        // A strongly positive a* pushes red and blue past the 8-bit range
        let rgb = convert(ColorModel::Lab, &[1.0, 100.0, 0.0]);
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.b, 255);
    }

    #[test]
    fn can_convert_cmyk_white() {
        let rgb = convert(ColorModel::Cmyk, &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(rgb, Rgb::new(255, 255, 255));
    }

    #[test]
    fn can_convert_cmyk_black() {
        let rgb = convert(ColorModel::Cmyk, &[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb, Rgb::new(0, 0, 0));
    }

    #[test]
    fn can_convert_cmyk_cyan() {
        let rgb = convert(ColorModel::Cmyk, &[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(rgb, Rgb::new(0, 255, 255));
    }

    #[test]
    fn cmyk_half_black() {
        // K = 0.5 darkens every channel to half intensity
        let rgb = convert(ColorModel::Cmyk, &[0.0, 0.0, 0.0, 0.5]);
        assert_eq!(rgb, Rgb::new(128, 128, 128));
    }
}
