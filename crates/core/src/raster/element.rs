//! Raster element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a raster cell.
///
/// This trait bounds the types that can be used as raster values,
/// ensuring they support necessary numeric operations.
pub trait RasterElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Whether this value is considered filled (nonzero) in a binary grid
    fn is_filled(&self) -> bool {
        !self.is_zero()
    }

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

impl RasterElement for u8 {}
impl RasterElement for u16 {}
impl RasterElement for u32 {}
impl RasterElement for u64 {}
impl RasterElement for i8 {}
impl RasterElement for i16 {}
impl RasterElement for i32 {}
impl RasterElement for i64 {}
impl RasterElement for f32 {}
impl RasterElement for f64 {}
