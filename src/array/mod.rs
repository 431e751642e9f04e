//! Typed shared arrays.
//!
//! | Alias | Element | Shape |
//! |---|---|---|
//! | [`ScalarArray`] | f64 or i64 | `('*',)` |
//! | [`Vector2Array`] | [`DVec2`] | `('*', 2)` |
//! | [`Vector3Array`] | [`DVec3`] | `('*', 3)` |
//! | [`Int2Array`] | [`I64Vec2`] | `('*', 2)` |
//! | [`Int3Array`] | [`I64Vec3`] | `('*', 3)` |
//! | [`StringArray`] | `String` | `('*',)` |
//! | [`DateTimeArray`] | [`Timestamp`] | `('*',)` |
//! | [`ColorArray`] | [`Color`] | `('*', 3)` |

mod element;
mod typed;
mod scalar;

pub use element::ArrayElement;
pub use typed::TypedArray;
pub use scalar::{Scalar, ScalarArray};

use crate::core::{ArrayCodec, EncodedArray};
use crate::util::{Color, DVec2, DVec3, DataType, Dimensions, I64Vec2, I64Vec3, Result, ShapeDescriptor, Timestamp};

pub type Vector2Array = TypedArray<DVec2>;
pub type Vector3Array = TypedArray<DVec3>;
pub type Int2Array = TypedArray<I64Vec2>;
pub type Int3Array = TypedArray<I64Vec3>;
pub type StringArray = TypedArray<String>;
pub type DateTimeArray = TypedArray<Timestamp>;
pub type ColorArray = TypedArray<Color>;

/// Interface every array variant exposes to the codec boundary.
pub trait SharedArray {
    /// Number of rows.
    fn len(&self) -> usize;

    /// True if there are no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element data type.
    fn data_type(&self) -> DataType;

    /// Declared shape contract.
    fn shape_descriptor(&self) -> ShapeDescriptor;

    /// Actual dimensions.
    fn dims(&self) -> Dimensions {
        self.shape_descriptor().dims_for(self.len())
    }

    /// Encode row-major data through a codec.
    fn encode(&self, codec: &dyn ArrayCodec) -> Result<EncodedArray>;
}
