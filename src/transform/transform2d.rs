use crate::math::ConstEval;
use crate::matrix::aliases::Matrix3;
use crate::matrix::vector::Vector2;
use crate::traits::FloatScalar;

use super::Transform;

/// 2D transform: translation, counter-clockwise rotation in radians, and
/// per-axis scale.
///
/// The default is the identity: no translation, no rotation, unit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D<T = f32> {
    pub translation: Vector2<T>,
    pub rotation: T,
    pub scale: Vector2<T>,
}

impl<T: Copy> Transform2D<T> {
    pub const fn new(translation: Vector2<T>, rotation: T, scale: Vector2<T>) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }
}

impl<T: FloatScalar> Transform2D<T> {
    pub fn identity() -> Self {
        Self::new(Vector2::zeros(), T::zero(), Vector2::one())
    }

    /// Local matrix: `translation × rotation × scale`.
    pub fn matrix(&self) -> Matrix3<T> {
        Matrix3::translation(self.translation)
            * Matrix3::rotation(self.rotation)
            * Matrix3::scale(self.scale)
    }
}

impl<T: FloatScalar> Default for Transform2D<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar> Transform for Transform2D<T> {
    type Matrix = Matrix3<T>;

    fn matrix(&self) -> Matrix3<T> {
        Transform2D::matrix(self)
    }
}

macro_rules! impl_const_transform2d {
    ($($t:ty),*) => {
        $(
            impl ConstEval<Transform2D<$t>> {
                pub const fn matrix(self) -> ConstEval<Matrix3<$t>> {
                    let tr = self.0;
                    ConstEval::<Matrix3<$t>>::translation(tr.translation)
                        .mul(ConstEval::<Matrix3<$t>>::rotation(tr.rotation))
                        .mul(ConstEval::<Matrix3<$t>>::scale(tr.scale))
                }

                pub const fn world_matrix(self, parent_world: Matrix3<$t>) -> ConstEval<Matrix3<$t>> {
                    ConstEval(parent_world).mul(self.matrix())
                }
            }
        )*
    };
}

impl_const_transform2d!(f32, f64);
