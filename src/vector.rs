/*
 * Vector Module
 *
 * Steering helpers on top of nannou's Vec2. Addition, subtraction, scaling
 * and division come straight from the glam operators; this module adds the
 * zero-safe operations the steering rules depend on.
 */

use nannou::prelude::*;

pub trait VectorExt: Sized {
    // Unit vector in the same direction, or the zero vector when the length is zero
    fn unit_or_zero(self) -> Self;

    // Rescale to exactly `max` if longer than `max`
    fn limit(self, max: f32) -> Self;

    // Point in the same direction with the given length
    fn with_magnitude(self, magnitude: f32) -> Self;

    // Angle of the vector in radians, measured from the positive x axis
    fn heading(self) -> f32;

    // Average of an accumulated sum, left untouched when nothing was counted
    fn mean(self, count: usize) -> Self;
}

impl VectorExt for Vec2 {
    #[inline]
    fn unit_or_zero(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            self / length
        } else {
            Vec2::ZERO
        }
    }

    #[inline]
    fn limit(self, max: f32) -> Self {
        let length_sq = self.length_squared();
        if length_sq > max * max {
            self.unit_or_zero() * max
        } else {
            self
        }
    }

    #[inline]
    fn with_magnitude(self, magnitude: f32) -> Self {
        self.unit_or_zero() * magnitude
    }

    #[inline]
    fn heading(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn mean(self, count: usize) -> Self {
        if count > 0 {
            self / count as f32
        } else {
            self
        }
    }
}
