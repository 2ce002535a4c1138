//! A 2-dimensional vector/point.
use num::Float;

#[derive(
    Debug, Copy, Clone, Default, Eq, Ord, PartialEq, PartialOrd, Hash, derive_more::Display,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct V2<T> {
    pub x: T,
    pub y: T,
}

/// The single-precision vector all of the intersection tests work in.
pub type Vector = V2<f32>;

impl<T> V2<T> {
    pub const fn new(x: T, y: T) -> Self {
        V2 { x, y }
    }
}

impl<T: Float> V2<T> {
    pub fn zero() -> Self {
        V2::new(T::zero(), T::zero())
    }

    pub fn one() -> Self {
        V2::new(T::one(), T::one())
    }

    pub fn unit_x() -> Self {
        V2::new(T::one(), T::zero())
    }

    pub fn unit_y() -> Self {
        V2::new(T::zero(), T::one())
    }

    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    #[must_use = "This function doesn't modify the vector in place"]
    pub fn normalize(self) -> V2<T> {
        self / self.length()
    }

    pub fn dot(&self, other: &V2<T>) -> T {
        self.x * other.x + self.y * other.y
    }

    /// The component of `self` along `onto`.
    ///
    /// Projecting onto the zero vector divides by zero and yields NaN.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn project(self, onto: &V2<T>) -> V2<T> {
        *onto * (self.dot(onto) / onto.dot(onto))
    }

    #[must_use = "This function doesn't modify the vector in place"]
    pub fn component_mul(self, other: &V2<T>) -> V2<T> {
        V2::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise division.  Zero components in `other` follow IEEE-754, so the result may hold infinities or NaN.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn component_div(self, other: &V2<T>) -> V2<T> {
        V2::new(self.x / other.x, self.y / other.y)
    }

    pub fn distance_squared(&self, other: &V2<T>) -> T {
        (other.x - self.x).powi(2) + (other.y - self.y).powi(2)
    }

    pub fn distance(&self, other: &V2<T>) -> T {
        self.distance_squared(other).sqrt()
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float> std::ops::Add for V2<T> {
    type Output = V2<T>;

    fn add(self, rhs: V2<T>) -> V2<T> {
        V2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Float> std::ops::AddAssign for V2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<T: Float> std::ops::Mul<T> for V2<T> {
    type Output = V2<T>;

    fn mul(self, rhs: T) -> Self::Output {
        V2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T: Float> std::ops::Div<T> for V2<T> {
    type Output = V2<T>;

    fn div(self, rhs: T) -> Self::Output {
        V2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl<T: std::ops::Neg> std::ops::Neg for V2<T> {
    type Output = V2<<T as std::ops::Neg>::Output>;

    fn neg(self) -> Self::Output {
        V2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Float> std::ops::Sub for V2<T> {
    type Output = V2<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        V2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Float> std::ops::SubAssign for V2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
    }
}
