use num_traits::{Float, NumAssign};
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// The float precision of the preparation.
pub trait Precision: Default + NumAssign + Float + Sum + Send + Sync + Display + Debug {}

impl Precision for f64 {}

impl Precision for f32 {}
