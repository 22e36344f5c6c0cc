/// A power profile.
///
/// A profile is a matrix that captures the evolution of power over a time
/// interval with respect to a number of processing elements. The data are
/// stored in the row-major order with one row per time step and one column
/// per processing element.
pub struct Profile {
    /// The number of processing elements.
    pub units: usize,
    /// The number of time steps.
    pub steps: usize,
    /// The actual data.
    pub data: Vec<f64>,
}

impl Profile {
    /// Create a profile filled with zeros.
    #[inline]
    pub fn new(units: usize, steps: usize) -> Profile {
        Profile { units: units, steps: steps, data: vec![0.0; units * steps] }
    }

    /// Return the power of a processing element at a time step.
    #[inline]
    pub fn get(&self, step: usize, unit: usize) -> f64 {
        debug_assert!(step < self.steps && unit < self.units);
        self.data[step * self.units + unit]
    }
}

impl Into<Vec<f64>> for Profile {
    #[inline]
    fn into(self) -> Vec<f64> {
        self.data
    }
}

deref! { Profile::data => [f64] }
deref! { mut Profile::data => [f64] }
