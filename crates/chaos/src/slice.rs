//! Selection producers over slices.

use crate::error::ChaosError;
use crate::instance::Chaos;

impl Chaos {
    /// Returns a clone of one element of `items`.
    ///
    /// Returns `T::default()` for an empty slice without consuming randomness.
    ///
    /// ```
    /// use chaos::Chaos;
    ///
    /// let mut chaos = Chaos::new("pick");
    /// let colour = chaos.item(&["red", "green", "blue"]);
    /// assert!(["red", "green", "blue"].contains(&colour));
    /// assert_eq!(chaos.item::<u32>(&[]), 0);
    /// ```
    pub fn item<T: Clone + Default>(&mut self, items: &[T]) -> T {
        if items.is_empty() {
            return T::default();
        }
        let index = self.int(items.len() - 1);
        items.get(index).cloned().unwrap_or_default()
    }

    /// Selects `count` elements from `items` without replacement.
    ///
    /// Elements are returned in selection order. Picks are distinct by
    /// position, so duplicate values in `items` may appear more than once.
    /// Consumes one draw per selected element, except that a pick from a
    /// single remaining candidate draws nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ChaosError::NotEnoughItems`] when `count` exceeds
    /// `items.len()`.
    pub fn unique_items<T: Clone>(
        &mut self,
        items: &[T],
        count: usize,
    ) -> Result<Vec<T>, ChaosError> {
        if count > items.len() {
            return Err(ChaosError::NotEnoughItems {
                requested: count,
                available: items.len(),
            });
        }

        let mut available = items.to_vec();
        let mut selected = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.int(available.len() - 1);
            selected.push(available.remove(index));
        }
        Ok(selected)
    }

    /// Selects `count` elements from `items` without replacement.
    ///
    /// # Panics
    ///
    /// Panics when `count` exceeds `items.len()`.
    pub fn must_unique_items<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        self.unique_items(items, count)
            .unwrap_or_else(|err| panic!("{err}"))
    }
}
