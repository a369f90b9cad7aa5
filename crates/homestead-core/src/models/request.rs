//! Validated planning request.

use jiff::civil::Date;

use crate::{
    error::{PlannerError, Result},
    species::Species,
};

/// A batch that passed validation and is ready for the engine.
///
/// Fields are private so that every instance upholds `start <= end` and
/// `quantity >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanningRequest {
    species: Species,
    start: Date,
    end: Date,
    quantity: u32,
}

impl PlanningRequest {
    /// Build a request, rejecting inverted ranges and non-positive counts.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidDateRange` - When `end` is before `start`
    /// * `PlannerError::InvalidQuantity` - When `quantity` is below 1 or does
    ///   not fit a `u32`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use homestead_core::{PlanningRequest, Species};
    /// use jiff::civil::date;
    ///
    /// let request = PlanningRequest::new(
    ///     Species::ChickenEggs,
    ///     date(2025, 3, 1),
    ///     date(2025, 3, 8),
    ///     1,
    /// )?;
    /// assert_eq!(request.quantity(), 1);
    ///
    /// assert!(PlanningRequest::new(Species::ChickenEggs, date(2025, 3, 8), date(2025, 3, 1), 1).is_err());
    /// # Ok::<(), homestead_core::PlannerError>(())
    /// ```
    pub fn new(species: Species, start: Date, end: Date, quantity: i64) -> Result<Self> {
        if start > end {
            return Err(PlannerError::invalid_range(format!(
                "start date {start} is after end date {end}"
            )));
        }

        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(PlannerError::InvalidQuantity { quantity })?;

        Ok(Self {
            species,
            start,
            end,
            quantity,
        })
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// First day of the arrival or breeding range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the arrival or breeding range.
    pub fn end(&self) -> Date {
        self.end
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
