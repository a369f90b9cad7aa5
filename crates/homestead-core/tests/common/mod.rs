use homestead_core::PlanBatch;
use jiff::civil::Date;

/// Helper function to build raw batch parameters
pub fn batch(species: &str, start: Date, end: Date, quantity: i64) -> PlanBatch {
    PlanBatch {
        species: species.to_string(),
        start_date: Some(start),
        end_date: Some(end),
        quantity,
    }
}
