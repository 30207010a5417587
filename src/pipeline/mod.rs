// Pipeline processing: record parsing, field extraction, aggregation,
// joining, and report rendering.

pub mod aggregate;
pub mod analysis;
pub mod extract;
pub mod join;
pub mod record;
pub mod report;
