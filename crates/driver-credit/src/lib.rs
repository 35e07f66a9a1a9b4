//! Credit/trust scoring and roster screening for delivery drivers.
//!
//! A driver's operational KPIs produce a 0–60 quantitative score and five
//! assessor ratings produce a 0–40 qualitative score. The screening pipeline
//! scores a roster, applies the operator's eligibility filters and returns
//! the survivors ranked by total score.

pub mod config;
pub mod drivers;
pub mod error;
pub mod telemetry;
