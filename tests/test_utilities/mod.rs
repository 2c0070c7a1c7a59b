/// Shared helpers for integration tests
pub mod mocks;

use bom_master::prelude::*;

/// The VALVE assembly used throughout the tests
///
/// ```text
/// VALVE (1)
/// ├── SEAT (2)
/// └── STEM (3)
///     └── GLAND (4)
/// ```
#[allow(dead_code)]
pub fn valve_records() -> Vec<BomRecord> {
    vec![
        BomRecord::new(1, "VALVE", None),
        BomRecord::new(2, "SEAT", Some("VALVE")),
        BomRecord::new(3, "STEM", Some("VALVE")),
        BomRecord::new(4, "GLAND", Some("STEM")),
    ]
}
