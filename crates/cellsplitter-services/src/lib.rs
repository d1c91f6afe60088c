// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Cellsplitter Service Layer

The stable application boundary for cellsplitter - transport-agnostic
service interfaces used by the HTTP adapter (and any future one).

## Architecture

```text
┌─────────────────────────────────────────────────────────────────┐
│                    TRANSPORT ADAPTERS                            │
│  Axum/REST                                                      │
└────────────────────────────┬────────────────────────────────────┘
                             ↓
┌─────────────────────────────────────────────────────────────────┐
│              SERVICE LAYER (This Crate)                          │
│  • CatalogService     - Vessels and cell lines                  │
│  • CalculatorService  - Confluency, dilution, seed-and-split    │
└────────────────────────────┬────────────────────────────────────┘
                             ↓
┌─────────────────────────────────────────────────────────────────┐
│                   CORE                                           │
│  cellsplitter-calc                                              │
└─────────────────────────────────────────────────────────────────┘
```

Core errors are translated into [`ServiceError`]; parameters and results
are plain DTOs with already-parsed numbers.

```rust
use std::sync::Arc;
use cellsplitter_services::{
    CalculatorService, CalculatorServiceImpl, CalculatorSettings, CatalogServiceImpl,
    DilutionParams,
};

# tokio_test::block_on(async {
let catalog = Arc::new(CatalogServiceImpl::default());
let calculator = CalculatorServiceImpl::new(catalog, CalculatorSettings::default());

let result = calculator
    .calculate_dilution(DilutionParams {
        cell_concentration: Some(5e6),
        final_concentration: Some(5e5),
        total_volume_ml: Some(20.0),
        ..Default::default()
    })
    .await
    .unwrap();
assert_eq!(result.plan.slurry_volume_ml, 2.0);
# });
```
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod catalog;
pub mod impls;
pub mod traits;
pub mod types;

// Re-export main API
pub use catalog::{suggest_slurry_volume, Catalog};
pub use traits::{CalculatorService, CatalogService};

pub use types::{
    // DTOs
    CalcOutcome, CalcParams, CellLine, ConfluencyParams, ConfluencyResult, DilutionInputMode,
    DilutionParams, DilutionResult, DoublingTimeSource, SeedSplitParams, SeedSplitResult, Vessel,
    // Errors
    ServiceError, ServiceResult,
};

// Re-export implementations (optional - adapters can use their own)
pub use impls::{CalculatorServiceImpl, CalculatorSettings, CatalogServiceImpl};
