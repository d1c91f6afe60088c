// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Contract testing module

mod calculator_tests;
mod catalog_tests;
mod health_tests;
mod test_utils;
