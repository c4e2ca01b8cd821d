//! Adapters Layer: Time Representation
//!
//! Provides a portable coarse time interval (whole seconds plus
//! microseconds) and reports how many bits its seconds field occupies, so
//! range checks on long-horizon dates have a width to reason about.
//!
//! ## Overview
//!
//! The `adapters_time_representation` crate is part of the adapters layer.
//! It adapts the host's `timeval` where one exists and supplies a fallback
//! record where it does not.
//!
//! ## Modules
//!
//! - **[`time_shim`](time_shim/index.html)**: Default interval, seconds-field
//!   width and `timeval` conversion
//!
//! ## See Also
//!
//! - [`entities_numeric_types`](../../entities/entities_numeric_types/index.html): `TimeInterval`
//! - [`infrastructure_bounds_calculator`](../../infrastructure/infrastructure_bounds_calculator/index.html): Seconds-field range

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

pub mod time_shim;

pub use time_shim::{
    default_time_interval, fits_seconds_field, seconds_bounds, seconds_field_width, time_source,
    TimeSource, FALLBACK_SECONDS_WIDTH,
};

#[cfg(unix)]
pub use time_shim::{from_timeval, to_timeval};
