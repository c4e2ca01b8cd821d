//! Infrastructure Layer: Host Probe
//!
//! Provides the host facts the numeric representation layer is parameterized
//! by: native byte order, signed-integer representation and the bit width of
//! each integer category the runtime cares about.
//!
//! ## Overview
//!
//! The `infrastructure_host_probe` crate is part of the infrastructure layer.
//! It replaces scattered build-time feature tests with a single immutable
//! [`HostCapabilities`] record, built once and consulted by value afterwards.
//!
//! ## Modules
//!
//! - **[`facts`](facts/index.html)**: Raw host facts, detected or simulated
//! - **[`width_table`](width_table/index.html)**: The word width probe
//! - **[`capabilities`](capabilities/index.html)**: Validated capability record
//!   and fatal initialization errors
//! - **[`initialization`](initialization/index.html)**: One-time process-wide
//!   detection
//!
//! ## Usage
//!
//! ```rust
//! use entities_numeric_types::IntegerCategory;
//! use infrastructure_host_probe::init_host_capabilities;
//!
//! let caps = init_host_capabilities().unwrap();
//! let width = caps.width_of(IntegerCategory::NativeInt);
//! assert!(width.is_supported());
//! ```
//!
//! ## See Also
//!
//! - [`entities_numeric_types`](../../entities/entities_numeric_types/index.html): Width and order types

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

pub mod capabilities;
pub mod facts;
pub mod initialization;
pub mod width_table;

pub use capabilities::{CapabilityError, HostCapabilities};
pub use facts::{HostFacts, ABSENT_TYPE_SIZE};
pub use initialization::{init_host_capabilities, is_initialized};
pub use width_table::WordWidthTable;
