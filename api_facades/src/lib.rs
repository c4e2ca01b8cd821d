//! API Facades Layer
//!
//! Provides the single entry point other runtime components use for portable
//! integer representation: category widths, bounds, canonical byte order and
//! the portable time interval.
//!
//! All facades call underlying Rust modules from inner layers.

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

pub mod numeric_facades;

pub use numeric_facades::{init, NumericLayer};

// Re-export the types callers need alongside the facade
pub use entities_numeric_types::{
    BitWidth, BoundsPair, ByteOrder, EndianValue, IntegerCategory, IntegerTypeDescriptor,
    NumericError, SignedRepresentation, TimeInterval, WordBits,
};
pub use infrastructure_host_probe::{CapabilityError, HostFacts};
