//! Entities Layer: Numeric Types
//!
//! Provides the data model of the portable numeric representation layer used
//! wherever the runtime moves binary values across an architecture boundary
//! (saved program images, network messages, checksums).
//!
//! ## Overview
//!
//! The `entities_numeric_types` crate is part of the entities layer. It holds
//! plain value types only; the host probe, bounds calculator and endian codec
//! in the infrastructure layer operate on them.
//!
//! ## Modules
//!
//! - **[`width`](width/index.html)**: `BitWidth` (with the "unsupported"
//!   sentinel), `IntegerCategory` and `IntegerTypeDescriptor`
//! - **[`bounds`](bounds/index.html)**: `BoundsPair` with arbitrary-precision
//!   extremes
//! - **[`order`](order/index.html)**: `ByteOrder`, `SignedRepresentation` and
//!   the tagged `EndianValue`
//! - **[`time`](time/index.html)**: `TimeInterval`
//! - **[`error`](error/index.html)**: `NumericError`
//!
//! ## See Also
//!
//! - [`infrastructure_host_probe`](../../infrastructure/infrastructure_host_probe/index.html): Width table and host facts
//! - [`infrastructure_bounds_calculator`](../../infrastructure/infrastructure_bounds_calculator/index.html): Bounds derivation
//! - [`infrastructure_endian_codec`](../../infrastructure/infrastructure_endian_codec/index.html): Canonical byte order

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

pub mod bounds;
pub mod error;
pub mod order;
pub mod time;
pub mod width;

pub use bounds::BoundsPair;
pub use error::NumericError;
pub use order::{ByteOrder, EndianValue, SignedRepresentation, ValueOrder, WordBits};
pub use time::TimeInterval;
pub use width::{BitWidth, IntegerCategory, IntegerTypeDescriptor, BYTE_BITS};
