//! Infrastructure Layer: Bounds Calculator
//!
//! Provides minimum and maximum representable values for integer categories
//! of any byte-aligned width, derived from bit patterns rather than from
//! pre-supplied limit constants.
//!
//! ## Overview
//!
//! The `infrastructure_bounds_calculator` crate is part of the infrastructure
//! layer. It works on `IntegerTypeDescriptor` values, so the same code serves
//! host categories from the width probe, Rust primitives and widths no host
//! has natively (24, 128, 256 bits and so on).
//!
//! ## Modules
//!
//! - **[`patterns`](patterns/index.html)**: All-ones and most-significant-bit
//!   patterns
//! - **[`calculator`](calculator/index.html)**: `BoundsCalculator` for two's
//!   and one's complement
//! - **[`native`](native/index.html)**: Descriptors for primitive integer types
//!   and the size-word high bit
//!
//! ## See Also
//!
//! - [`infrastructure_host_probe`](../infrastructure_host_probe/index.html): Source of descriptors and the signed representation

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

pub mod calculator;
pub mod native;
pub mod patterns;

pub use calculator::BoundsCalculator;
pub use native::{descriptor_of, is_signed, NativeInteger, SIZE_HIGH_BIT};
pub use patterns::{all_ones_pattern, msb_pattern};
