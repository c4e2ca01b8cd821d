//! Infrastructure Layer: Endian Codec
//!
//! Provides canonical (big-endian) encoding of multi-byte integers for the
//! runtime's saved images and network messages. Any two hosts encoding the
//! same value at the same width produce the same bytes.
//!
//! ## Overview
//!
//! The `infrastructure_endian_codec` crate is part of the infrastructure
//! layer. Every multi-byte integer leaving the process goes through
//! [`EndianCodec::to_canonical`], and every one entering goes through
//! [`EndianCodec::from_canonical`].
//!
//! ## Modules
//!
//! - **[`swap`](swap/index.html)**: Shift-and-mask and intrinsic byte reversal
//!   for 16, 32 and 64 bits
//! - **[`codec`](codec/index.html)**: `EndianCodec` and its `SwapStrategy`
//!
//! ## See Also
//!
//! - [`infrastructure_host_probe`](../infrastructure_host_probe/index.html): Host byte order and category widths

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

pub mod codec;
pub mod swap;

pub use codec::{EndianCodec, SwapStrategy};
