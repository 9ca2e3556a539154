// Dweve SortBench - Cross-language sorting benchmark harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Binary dataset format.
//!
//! A dataset file is a 4-byte unsigned little-endian count `n` followed by
//! exactly `n` 4-byte little-endian two's complement integers. There is no
//! padding, no trailing data and no checksum. Byte order is fixed by the
//! format, so `to_le_bytes`/`from_le_bytes` are used on every host.
//!
//! Decoding is strict: a header shorter than 4 bytes or a payload whose length
//! is not exactly `4 * n` is a [`CoreError::MalformedDataset`]. A partially
//! written file is never accepted as a smaller dataset.

use crate::error::{CoreError, Result};
use std::fs;
use std::path::Path;

/// Size of the `u32` count header in bytes.
pub const HEADER_LEN: usize = 4;

/// Size of one encoded value in bytes.
pub const VALUE_LEN: usize = 4;

/// Returns the encoded size in bytes of a dataset with `n` values.
pub fn encoded_len(n: usize) -> usize {
    HEADER_LEN + n * VALUE_LEN
}

/// Encodes values into the dataset format.
///
/// Fails with [`CoreError::DatasetTooLarge`] when the count does not fit the
/// `u32` header.
pub fn encode(values: &[i32]) -> Result<Vec<u8>> {
    let count = u32::try_from(values.len())
        .map_err(|_| CoreError::DatasetTooLarge { len: values.len() })?;

    let mut out = Vec::with_capacity(encoded_len(values.len()));
    out.extend_from_slice(&count.to_le_bytes());
    for v in values {
        out.extend_from_slice(&v.to_le_bytes());
    }
    Ok(out)
}

/// Decodes a dataset buffer.
pub fn decode(bytes: &[u8]) -> Result<Vec<i32>> {
    if bytes.len() < HEADER_LEN {
        return Err(CoreError::malformed(format!(
            "header needs {} bytes, got {}",
            HEADER_LEN,
            bytes.len()
        )));
    }

    let (header, payload) = bytes.split_at(HEADER_LEN);
    let count = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);

    // u64 keeps the product exact on 32-bit hosts.
    let expected = u64::from(count) * VALUE_LEN as u64;
    if payload.len() as u64 != expected {
        return Err(CoreError::malformed(format!(
            "declared {} values ({} payload bytes), found {} payload bytes",
            count,
            expected,
            payload.len()
        )));
    }

    Ok(payload
        .chunks_exact(VALUE_LEN)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Reads and decodes a dataset file.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Vec<i32>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| CoreError::io_error(path, e))?;
    decode(&bytes).map_err(|e| e.in_file(path))
}

/// Encodes and writes a dataset file.
///
/// The bytes go to a sibling `.tmp` file that is renamed into place, so an
/// interrupted write never leaves a truncated dataset under the final name.
pub fn write_dataset(path: impl AsRef<Path>, values: &[i32]) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode(values)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    fs::write(tmp, &bytes).map_err(|e| CoreError::io_error(tmp, e))?;
    fs::rename(tmp, path).map_err(|e| CoreError::io_error(path, e))
}
