//! Text-format tensor serialization
//!
//! Tensors are stored as a stream of whitespace-separated tokens in a fixed
//! order:
//!
//! 1. the rank,
//! 2. `rank` shape extents, dimension 0 first,
//! 3. `product(shape)` element values in row-major order (last dimension
//!    fastest-varying).
//!
//! The writer emits one token per line; the reader accepts any whitespace
//! separation, so only token order and count are load-bearing. There is no
//! header and no type tag: the element type is chosen by the reader's type
//! parameter.
//!
//! Values are formatted with `Display` and parsed with `FromStr`. Rust's
//! float formatting emits the shortest decimal that parses back to the same
//! bits, so `f32`/`f64` round-trip exactly.
//!
//! # Examples
//!
//! ```
//! use tensa_core::{read_tensor, write_tensor, Tensor};
//!
//! let t = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
//!
//! let mut buf = Vec::new();
//! write_tensor(&t, &mut buf).unwrap();
//!
//! let back: Tensor<i32> = read_tensor(&buf[..]).unwrap();
//! assert_eq!(back, t);
//! ```

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use num_traits::Num;

use crate::error::{TensorError, TensorResult};
use crate::tensor::Tensor;
use crate::types::checked_element_count;

/// Upper bound on the element capacity reserved up front while reading;
/// larger tensors grow the buffer as tokens actually arrive.
const READ_PREALLOC_LIMIT: usize = 1 << 16;

/// Write a tensor to a generic writer as a whitespace-separated token
/// stream.
///
/// # Errors
///
/// Returns [`TensorError::Io`] if the writer fails.
pub fn write_tensor<T, W>(tensor: &Tensor<T>, mut writer: W) -> TensorResult<()>
where
    T: Display,
    W: Write,
{
    let io_err = |source| TensorError::Io {
        operation: "write",
        source,
    };

    writeln!(writer, "{}", tensor.rank()).map_err(io_err)?;
    for extent in tensor.shape() {
        writeln!(writer, "{extent}").map_err(io_err)?;
    }
    for value in tensor.as_slice() {
        writeln!(writer, "{value}").map_err(io_err)?;
    }
    writer.flush().map_err(io_err)
}

/// Read a tensor from a generic buffered reader.
///
/// The stream must contain exactly the tokens the format defines: a short
/// stream, a non-numeric token, a shape whose element count overflows, or
/// trailing tokens are all [`TensorError::Malformed`]. A failed read is
/// never mistaken for a valid zero-filled tensor.
///
/// # Errors
///
/// [`TensorError::Io`] if the reader fails, [`TensorError::Malformed`] if
/// the token stream is not a well-formed tensor.
pub fn read_tensor<T, R>(mut reader: R) -> TensorResult<Tensor<T>>
where
    T: Clone + Num + FromStr,
    <T as FromStr>::Err: Display,
    R: BufRead,
{
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|source| TensorError::Io {
            operation: "read",
            source,
        })?;
    let mut tokens = contents.split_whitespace();

    let rank: usize = parse_token(tokens.next(), "rank")?;

    let mut shape = Vec::with_capacity(rank);
    for dim in 0..rank {
        let extent: usize = parse_token(tokens.next(), &format!("extent of dimension {dim}"))?;
        shape.push(extent);
    }

    let total = checked_element_count(&shape).ok_or_else(|| TensorError::Malformed {
        reason: format!("shape {shape:?} overflows usize element count"),
    })?;

    // The element count comes from an untrusted header; reserve only a
    // bounded amount and let the end-of-data check reject bogus counts
    // before the buffer ever has to grow that far.
    let mut data = Vec::with_capacity(total.min(READ_PREALLOC_LIMIT));
    for i in 0..total {
        let value: T = parse_token(tokens.next(), &format!("element {i} of {total}"))?;
        data.push(value);
    }

    if tokens.next().is_some() {
        return Err(TensorError::Malformed {
            reason: format!("trailing data after {total} elements"),
        });
    }

    Tensor::from_vec(data, &shape)
}

/// Write a tensor to a file at `path`.
///
/// Errors identify the operation and the path.
///
/// # Examples
///
/// ```no_run
/// use tensa_core::{write_tensor_to_file, Tensor};
///
/// let t = Tensor::from_elem(&[2, 3], 1.5);
/// write_tensor_to_file(&t, "tensor.txt").unwrap();
/// ```
pub fn write_tensor_to_file<T, P>(tensor: &Tensor<T>, path: P) -> TensorResult<()>
where
    T: Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| TensorError::File {
        operation: "write",
        path: path.to_path_buf(),
        source,
    })?;
    write_tensor(tensor, BufWriter::new(file)).map_err(|e| e.at_path("write", path))
}

/// Read a tensor from a file at `path`.
///
/// A missing file, a truncated stream, or malformed tokens all surface as
/// structured errors naming the path.
pub fn read_tensor_from_file<T, P>(path: P) -> TensorResult<Tensor<T>>
where
    T: Clone + Num + FromStr,
    <T as FromStr>::Err: Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TensorError::File {
        operation: "read",
        path: path.to_path_buf(),
        source,
    })?;
    read_tensor(BufReader::new(file)).map_err(|e| e.at_path("read", path))
}

fn parse_token<V>(token: Option<&str>, what: &str) -> TensorResult<V>
where
    V: FromStr,
    <V as FromStr>::Err: Display,
{
    let token = token.ok_or_else(|| TensorError::Malformed {
        reason: format!("unexpected end of data while reading {what}"),
    })?;
    token.parse().map_err(|e| TensorError::Malformed {
        reason: format!("invalid token `{token}` for {what}: {e}"),
    })
}
