//! Raw fixture format: `size * size` elements, row-major, little-endian,
//! with no header, padding or trailer.

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::tensor::{Dim2, Dims, Matrix, Tensor1};
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn encoded_len<T: DType>(dims: Dim2) -> usize {
    dims.tensor_len() * T::SIZE
}

pub fn encode<T: DType, W: Write + ?Sized>(matrix: &Matrix<T>, writer: &mut W) -> io::Result<()> {
    for &el in matrix {
        el.write_le(writer)?;
    }
    Ok(())
}

/// Creates or truncates `path` and writes the encoded matrix to it.
pub fn write_matrix<T: DType>(path: &Path, matrix: &Matrix<T>) -> Result<()> {
    let write = || -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        encode(matrix, &mut writer)?;
        writer.flush()
    };
    write().map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes a square matrix, `path` is only used for error reporting.
pub fn decode<T: DType>(path: &Path, bytes: &[u8], size: usize) -> Result<Matrix<T>> {
    let dims = Dim2::square(size);
    let expected = encoded_len::<T>(dims);
    if bytes.len() != expected {
        return Err(Error::Length {
            path: path.to_path_buf(),
            expected,
            actual: bytes.len(),
        });
    }
    let data: Vec<T> = bytes.chunks_exact(T::SIZE).map(T::from_le_slice).collect();
    Ok(Tensor1::from_vec_1d(data).reshape(dims))
}

pub fn read_matrix<T: DType>(path: &Path, size: usize) -> Result<Matrix<T>> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode(path, &bytes, size)
}
