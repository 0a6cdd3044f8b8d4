//! Human-readable tensor rendering
//!
//! Diagnostic output only; it is never parsed back. Rank 0 prints the single
//! element, rank 1 a line of space-separated elements, rank 2 one line per
//! row. Rank 3 and above render recursively with a `Dimension k (N
//! elements)` header per outer index, indented per nesting level, down to
//! one `[i]: value` line per innermost element.

use std::fmt;

use super::types::Tensor;

impl<T: fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            0 => writeln!(f, "{}", self.data[0]),
            1 => {
                write_row(f, &self.data)?;
                writeln!(f)
            }
            2 => {
                let cols = self.shape[1];
                for row in self.data.chunks(cols.max(1)) {
                    write_row(f, row)?;
                    writeln!(f)?;
                }
                Ok(())
            }
            _ => self.fmt_nested(f, 0, 0, 0),
        }
    }
}

impl<T: fmt::Display> Tensor<T> {
    fn fmt_nested(
        &self,
        f: &mut fmt::Formatter<'_>,
        dim: usize,
        offset: usize,
        depth: usize,
    ) -> fmt::Result {
        let pad = "  ".repeat(depth);
        if dim + 1 == self.rank() {
            for i in 0..self.shape[dim] {
                let value = &self.data[offset + i * self.strides[dim]];
                writeln!(f, "{pad}[{i}]: {value}")?;
            }
        } else {
            for i in 0..self.shape[dim] {
                writeln!(
                    f,
                    "{pad}Dimension {} ({} elements)",
                    dim + 1,
                    self.shape[dim + 1]
                )?;
                self.fmt_nested(f, dim + 1, offset + i * self.strides[dim], depth + 1)?;
            }
        }
        Ok(())
    }
}

fn write_row<T: fmt::Display>(f: &mut fmt::Formatter<'_>, row: &[T]) -> fmt::Result {
    for (i, value) in row.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}
