use crate::tensor::{Dims, Tensor};
use std::fmt::{Debug, Formatter, Write};

/// Writes `items` separated by `sep`, replacing the middle with a
/// `...(n hidden)` marker when there are more than `max` of them.
fn fmt_truncated<I, F>(
    items: I,
    max: usize,
    sep: &str,
    f: &mut Formatter,
    mut fmt: F,
) -> std::fmt::Result
where
    I: ExactSizeIterator,
    F: FnMut(I::Item, &mut Formatter) -> std::fmt::Result,
{
    let len = items.len();
    let keep = max / 2;
    let hidden = if len > max { len - 2 * keep } else { 0 };
    for (i, item) in items.enumerate() {
        if hidden > 0 && i >= keep && i < len - keep {
            if i == keep {
                write!(f, "{sep}...({hidden} hidden)")?;
            }
            continue;
        }
        if i > 0 {
            f.write_str(sep)?;
        }
        fmt(item, f)?;
    }
    Ok(())
}

const DEBUG_LIMIT_DIM_OUTER: usize = 5;
const DEBUG_LIMIT_DIM_INNER: usize = 10;

fn fmt_row<T: Debug>(row: &[T], f: &mut Formatter) -> std::fmt::Result {
    f.write_char('[')?;
    fmt_truncated(row.iter(), DEBUG_LIMIT_DIM_INNER, ", ", f, |el, f| Debug::fmt(el, f))?;
    f.write_char(']')
}

impl<T: Debug, D: Dims> Debug for Tensor<T, D> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if D::N < 2 || self.is_empty() {
            fmt_row(self.as_ref(), f)?;
        } else {
            f.write_str("[\n   ")?;
            fmt_truncated(self.rows(), DEBUG_LIMIT_DIM_OUTER, ",\n   ", f, fmt_row)?;
            f.write_str("\n]")?;
        }
        write!(
            f,
            " dtype={} dims={} len={}",
            std::any::type_name::<T>(),
            self.dims(),
            self.len()
        )
    }
}

#[cfg(test)]
mod test {
    use crate::tensor::{Dim2, Matrix, Tensor1};

    #[test]
    fn test_empty() {
        let v: Tensor1<i32> = Tensor1::from_vec_1d(Vec::new());
        assert_eq!("[] dtype=i32 dims=(0) len=0", format!("{v:?}"));
        let m: Matrix<i32> = Matrix::from_vec(Vec::new(), Dim2::square(0));
        assert_eq!("[] dtype=i32 dims=(0, 0) len=0", format!("{m:?}"));
    }

    #[test]
    fn test_small() {
        let v = Tensor1::from_vec_1d(vec![1, 2, 3, 4, 5]);
        assert_eq!("[1, 2, 3, 4, 5] dtype=i32 dims=(5) len=5", format!("{v:?}"));
        let m = Matrix::from_vec(vec![1, 2, 3, 4], Dim2::square(2));
        assert_eq!(
            "[\n   [1, 2],\n   [3, 4]\n] dtype=i32 dims=(2, 2) len=4",
            format!("{m:?}")
        );
    }

    #[test]
    fn test_large() {
        let a = Matrix::from_vec((0..200).collect::<Vec<i32>>(), Dim2(10, 20));
        let expected = r#"[
   [0, 1, 2, 3, 4, ...(10 hidden), 15, 16, 17, 18, 19],
   [20, 21, 22, 23, 24, ...(10 hidden), 35, 36, 37, 38, 39],
   ...(6 hidden),
   [160, 161, 162, 163, 164, ...(10 hidden), 175, 176, 177, 178, 179],
   [180, 181, 182, 183, 184, ...(10 hidden), 195, 196, 197, 198, 199]
] dtype=i32 dims=(10, 20) len=200"#;
        assert_eq!(expected, format!("{a:?}"))
    }
}
