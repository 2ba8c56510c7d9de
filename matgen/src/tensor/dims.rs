use std::fmt::{Debug, Display, Formatter};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Dim1(pub usize);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Dim2(pub usize, pub usize);

impl Dim2 {
    #[inline]
    pub fn square(size: usize) -> Self {
        Dim2(size, size)
    }
}

pub trait Dims: Copy + Debug + Eq + Display {
    const N: usize;
    type Less: Dims;
    fn tensor_len(&self) -> usize;
    fn without_first_axis(&self) -> Self::Less;
}

impl Dims for Dim1 {
    const N: usize = 1;
    type Less = Dim1;
    #[inline]
    fn tensor_len(&self) -> usize {
        self.0
    }
    /// A vector has no inner axis, so each "row" is a single element.
    fn without_first_axis(&self) -> Self::Less {
        Dim1(1)
    }
}

fn fmt_axes(axes: &[usize], f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, axis) in axes.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{axis}")?;
    }
    write!(f, ")")
}

impl Display for Dim1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_axes(&[self.0], f)
    }
}

impl Dims for Dim2 {
    const N: usize = 2;
    type Less = Dim1;
    #[inline]
    fn tensor_len(&self) -> usize {
        self.0 * self.1
    }
    fn without_first_axis(&self) -> Self::Less {
        Dim1(self.1)
    }
}

impl Display for Dim2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_axes(&[self.0, self.1], f)
    }
}
