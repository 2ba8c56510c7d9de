use crate::codec::{encoded_len, write_matrix};
use crate::config::{GeneratorConfig, LABELS, VALUE_RANGE};
use crate::error::{Error, Result};
use crate::tensor::{Dim2, Matrix};
use rand::Rng;
use rand::distributions::Uniform;
use std::io;
use std::path::{Path, PathBuf};

/// Draws square matrices from a borrowed random stream.
///
/// Every matrix advances the stream by its element count, so the contents of
/// a matrix depend on every matrix drawn before it.
pub struct MatrixGenerator<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    dist: Uniform<i32>,
}

impl<'a, R: Rng + ?Sized> MatrixGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        MatrixGenerator {
            rng,
            dist: Uniform::from(VALUE_RANGE),
        }
    }

    pub fn next_matrix(&mut self, size: usize) -> Matrix<i32> {
        Matrix::from_distribution(&mut *self.rng, self.dist, Dim2::square(size))
    }
}

fn create_output_dir(dir: &Path) -> Result<()> {
    tracing::debug!(dir = %dir.display(), "Creating output directory");
    std::fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes one file per (size, label) pair, sizes outer and [`LABELS`] inner.
///
/// Every size must be positive; sizes are checked before anything touches
/// the filesystem. `on_saved` is called after each file is fully written and
/// its error aborts the run like a write failure. The first failure aborts
/// the run; files written before it are left in place, and files in the
/// directory that this run does not produce are never touched.
pub fn generate<R, F>(
    config: &GeneratorConfig,
    rng: &mut R,
    mut on_saved: F,
) -> Result<Vec<PathBuf>>
where
    R: Rng + ?Sized,
    F: FnMut(&Path) -> io::Result<()>,
{
    if config.sizes.contains(&0) {
        return Err(Error::ZeroSize);
    }
    create_output_dir(&config.output_dir)?;

    let mut generator = MatrixGenerator::new(rng);
    let mut written = Vec::with_capacity(config.sizes.len() * LABELS.len());
    for &size in &config.sizes {
        for label in LABELS {
            let matrix = generator.next_matrix(size);
            tracing::trace!(label, size, "Generated {matrix:?}");

            let path = config.output_path(label, size);
            write_matrix(&path, &matrix)?;
            tracing::info!(
                path = %path.display(),
                bytes = encoded_len::<i32>(*matrix.dims()),
                "Matrix written"
            );

            on_saved(&path).map_err(|source| Error::Report {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }
    }
    Ok(written)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_values_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut generator = MatrixGenerator::new(&mut rng);
        let m = generator.next_matrix(32);
        assert_eq!(&Dim2(32, 32), m.dims());
        assert!(m.iter().all(|v| VALUE_RANGE.contains(v)));
    }

    #[test]
    fn test_shared_stream() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut generator = MatrixGenerator::new(&mut rng);
        let a = generator.next_matrix(4);
        let b = generator.next_matrix(4);
        assert_ne!(a, b);

        // one 2x16 draw consumes the stream exactly like two 4x4 draws
        let mut rng = StdRng::seed_from_u64(42);
        let dist = Uniform::from(VALUE_RANGE);
        let both = Matrix::from_distribution(&mut rng, dist, Dim2(2, 16));
        let rows: Vec<&[i32]> = both.rows().collect();
        assert_eq!(a.as_ref(), rows[0]);
        assert_eq!(b.as_ref(), rows[1]);
    }

    #[test]
    fn test_zero_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("matrices");
        let config = GeneratorConfig::default()
            .with_sizes([2, 0])
            .with_output_dir(&output_dir);
        let mut rng = config.rng();
        let result = generate(&config, &mut rng, |_| Ok(()));
        assert!(matches!(result, Err(Error::ZeroSize)));
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_report_failure_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default()
            .with_sizes([2])
            .with_output_dir(dir.path());
        let mut rng = config.rng();
        let result = generate(&config, &mut rng, |_| {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        });
        match result {
            Err(Error::Report { path, source }) => {
                assert_eq!(config.output_path("A", 2), path);
                assert_eq!(io::ErrorKind::BrokenPipe, source.kind());
            }
            other => panic!("expected a report error, got {other:?}"),
        }
        assert!(!config.output_path("B", 2).exists());
    }
}
