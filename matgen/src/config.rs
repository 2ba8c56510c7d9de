use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const DEFAULT_SIZES: [usize; 5] = [64, 128, 256, 512, 1024];
pub const DEFAULT_OUTPUT_DIR: &str = "matrices";
pub const DEFAULT_SEED: u64 = 42;

/// Labels written for every size, in draw order.
pub const LABELS: [&str; 2] = ["A", "B"];
/// Half-open range every generated element is drawn from.
pub const VALUE_RANGE: Range<i32> = 0..10;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Square matrix dimensions, generated in this order.
    pub sizes: Vec<usize>,
    pub output_dir: PathBuf,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorConfig {
    pub fn with_sizes<I: IntoIterator<Item = usize>>(mut self, sizes: I) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    pub fn output_path(&self, label: &str, size: usize) -> PathBuf {
        output_path(&self.output_dir, label, size)
    }
}

pub fn output_path(dir: &Path, label: &str, size: usize) -> PathBuf {
    dir.join(format!("{label}_{size}.bin"))
}
