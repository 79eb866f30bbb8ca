use rand::Rng;

/// How the sample indices handed to each tree are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bagging {
    /// Every tree trains on the supplied indices as given.
    #[default]
    None,
    /// Every tree trains on `n` indices drawn with replacement from the `n` supplied.
    Bootstrap,
}

impl Bagging {
    /// Produce the index sequence one tree will own and reorder.
    pub fn draw<R: Rng + ?Sized>(self, sample_indices: &[usize], rng: &mut R) -> Vec<usize> {
        match self {
            Bagging::None => sample_indices.to_vec(),
            Bagging::Bootstrap => {
                let n = sample_indices.len();
                if n == 0 {
                    return Vec::new();
                }
                (0..n).map(|_| sample_indices[rng.gen_range(0..n)]).collect()
            }
        }
    }
}
