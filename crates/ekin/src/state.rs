use std::collections::HashSet;

pub type BaseInt = i8;

/// Largest supported state length. Subsets are enumerated as bitmasks.
pub const MAX_SIZE: usize = 16;

/// Sorted vector of [`BaseInt`]. Elements stay strictly inside
/// `BaseInt::MIN..BaseInt::MAX`, so negation never overflows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EkinState(Vec<BaseInt>);

impl EkinState {
    pub fn zero(size: usize) -> Self {
        Self(vec![0; size])
    }

    pub fn new(mut values: Vec<BaseInt>) -> Self {
        values.sort_unstable();
        Self(values)
    }

    pub fn values(&self) -> &[BaseInt] {
        &self.0
    }

    /// Largest element, or 0 when every element is negative.
    pub fn max(&self) -> BaseInt {
        self.0.iter().copied().fold(0, BaseInt::max)
    }

    /// The state with every element negated.
    pub fn inverse(&self) -> Self {
        Self::new(self.0.iter().map(|v| -v).collect())
    }

    /// Moves every position in `mask` by `delta`.
    ///
    /// Fails with the offending value when an element reaches either end of
    /// the `BaseInt` range.
    fn stepped(&self, mask: u32, delta: BaseInt) -> Result<Self, BaseInt> {
        let mut next = self.0.clone();
        for (j, v) in next.iter_mut().enumerate() {
            if mask & (1 << j) != 0 {
                *v += delta;
                if *v == BaseInt::MAX || *v == BaseInt::MIN {
                    return Err(*v);
                }
            }
        }
        Ok(Self::new(next))
    }

    /// Every state one step away that is not in `seen`, in subset order.
    pub fn successors(&self, seen: &HashSet<EkinState>) -> Result<Vec<EkinState>, BaseInt> {
        let n = self.0.len();
        let mut out = Vec::new();

        for mask in 1u32..(1 << n) {
            let sum: i64 = (0..n)
                .filter(|j| mask & (1 << j) != 0)
                .map(|j| i64::from(self.0[j]))
                .sum();

            let deltas: &[BaseInt] = match sum.signum() {
                -1 => &[1],
                1 => &[-1],
                _ => &[1, -1],
            };

            for &delta in deltas {
                let next = self.stepped(mask, delta)?;
                if !seen.contains(&next) {
                    out.push(next);
                }
            }
        }

        Ok(out)
    }
}
