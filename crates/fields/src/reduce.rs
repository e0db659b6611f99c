use rayon::prelude::*;

/// 全セルにわたる総和（OpenFOAM の `gSum` に相当）。
///
/// 実装はメッシュがどう分割されていても同じ入力に対して同じ結果を返すこと。
pub trait GlobalReduce: Send + Sync {
    fn sum(&self, values: &[f64]) -> f64;
}

/// 単一ドメイン。セル順に逐次加算する。
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialSum;

impl GlobalReduce for SerialSum {
    fn sum(&self, values: &[f64]) -> f64 {
        values.iter().sum()
    }
}

/// 分割メッシュ上の総和。
///
/// `offsets[d]..offsets[d + 1]` がドメイン `d` のセル範囲。各ドメインの部分和を並列に求め、
/// ドメイン番号順に合算する。合算順が固定なのでスレッド数に依らず結果は決定的。
#[derive(Debug, Clone)]
pub struct DomainSum {
    offsets: Vec<usize>,
}

impl DomainSum {
    /// 各ドメインのセル数から構築する。
    pub fn from_sizes(sizes: &[usize]) -> Self {
        let mut offsets = Vec::with_capacity(sizes.len() + 1);
        offsets.push(0);
        let mut end = 0;
        for &n in sizes {
            end += n;
            offsets.push(end);
        }
        Self { offsets }
    }

    pub fn n_domains(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn n_cells(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// ドメインごとの部分和。長さが合わない入力では末尾ドメインを切り詰める。
    pub fn partial_sums(&self, values: &[f64]) -> Vec<f64> {
        self.offsets
            .par_windows(2)
            .map(|w| {
                let start = w[0].min(values.len());
                let end = w[1].min(values.len());
                values[start..end].iter().sum::<f64>()
            })
            .collect()
    }
}

impl GlobalReduce for DomainSum {
    fn sum(&self, values: &[f64]) -> f64 {
        self.partial_sums(values).into_iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_sum_of_known_values() {
        let got = SerialSum.sum(&[0.5, 1.5, 2.0]);
        assert!((got - 4.0).abs() < 1e-14);
    }

    #[test]
    fn serial_sum_of_empty_is_zero() {
        assert_eq!(SerialSum.sum(&[]), 0.0);
    }

    #[test]
    fn domain_sum_matches_serial_within_round_off() {
        let values: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.37).sin()).collect();
        let serial = SerialSum.sum(&values);
        let domains = DomainSum::from_sizes(&[100, 250, 0, 650]);
        assert_eq!(domains.n_domains(), 4);
        assert_eq!(domains.n_cells(), 1000);
        let diff = (domains.sum(&values) - serial).abs();
        assert!(diff < 1e-10, "diff {diff}");
    }

    #[test]
    fn domain_sum_is_deterministic() {
        let values: Vec<f64> = (0..10_000).map(|i| 1.0 / (1.0 + i as f64)).collect();
        let domains = DomainSum::from_sizes(&[3000, 3000, 4000]);
        let first = domains.sum(&values);
        for _ in 0..5 {
            assert_eq!(domains.sum(&values).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn partial_sums_follow_domain_order() {
        let domains = DomainSum::from_sizes(&[2, 1]);
        assert_eq!(domains.partial_sums(&[1.0, 2.0, 10.0]), vec![3.0, 10.0]);
    }
}
