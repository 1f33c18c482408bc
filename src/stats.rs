/// Counts reported after a network has been serialized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub vertices: usize,
    pub edges: usize,
    pub weighted: bool,
    pub directed: bool,
}

impl WriteSummary {
    pub fn kind(&self) -> &'static str {
        match (self.directed, self.weighted) {
            (true, true) => "weighted directed",
            (true, false) => "directed",
            (false, true) => "weighted undirected",
            (false, false) => "undirected",
        }
    }

    /// Mean number of edge endpoints per vertex.
    pub fn mean_degree(&self) -> f64 {
        if self.vertices == 0 {
            0.0
        } else {
            2.0 * self.edges as f64 / self.vertices as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_zero() {
        let summary = WriteSummary::default();
        assert_eq!(summary.vertices, 0);
        assert_eq!(summary.edges, 0);
        assert_eq!(summary.mean_degree(), 0.0);
    }

    #[test]
    fn kind_reflects_flags() {
        let summary = WriteSummary {
            vertices: 4,
            edges: 4,
            weighted: false,
            directed: true,
        };
        assert_eq!(summary.kind(), "directed");
        assert_eq!(
            WriteSummary {
                weighted: true,
                directed: false,
                ..summary
            }
            .kind(),
            "weighted undirected"
        );
    }

    #[test]
    fn mean_degree_counts_both_endpoints() {
        let summary = WriteSummary {
            vertices: 4,
            edges: 4,
            weighted: false,
            directed: true,
        };
        assert_eq!(summary.mean_degree(), 2.0);
    }
}
