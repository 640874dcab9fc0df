use nodegap_core::{Edge, EdgeSource};

#[derive(Clone)]
pub struct Pairs {
    edges: Vec<Edge>,
}

impl Pairs {
    #[must_use]
    pub fn new(pairs: &[(usize, usize)]) -> Self {
        Self {
            edges: pairs.iter().copied().map(Edge::from).collect(),
        }
    }
}

impl EdgeSource for Pairs {
    fn name(&self) -> &str {
        "pairs"
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
