/// Branch of the tree; the position itself lives in `KDTree::points`.
#[derive(Debug, Clone)]
struct Split {
    index: usize,
    axis: usize,
    below: Option<Box<Split>>,
    above: Option<Box<Split>>,
}

impl Split {
    /// Splits `idx` at its median along the axis for `depth`, cycling
    /// north, east, TVD.
    fn grow(points: &[[f64; 3]], idx: &mut [usize], depth: usize) -> Option<Box<Split>> {
        if idx.is_empty() {
            return None;
        }
        let axis = depth % 3;
        let mid = idx.len() / 2;
        idx.select_nth_unstable_by(mid, |&a, &b| points[a][axis].total_cmp(&points[b][axis]));
        let (below, rest) = idx.split_at_mut(mid);
        let (index, above) = rest.split_first_mut()?;
        Some(Box::new(Split {
            index: *index,
            axis,
            below: Split::grow(points, below, depth + 1),
            above: Split::grow(points, above, depth + 1),
        }))
    }
}

/// Static 3D k-d tree over `[north, east, tvd]` positions, used for
/// closest-approach queries between wells.
#[derive(Debug, Clone)]
pub struct KDTree {
    points: Vec<[f64; 3]>,
    root: Option<Box<Split>>,
}

impl KDTree {
    pub fn build(points: &[[f64; 3]]) -> Self {
        let mut idx: Vec<usize> = (0..points.len()).collect();
        KDTree {
            root: Split::grow(points, &mut idx, 0),
            points: points.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of and distance to the stored point nearest `target`.
    /// Ties resolve to the lowest index.
    pub fn nearest(&self, target: [f64; 3]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        self.descend(self.root.as_deref(), target, &mut best);
        best.map(|(index, dist2)| (index, dist2.sqrt()))
    }

    fn descend(&self, node: Option<&Split>, target: [f64; 3], best: &mut Option<(usize, f64)>) {
        let Some(split) = node else {
            return;
        };
        let Some(point) = self.points.get(split.index) else {
            return;
        };

        let dist2: f64 = point.iter().zip(target).map(|(p, t)| (p - t) * (p - t)).sum();
        let better = match *best {
            None => true,
            Some((index, d)) => dist2 < d || (dist2 == d && split.index < index),
        };
        if better {
            *best = Some((split.index, dist2));
        }

        let delta = target[split.axis] - point[split.axis];
        let (near, far) = if delta < 0.0 {
            (&split.below, &split.above)
        } else {
            (&split.above, &split.below)
        };
        self.descend(near.as_deref(), target, best);
        if best.map_or(true, |(_, d)| delta * delta <= d) {
            self.descend(far.as_deref(), target, best);
        }
    }
}
